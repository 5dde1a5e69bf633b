// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod graph;
pub mod inspect;
pub mod node;
pub mod summary;
pub mod zoo;

use inspector::{InspectorConfig, Session};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, then applies CLI overrides.
pub fn load_config(path: Option<&Path>, zoo_dir: Option<PathBuf>) -> anyhow::Result<InspectorConfig> {
    let mut config = match path {
        Some(path) => InspectorConfig::from_file(path)?,
        None => InspectorConfig::default(),
    };
    if let Some(dir) = zoo_dir {
        config.zoo_dir = dir;
    }
    tracing::debug!("config: {config:?}");
    Ok(config)
}

/// Reads a model file and loads it into a fresh session.
pub async fn open_session(config: &InspectorConfig, model: &Path) -> anyhow::Result<Session> {
    if !config.accepts(model) {
        anyhow::bail!(
            "'{}' is not a .{} file",
            model.display(),
            config.model_extension
        );
    }

    let bytes = tokio::fs::read(model)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read '{}': {e}", model.display()))?;

    let mut session = Session::new();
    session
        .load(&bytes)
        .map_err(|e| anyhow::anyhow!("failed to load model from '{}': {e}", model.display()))?;
    Ok(session)
}

/// Prints a view as JSON, pretty or compact per the configuration.
pub fn print_json<T: serde::Serialize>(config: &InspectorConfig, value: &T) -> anyhow::Result<()> {
    let json = if config.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
