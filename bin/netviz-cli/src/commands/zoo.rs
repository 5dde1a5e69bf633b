// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `netviz zoo` commands: list and fetch bundled sample models.

use inspector::InspectorConfig;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub async fn list(config: &InspectorConfig) -> anyhow::Result<()> {
    let zoo = config.zoo();
    let names = zoo.list().map_err(|e| {
        anyhow::anyhow!("cannot list zoo '{}': {e}", zoo.root().display())
    })?;

    if names.is_empty() {
        println!("no models in '{}'", zoo.root().display());
        return Ok(());
    }
    for name in names {
        let marker = if config.accepts(Path::new(&name)) { "" } else { "  (not loadable)" };
        println!("{name}{marker}");
    }
    Ok(())
}

pub async fn fetch(config: &InspectorConfig, name: String, out: Option<PathBuf>) -> anyhow::Result<()> {
    let file = config.zoo().open(&name)?;
    let mut reader = tokio::fs::File::from_std(file);

    let copied = match &out {
        Some(path) => {
            let mut writer = tokio::fs::File::create(path).await?;
            let n = tokio::io::copy(&mut reader, &mut writer).await?;
            writer.flush().await?;
            n
        }
        None => {
            let mut stdout = tokio::io::stdout();
            let n = tokio::io::copy(&mut reader, &mut stdout).await?;
            stdout.flush().await?;
            n
        }
    };

    tracing::info!("fetched '{name}' ({copied} bytes)");
    if let Some(path) = out {
        eprintln!("wrote {copied} bytes to '{}'", path.display());
    }
    Ok(())
}
