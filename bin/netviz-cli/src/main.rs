// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # netviz
//!
//! Command-line interface for the ONNX graph inspector.
//!
//! ## Usage
//! ```bash
//! # Model summary / full graph / one node, as JSON
//! netviz summary --model ./model_zoo/cnn/lenet.onnx
//! netviz graph --model ./model_zoo/cnn/lenet.onnx
//! netviz node --model ./model_zoo/cnn/lenet.onnx --id conv1
//!
//! # Human-readable overview
//! netviz inspect --model ./model_zoo/cnn/lenet.onnx
//!
//! # Bundled sample models
//! netviz zoo list
//! netviz zoo fetch lenet.onnx --out ./lenet.onnx
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "netviz",
    about = "Inspect the operator graph of an ONNX model",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model zoo directory (overrides the configuration file).
    #[arg(long, global = true)]
    zoo_dir: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the model summary as JSON.
    Summary {
        /// Path to the model file.
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Print every node and edge as JSON.
    Graph {
        /// Path to the model file.
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Print one node with the constants it consumes as JSON.
    Node {
        /// Path to the model file.
        #[arg(short, long)]
        model: PathBuf,

        /// Node id (declared name, or `node_<index>` for unnamed nodes).
        #[arg(long)]
        id: String,
    },

    /// Inspect a model: metadata, operator histogram and per-node table.
    Inspect {
        /// Path to the model file.
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Browse the bundled sample models.
    Zoo {
        #[command(subcommand)]
        command: ZooCommand,
    },
}

#[derive(Subcommand)]
enum ZooCommand {
    /// List the models in the zoo directory.
    List,

    /// Copy a zoo model to a file, or to stdout.
    Fetch {
        /// File name of the model inside the zoo.
        name: String,

        /// Destination path; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref(), cli.zoo_dir)?;

    match cli.command {
        Commands::Summary { model } => commands::summary::execute(&config, model).await,
        Commands::Graph { model } => commands::graph::execute(&config, model).await,
        Commands::Node { model, id } => commands::node::execute(&config, model, id).await,
        Commands::Inspect { model } => commands::inspect::execute(&config, model).await,
        Commands::Zoo { command } => match command {
            ZooCommand::List => commands::zoo::list(&config).await,
            ZooCommand::Fetch { name, out } => commands::zoo::fetch(&config, name, out).await,
        },
    }
}
