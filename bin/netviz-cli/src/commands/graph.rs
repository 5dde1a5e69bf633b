// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `netviz graph` command: every node and edge.

use inspector::InspectorConfig;
use std::path::PathBuf;

pub async fn execute(config: &InspectorConfig, model: PathBuf) -> anyhow::Result<()> {
    let session = super::open_session(config, &model).await?;
    let listing = session.graph()?;
    tracing::info!(
        "listing {} nodes and {} edges",
        listing.nodes.len(),
        listing.edges.len()
    );
    super::print_json(config, &listing)
}
