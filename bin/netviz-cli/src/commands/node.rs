// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `netviz node` command: one node joined with the constants it consumes.

use inspector::InspectorConfig;
use std::path::PathBuf;

pub async fn execute(config: &InspectorConfig, model: PathBuf, id: String) -> anyhow::Result<()> {
    let session = super::open_session(config, &model).await?;
    super::print_json(config, &session.node(&id)?)
}
