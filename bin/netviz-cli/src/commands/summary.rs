// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `netviz summary` command: node count, inputs/outputs and operator histogram.

use inspector::InspectorConfig;
use std::path::PathBuf;

pub async fn execute(config: &InspectorConfig, model: PathBuf) -> anyhow::Result<()> {
    let session = super::open_session(config, &model).await?;
    super::print_json(config, &session.summary()?)
}
