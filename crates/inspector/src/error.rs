// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the inspector session and asset store.

/// Errors reported by session operations and zoo lookups.
///
/// Each error aborts only the operation that raised it; the session's
/// current model is never modified by a failing call.
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    /// A query was made before any model was loaded.
    #[error("no model loaded")]
    NotLoaded,

    /// The requested node id is not in the current graph.
    #[error("node '{id}' not found")]
    NodeNotFound { id: String },

    /// The requested zoo asset does not exist.
    #[error("model '{name}' not found in zoo")]
    AssetNotFound { name: String },

    /// The model bytes could not be decoded into a graph.
    #[error("failed to load model: {0}")]
    Decode(#[from] model_ir::ModelError),

    /// Reading a model file or listing the zoo failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl InspectorError {
    /// Returns `true` for the not-found family (unknown node or asset).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. } | Self::AssetNotFound { .. })
    }
}
