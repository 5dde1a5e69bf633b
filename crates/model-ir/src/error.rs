// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for model decoding and graph construction.

/// Errors that can occur while turning model bytes into a [`crate::Model`].
///
/// Every variant is fatal to the load that raised it; no partially built
/// graph is ever returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model file could not be read.
    #[error("failed to read model: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a well-formed model description.
    #[error("failed to decode model: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A string attribute is not valid UTF-8.
    #[error("attribute '{attribute}' of node '{node}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        node: String,
        attribute: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A constant tensor is malformed (e.g., a negative dimension).
    #[error("invalid constant tensor '{name}': {detail}")]
    InvalidTensor { name: String, detail: String },

    /// Two nodes declare the same non-empty name.
    #[error("duplicate node name '{name}'")]
    DuplicateNodeName { name: String },
}
