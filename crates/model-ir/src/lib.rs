// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-ir
//!
//! Decodes ONNX model bytes into an in-memory operator graph suitable for
//! inspection and visualization.
//!
//! - [`proto`]: the wire schema (`prost` messages) plus builder helpers.
//! - [`AttributeValue`]: a node attribute decoded from its tagged record.
//! - [`ConstantTable`]: name → [`ConstantEntry`] metadata for initializers.
//! - [`ModelGraph`]: operator nodes keyed by id, with producer → consumer
//!   edges inferred from shared tensor names.
//! - [`ModelMetadata`]: declared inputs/outputs, producer and versions.
//! - [`ModelLoader`]: turns bytes or a file into a [`Model`].
//!
//! Nothing is executed and no shapes are inferred: the graph is a
//! structural projection of what the model declares.
//!
//! # Example
//! ```no_run
//! use model_ir::ModelLoader;
//! use std::path::Path;
//!
//! let model = ModelLoader::load(Path::new("./model_zoo/cnn/lenet.onnx")).unwrap();
//! println!("{}", model.graph.summary());
//! for edge in model.graph.edges() {
//!     println!("  {} -> {} ({})", edge.source, edge.target, edge.tensor_name);
//! }
//! ```

mod attribute;
mod constants;
mod dtype;
mod error;
pub mod graph;
mod loader;
mod metadata;
pub mod proto;
mod shape;

pub use attribute::AttributeValue;
pub use constants::{ConstantEntry, ConstantTable};
pub use dtype::{describe_code, ElementType};
pub use error::ModelError;
pub use graph::{Edge, ModelGraph, OperatorNode};
pub use loader::{Model, ModelLoader};
pub use metadata::{ModelMetadata, OpsetImport, ValueInfo};
pub use shape::{format_shape, Dim};
