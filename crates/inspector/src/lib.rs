// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # inspector
//!
//! The query side of the visualizer: a session holding at most one decoded
//! model, and the read-only views served from it.
//!
//! - [`Session`] / [`SharedSession`]: `Empty → Loaded` state holder. A load
//!   replaces the previous model wholesale or not at all.
//! - [`Summary`], [`GraphListing`], [`NodeDetail`]: serialisable views.
//! - [`ModelZoo`]: pass-through lookup of bundled sample models.
//! - [`InspectorConfig`]: TOML configuration for the outer surfaces.
//!
//! # Example
//! ```no_run
//! use inspector::{InspectorConfig, Session};
//!
//! # fn main() -> Result<(), inspector::InspectorError> {
//! let config = InspectorConfig::default();
//! let path = config.zoo().resolve("lenet.onnx")?;
//!
//! let mut session = Session::new();
//! session.load_path(&path)?;
//! let detail = session.node("conv1")?;
//! println!("{} consumes {} weight bytes", detail.id, detail.weight_bytes());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod session;
mod views;
mod zoo;

pub use config::InspectorConfig;
pub use error::InspectorError;
pub use session::{Session, SessionState, SharedSession};
pub use views::{EdgeView, GraphListing, NodeDetail, NodeView, Summary, TensorInfo};
pub use zoo::ModelZoo;
