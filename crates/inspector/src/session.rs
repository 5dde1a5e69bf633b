// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The inspector session: at most one loaded model at a time.
//!
//! ```text
//!            load(bytes) ok
//!   Empty ───────────────────► Loaded(model)
//!                                 │  ▲
//!                                 └──┘ load(bytes) ok: replace wholesale
//! ```
//!
//! A failing load leaves the state exactly as it was. Queries in `Empty`
//! fail with [`InspectorError::NotLoaded`].

use crate::views::{GraphListing, NodeDetail, Summary};
use crate::InspectorError;
use model_ir::{Model, ModelError, ModelLoader, ModelMetadata};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// The two states of a session.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Loaded(Arc<Model>),
}

impl SessionState {
    /// Returns the loaded model, or `NotLoaded`.
    pub fn model(&self) -> Result<&Arc<Model>, InspectorError> {
        match self {
            Self::Loaded(model) => Ok(model),
            Self::Empty => Err(InspectorError::NotLoaded),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Single-owner session. For concurrent readers see [`SharedSession`].
///
/// # Example
/// ```no_run
/// use inspector::Session;
///
/// # fn example(bytes: &[u8]) -> Result<(), inspector::InspectorError> {
/// let mut session = Session::new();
/// session.load(bytes)?;
/// let summary = session.summary()?;
/// println!("{} nodes", summary.num_nodes);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Decodes `bytes` and, on success, replaces the current model.
    pub fn load(&mut self, bytes: &[u8]) -> Result<&ModelMetadata, InspectorError> {
        let model = ModelLoader::from_bytes(bytes)?;
        self.swap(model);
        Ok(&self.state.model()?.metadata)
    }

    /// Reads a model file and loads it like [`Session::load`].
    ///
    /// A file that cannot be read is reported as [`InspectorError::Io`];
    /// only malformed contents are a decode error.
    pub fn load_path(&mut self, path: &Path) -> Result<&ModelMetadata, InspectorError> {
        let model = ModelLoader::load(path).map_err(|e| match e {
            ModelError::Io(io) => InspectorError::Io(io),
            other => InspectorError::Decode(other),
        })?;
        self.swap(model);
        Ok(&self.state.model()?.metadata)
    }

    fn swap(&mut self, model: Model) {
        if self.state.is_loaded() {
            tracing::info!("replacing previously loaded model");
        }
        self.state = SessionState::Loaded(Arc::new(model));
    }

    pub fn summary(&self) -> Result<Summary, InspectorError> {
        Ok(Summary::from_model(self.state.model()?))
    }

    pub fn graph(&self) -> Result<GraphListing, InspectorError> {
        Ok(GraphListing::from_model(self.state.model()?))
    }

    pub fn node(&self, id: &str) -> Result<NodeDetail, InspectorError> {
        let model = self.state.model()?;
        NodeDetail::from_model(model, id).ok_or_else(|| InspectorError::NodeNotFound {
            id: id.to_string(),
        })
    }
}

/// A session that can be shared across threads.
///
/// Loads decode outside the lock and publish the finished model with a
/// single write; queries take a snapshot of the current model under a read
/// lock and compute their view without holding it.
#[derive(Debug, Default)]
pub struct SharedSession {
    state: RwLock<SessionState>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `bytes` and, on success, replaces the current model.
    /// Returns the new model's metadata.
    pub fn load(&self, bytes: &[u8]) -> Result<ModelMetadata, InspectorError> {
        let model = Arc::new(ModelLoader::from_bytes(bytes)?);
        let metadata = model.metadata.clone();
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = SessionState::Loaded(model);
        Ok(metadata)
    }

    /// The currently loaded model.
    pub fn snapshot(&self) -> Result<Arc<Model>, InspectorError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.model().cloned()
    }

    pub fn summary(&self) -> Result<Summary, InspectorError> {
        let model = self.snapshot()?;
        Ok(Summary::from_model(&model))
    }

    pub fn graph(&self) -> Result<GraphListing, InspectorError> {
        let model = self.snapshot()?;
        Ok(GraphListing::from_model(&model))
    }

    pub fn node(&self, id: &str) -> Result<NodeDetail, InspectorError> {
        let model = self.snapshot()?;
        NodeDetail::from_model(&model, id).ok_or_else(|| InspectorError::NodeNotFound {
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_ir::proto::helper::*;
    use prost::Message;

    fn model_bytes(producer: &str, op: &str) -> Vec<u8> {
        let graph = make_graph(
            vec![make_node(op, &["x"], &["y"], "only", vec![])],
            "g",
            vec![make_tensor_value_info("x", 1, &[1, 4])],
            vec![make_tensor_value_info("y", 1, &[1, 4])],
            vec![],
        );
        make_model(graph, producer).encode_to_vec()
    }

    #[test]
    fn test_empty_session_rejects_queries() {
        let session = Session::new();
        assert!(!session.state().is_loaded());
        assert!(matches!(session.summary(), Err(InspectorError::NotLoaded)));
        assert!(matches!(session.graph(), Err(InspectorError::NotLoaded)));
        assert!(matches!(session.node("only"), Err(InspectorError::NotLoaded)));
    }

    #[test]
    fn test_load_returns_metadata() {
        let mut session = Session::new();
        let meta = session.load(&model_bytes("first", "Relu")).unwrap();
        assert_eq!(meta.producer_name, "first");
        assert!(session.state().is_loaded());
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut session = Session::new();
        session.load(&model_bytes("first", "Relu")).unwrap();
        session.load(&model_bytes("second", "Sigmoid")).unwrap();

        let summary = session.summary().unwrap();
        assert_eq!(summary.producer_name, "second");
        assert_eq!(summary.op_types.len(), 1);
        assert_eq!(summary.op_types["Sigmoid"], 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_model() {
        let mut session = Session::new();
        session.load(&model_bytes("first", "Relu")).unwrap();

        let err = session.load(&[0x08]).unwrap_err();
        assert!(matches!(err, InspectorError::Decode(_)));
        assert_eq!(session.summary().unwrap().producer_name, "first");
    }

    #[test]
    fn test_failed_first_load_stays_empty() {
        let mut session = Session::new();
        assert!(session.load(&[0x08]).is_err());
        assert!(matches!(session.summary(), Err(InspectorError::NotLoaded)));
    }

    #[test]
    fn test_load_path_errors() {
        let mut session = Session::new();
        session.load(&model_bytes("first", "Relu")).unwrap();

        let err = session.load_path(Path::new("/nonexistent/model.onnx")).unwrap_err();
        assert!(matches!(err, InspectorError::Io(_)));

        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.onnx");
        std::fs::write(&broken, [0x08]).unwrap();
        let err = session.load_path(&broken).unwrap_err();
        assert!(matches!(err, InspectorError::Decode(ModelError::Decode(_))));

        assert_eq!(session.summary().unwrap().producer_name, "first");
    }

    #[test]
    fn test_unknown_node() {
        let mut session = Session::new();
        session.load(&model_bytes("first", "Relu")).unwrap();
        let err = session.node("nope").unwrap_err();
        assert!(matches!(err, InspectorError::NodeNotFound { ref id } if id == "nope"));
    }

    #[test]
    fn test_shared_session() {
        let shared = Arc::new(SharedSession::new());
        assert!(matches!(shared.summary(), Err(InspectorError::NotLoaded)));

        shared.load(&model_bytes("first", "Relu")).unwrap();
        let before = shared.snapshot().unwrap();

        let loader = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.load(&model_bytes("second", "Tanh")).map(|m| m.producer_name))
        };
        assert_eq!(loader.join().unwrap().unwrap(), "second");

        // The old snapshot is untouched; new queries see the new model.
        assert_eq!(before.metadata.producer_name, "first");
        assert_eq!(shared.summary().unwrap().producer_name, "second");
        assert_eq!(shared.node("only").unwrap().op_type, "Tanh");
        assert!(shared.load(b"\x08").is_err());
        assert_eq!(shared.graph().unwrap().nodes.len(), 1);
    }
}
