// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Model loading from serialized bytes or a model file.
//!
//! Loading is all-or-nothing: the wire message is decoded, the constant
//! table and graph are built, and only if every step succeeds is a
//! [`Model`] returned. Tensor payloads are measured but never copied out.

use crate::proto::ModelProto;
use crate::{ConstantTable, ModelError, ModelGraph, ModelMetadata};
use prost::Message;
use std::path::Path;

/// A fully decoded model.
#[derive(Debug, Clone)]
pub struct Model {
    pub graph: ModelGraph,
    pub metadata: ModelMetadata,
    pub constants: ConstantTable,
}

/// Decodes models into [`Model`] values.
///
/// # Example
/// ```no_run
/// use model_ir::ModelLoader;
/// use std::path::Path;
///
/// let model = ModelLoader::load(Path::new("./model_zoo/cnn/lenet.onnx")).unwrap();
/// println!("{}", model.graph.summary());
/// ```
pub struct ModelLoader;

impl ModelLoader {
    /// Memory-maps a model file and decodes it.
    pub fn load(path: &Path) -> Result<Model, ModelError> {
        let file = std::fs::File::open(path)?;
        // Zero-length files cannot be mapped on every platform.
        if file.metadata()?.len() == 0 {
            return Self::from_bytes(&[]);
        }
        // SAFETY: the map is read-only and dropped before returning; the
        // decoded model owns copies of everything it keeps.
        let mmap = unsafe { memmap2::Mmap::map(&file) }?;
        tracing::debug!("mapped '{}' ({} bytes)", path.display(), mmap.len());
        Self::from_bytes(&mmap)
    }

    /// Decodes a model from its serialized bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Model, ModelError> {
        let proto = ModelProto::decode(bytes)?;
        Self::from_proto(&proto)
    }

    /// Builds a model from an already decoded message.
    ///
    /// Steps:
    /// 1. Index the constant tensors.
    /// 2. Build the operator graph.
    /// 3. Collect model metadata.
    pub fn from_proto(proto: &ModelProto) -> Result<Model, ModelError> {
        let Some(graph_proto) = proto.graph.as_ref() else {
            tracing::warn!("model has no graph; loading it as an empty graph");
            return Ok(Model {
                graph: ModelGraph::default(),
                metadata: ModelMetadata::from_proto(proto),
                constants: ConstantTable::default(),
            });
        };

        let constants = ConstantTable::build(&graph_proto.initializer)?;
        let graph = ModelGraph::build(&graph_proto.node)?;
        let metadata = ModelMetadata::from_proto(proto);

        tracing::info!(
            "loaded model '{}' from '{}': {}, {} constants",
            metadata.graph_name,
            metadata.producer_name,
            graph.summary(),
            constants.len(),
        );

        Ok(Model {
            graph,
            metadata,
            constants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::helper::*;
    use std::io::Write;

    fn lenet_head() -> ModelProto {
        let graph = make_graph(
            vec![
                make_node(
                    "Conv",
                    &["input", "conv1_w", "conv1_b"],
                    &["conv1_output"],
                    "conv1",
                    vec![make_attribute_ints("kernel_shape", &[5, 5])],
                ),
                make_node("Relu", &["conv1_output"], &["relu1_output"], "relu1", vec![]),
            ],
            "lenet-head",
            vec![make_tensor_value_info("input", 1, &[1, 1, 32, 32])],
            vec![make_tensor_value_info("relu1_output", 1, &[1, 6, 28, 28])],
            vec![make_zeros("conv1_w", &[6, 1, 5, 5]), make_zeros("conv1_b", &[6])],
        );
        make_model(graph, "loader-test")
    }

    #[test]
    fn test_from_bytes() {
        let model = ModelLoader::from_bytes(&lenet_head().encode_to_vec()).unwrap();
        assert_eq!(model.graph.num_nodes(), 2);
        assert_eq!(model.graph.num_edges(), 1);
        assert_eq!(model.constants.len(), 2);
        assert_eq!(model.metadata.producer_name, "loader-test");
    }

    #[test]
    fn test_malformed_bytes() {
        let result = ModelLoader::from_bytes(&[0x08]);
        assert!(matches!(result, Err(ModelError::Decode(_))));
    }

    #[test]
    fn test_empty_bytes_is_empty_model() {
        let model = ModelLoader::from_bytes(&[]).unwrap();
        assert_eq!(model.graph.num_nodes(), 0);
        assert!(model.constants.is_empty());
    }

    #[test]
    fn test_bad_constant_fails_whole_load() {
        let mut proto = lenet_head();
        if let Some(g) = proto.graph.as_mut() {
            g.initializer[0].dims[0] = -6;
        }
        let result = ModelLoader::from_proto(&proto);
        assert!(matches!(result, Err(ModelError::InvalidTensor { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&lenet_head().encode_to_vec()).unwrap();
        file.flush().unwrap();

        let model = ModelLoader::load(file.path()).unwrap();
        assert!(model.graph.contains("conv1"));
        assert_eq!(model.constants.get("conv1_w").unwrap().dims, vec![6, 1, 5, 5]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ModelLoader::load(Path::new("/nonexistent/model.onnx"));
        assert!(matches!(result, Err(ModelError::Io(_))));
    }
}
