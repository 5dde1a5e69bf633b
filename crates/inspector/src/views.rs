// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Read-only projections over a loaded [`Model`].
//!
//! Views only read the built graph, the metadata and the constant table;
//! they never look at the raw bytes. Field names on the wire follow
//! the visualizer's JSON format.

use model_ir::{AttributeValue, ConstantEntry, Dim, Edge, Model, OperatorNode, ValueInfo};
use std::collections::BTreeMap;

/// Name and declared shape of a model input or output.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TensorInfo {
    pub name: String,
    /// Unknown dimensions serialise as `null`.
    pub shape: Vec<Dim>,
}

impl From<&ValueInfo> for TensorInfo {
    fn from(info: &ValueInfo) -> Self {
        Self {
            name: info.name.clone(),
            shape: info.dims().to_vec(),
        }
    }
}

/// Whole-model summary.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    pub num_nodes: usize,
    pub input_info: Vec<TensorInfo>,
    pub output_info: Vec<TensorInfo>,
    pub op_types: BTreeMap<String, usize>,
    pub producer_name: String,
    pub model_version: i64,
}

impl Summary {
    pub fn from_model(model: &Model) -> Self {
        let meta = &model.metadata;
        Self {
            num_nodes: model.graph.num_nodes(),
            input_info: meta.inputs.iter().map(TensorInfo::from).collect(),
            output_info: meta.outputs.iter().map(TensorInfo::from).collect(),
            op_types: model.graph.op_type_histogram(),
            producer_name: meta.producer_name.clone(),
            model_version: meta.model_version,
        }
    }
}

/// One vertex in the graph listing.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NodeView {
    pub id: String,
    /// Declared name; empty for anonymous nodes.
    #[serde(rename = "label")]
    pub display_label: String,
    #[serde(rename = "type")]
    pub op_type: String,
    #[serde(rename = "input")]
    pub inputs: Vec<String>,
    #[serde(rename = "output")]
    pub outputs: Vec<String>,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl From<&OperatorNode> for NodeView {
    fn from(node: &OperatorNode) -> Self {
        Self {
            id: node.id.clone(),
            display_label: node.name.clone(),
            op_type: node.op_type.clone(),
            inputs: node.inputs.clone(),
            outputs: node.outputs.clone(),
            attributes: node.attributes.clone(),
        }
    }
}

/// One edge in the graph listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
    pub tensor_name: String,
}

impl From<&Edge> for EdgeView {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source.clone(),
            target: edge.target.clone(),
            tensor_name: edge.tensor_name.clone(),
        }
    }
}

/// Every node and edge of the graph, in the graph's stable order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GraphListing {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphListing {
    pub fn from_model(model: &Model) -> Self {
        Self {
            nodes: model.graph.nodes().map(NodeView::from).collect(),
            edges: model.graph.edges().map(EdgeView::from).collect(),
        }
    }
}

/// A single node joined with the constants it consumes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NodeDetail {
    pub id: String,
    /// Declared name; empty for anonymous nodes.
    pub name: String,
    pub op_type: String,
    #[serde(rename = "input")]
    pub inputs: Vec<String>,
    #[serde(rename = "output")]
    pub outputs: Vec<String>,
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Constant metadata for each input that names a constant tensor.
    pub weights: BTreeMap<String, ConstantEntry>,
}

impl NodeDetail {
    /// Returns `None` if `id` is not a vertex of the model's graph.
    pub fn from_model(model: &Model, id: &str) -> Option<Self> {
        let node = model.graph.node(id)?;
        let weights = node
            .inputs
            .iter()
            .filter_map(|input| {
                model
                    .constants
                    .get(input)
                    .map(|entry| (input.clone(), entry.clone()))
            })
            .collect();

        Some(Self {
            id: node.id.clone(),
            name: node.name.clone(),
            op_type: node.op_type.clone(),
            inputs: node.inputs.clone(),
            outputs: node.outputs.clone(),
            attributes: node.attributes.clone(),
            weights,
        })
    }

    /// Total serialized size of the constants this node consumes.
    pub fn weight_bytes(&self) -> u64 {
        self.weights.values().map(|w| w.byte_size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_ir::proto::helper::*;
    use model_ir::ModelLoader;

    fn model() -> Model {
        let graph = make_graph(
            vec![
                make_node(
                    "Conv",
                    &["x", "w", "b"],
                    &["y"],
                    "conv1",
                    vec![make_attribute_ints("kernel_shape", &[5, 5])],
                ),
                make_node("Relu", &["y"], &["z"], "", vec![]),
            ],
            "views",
            vec![make_tensor_value_info("x", 1, &[0, 1, 32, 32])],
            vec![make_tensor_value_info("z", 1, &[0, 6, 28, 28])],
            vec![make_zeros("w", &[6, 1, 5, 5])],
        );
        ModelLoader::from_proto(&make_model(graph, "views-test")).unwrap()
    }

    #[test]
    fn test_summary() {
        let s = Summary::from_model(&model());
        assert_eq!(s.num_nodes, 2);
        assert_eq!(s.op_types["Conv"], 1);
        assert_eq!(s.op_types["Relu"], 1);
        assert_eq!(s.input_info[0].shape[0], Dim::Unknown);
        assert_eq!(s.input_info[0].shape[1], Dim::Known(1));
        assert_eq!(s.producer_name, "views-test");
        assert_eq!(s.model_version, 0);
    }

    #[test]
    fn test_summary_json() {
        let json = serde_json::to_value(Summary::from_model(&model())).unwrap();
        assert_eq!(json["num_nodes"], 2);
        assert_eq!(json["input_info"][0]["shape"], serde_json::json!([null, 1, 32, 32]));
        assert_eq!(json["op_types"]["Conv"], 1);
    }

    #[test]
    fn test_graph_listing() {
        let listing = GraphListing::from_model(&model());
        assert_eq!(listing.nodes.len(), 2);
        assert_eq!(listing.nodes[0].display_label, "conv1");
        assert_eq!(listing.nodes[1].id, "node_1");
        assert_eq!(listing.nodes[1].display_label, "");
        assert_eq!(
            listing.edges,
            vec![EdgeView {
                source: "conv1".into(),
                target: "node_1".into(),
                tensor_name: "y".into(),
            }]
        );
    }

    #[test]
    fn test_graph_listing_json() {
        let json = serde_json::to_value(GraphListing::from_model(&model())).unwrap();
        let conv = &json["nodes"][0];
        assert_eq!(conv["label"], "conv1");
        assert_eq!(conv["type"], "Conv");
        assert_eq!(conv["input"], serde_json::json!(["x", "w", "b"]));
        assert_eq!(conv["attributes"]["kernel_shape"], serde_json::json!([5, 5]));
        assert_eq!(json["edges"][0]["tensor_name"], "y");
    }

    #[test]
    fn test_node_detail_joins_constants() {
        let model = model();
        let detail = NodeDetail::from_model(&model, "conv1").unwrap();
        // "x" is a graph input and "b" has no constant: both omitted.
        assert_eq!(detail.weights.len(), 1);
        assert_eq!(detail.weights["w"].dims, vec![6, 1, 5, 5]);
        assert_eq!(detail.weight_bytes(), 6 * 25 * 4);

        let relu = NodeDetail::from_model(&model, "node_1").unwrap();
        assert!(relu.weights.is_empty());
        assert_eq!(relu.name, "");
    }

    #[test]
    fn test_node_detail_unknown_id() {
        assert!(NodeDetail::from_model(&model(), "missing").is_none());
    }
}
