// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operator graph: nodes keyed by id, edges inferred from tensor names.
//!
//! # Construction
//!
//! ```text
//! [NodeProto]  ──pass 1──►  vertices + producer index (tensor → node)
//!                                │
//!                        ──pass 2──►  edges (producer, consumer, tensor)
//! ```
//!
//! The producer index lives only for the duration of [`ModelGraph::build`].
//! A built graph is immutable; loading another model builds a new one.

use crate::proto::NodeProto;
use crate::{AttributeValue, ModelError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// One operator vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorNode {
    /// Unique key: the declared name, or a synthesized `node_<index>`.
    pub id: String,
    /// Declared name; empty when the id was synthesized.
    pub name: String,
    pub op_type: String,
    /// Input tensor names in argument order.
    pub inputs: Vec<String>,
    /// Output tensor names in argument order.
    pub outputs: Vec<String>,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl OperatorNode {
    /// Returns `true` if the id was synthesized from the list position.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns a concise summary string for display.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {} in, {} out, {} attributes",
            self.id,
            self.op_type,
            self.inputs.len(),
            self.outputs.len(),
            self.attributes.len(),
        )
    }
}

/// A producer → consumer relationship carried by one tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub tensor_name: String,
}

/// The built graph.
///
/// Vertices keep the order of the source node list; edges keep the order
/// in which they were discovered (consumer order, then input position).
/// Both orders are therefore stable for a given model.
#[derive(Debug, Clone, Default)]
pub struct ModelGraph {
    nodes: Vec<OperatorNode>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl ModelGraph {
    /// Builds the graph from an ordered node list.
    ///
    /// Fails if an attribute string is not UTF-8 or if two nodes declare
    /// the same name. Duplicate names are rejected rather than merged into
    /// one vertex, so every declared node keeps its own id. Topology is not
    /// validated: cycles, self-loops and dangling inputs are all accepted as
    /// declared.
    pub fn build(protos: &[NodeProto]) -> Result<Self, ModelError> {
        let ids = assign_ids(protos)?;

        // Pass 1: vertices + producer index.
        let mut nodes = Vec::with_capacity(protos.len());
        let mut index = HashMap::with_capacity(protos.len());
        let mut producers: HashMap<&str, usize> = HashMap::new();

        for (i, (proto, id)) in protos.iter().zip(ids).enumerate() {
            let mut attributes = BTreeMap::new();
            for attr in &proto.attribute {
                let value = AttributeValue::decode(attr).map_err(|source| {
                    ModelError::InvalidUtf8 {
                        node: id.clone(),
                        attribute: attr.name.clone(),
                        source,
                    }
                })?;
                attributes.insert(attr.name.clone(), value);
            }

            for output in proto.output.iter().filter(|t| !t.is_empty()) {
                let replaced = producers.insert(output.as_str(), i);
                if let Some(prev) = replaced.filter(|&p| p != i) {
                    let prev_node: &OperatorNode = &nodes[prev];
                    tracing::warn!(
                        "tensor '{}' is produced by both '{}' and '{}'; keeping '{}'",
                        output,
                        prev_node.id,
                        id,
                        id,
                    );
                }
            }

            index.insert(id.clone(), i);
            nodes.push(OperatorNode {
                id,
                name: proto.name.clone(),
                op_type: proto.op_type.clone(),
                inputs: proto.input.clone(),
                outputs: proto.output.clone(),
                attributes,
            });
        }
        tracing::debug!(
            "graph pass 1: {} nodes, {} produced tensors",
            nodes.len(),
            producers.len()
        );

        // Pass 2: edges.
        let mut seen: HashSet<(usize, usize, &str)> = HashSet::new();
        let mut edges = Vec::new();
        for (target, node) in nodes.iter().enumerate() {
            for input in node.inputs.iter().filter(|t| !t.is_empty()) {
                let Some(&source) = producers.get(input.as_str()) else {
                    // Model input or constant; no producing node.
                    continue;
                };
                if seen.insert((source, target, input.as_str())) {
                    edges.push(Edge {
                        source: nodes[source].id.clone(),
                        target: node.id.clone(),
                        tensor_name: input.clone(),
                    });
                }
            }
        }
        tracing::debug!("graph pass 2: {} edges", edges.len());

        Ok(Self {
            nodes,
            index,
            edges,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a vertex by id.
    pub fn node(&self, id: &str) -> Option<&OperatorNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over vertices in source order.
    pub fn nodes(&self) -> impl Iterator<Item = &OperatorNode> {
        self.nodes.iter()
    }

    /// Iterates over edges in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges whose target is `id`.
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.target == id)
    }

    /// Edges whose source is `id`.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Number of vertices per operator type.
    pub fn op_type_histogram(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.op_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns a one-line summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} nodes, {} edges, {} operator types",
            self.num_nodes(),
            self.num_edges(),
            self.op_type_histogram().len(),
        )
    }
}

impl fmt::Display for ModelGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ModelGraph ({} nodes):", self.nodes.len())?;
        for node in &self.nodes {
            writeln!(f, "  {}", node.summary())?;
        }
        Ok(())
    }
}

/// Computes the vertex id of every node.
///
/// Declared names are used verbatim and must be unique. An anonymous node
/// at position `i` gets `node_<i>`; if that string is already taken by a
/// declared name, `_1`, `_2`, ... is appended until it is free.
fn assign_ids(protos: &[NodeProto]) -> Result<Vec<String>, ModelError> {
    let mut taken: HashSet<String> = HashSet::with_capacity(protos.len());
    for proto in protos.iter().filter(|p| !p.name.is_empty()) {
        if !taken.insert(proto.name.clone()) {
            return Err(ModelError::DuplicateNodeName {
                name: proto.name.clone(),
            });
        }
    }

    let mut ids = Vec::with_capacity(protos.len());
    for (i, proto) in protos.iter().enumerate() {
        if !proto.name.is_empty() {
            ids.push(proto.name.clone());
            continue;
        }
        let base = format!("node_{i}");
        let mut id = base.clone();
        let mut suffix = 1;
        while taken.contains(&id) {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }
        taken.insert(id.clone());
        ids.push(id);
    }
    Ok(ids)
}
