// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Model-level metadata: declared graph inputs/outputs, producer, versions.

use crate::proto::{ModelProto, ValueInfoProto};
use crate::shape::tensor_type_of;
use crate::Dim;

/// A declared graph input or output.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ValueInfo {
    pub name: String,
    /// Raw element type code; `0` when the value is not tensor-typed.
    pub element_type: i32,
    /// `None` when no shape was declared at all.
    pub shape: Option<Vec<Dim>>,
}

impl ValueInfo {
    pub fn from_proto(proto: &ValueInfoProto) -> Self {
        let (element_type, shape) = tensor_type_of(proto.r#type.as_ref());
        Self {
            name: proto.name.clone(),
            element_type,
            shape,
        }
    }

    /// The declared dimensions, empty when no shape was declared.
    pub fn dims(&self) -> &[Dim] {
        self.shape.as_deref().unwrap_or(&[])
    }
}

/// An operator set the model was written against.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OpsetImport {
    /// Empty for the default operator domain.
    pub domain: String,
    pub version: i64,
}

/// Everything about a model except its nodes and constants.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModelMetadata {
    pub producer_name: String,
    pub producer_version: String,
    pub model_version: i64,
    pub ir_version: i64,
    pub domain: String,
    pub graph_name: String,
    pub opset_imports: Vec<OpsetImport>,
    pub inputs: Vec<ValueInfo>,
    pub outputs: Vec<ValueInfo>,
}

impl ModelMetadata {
    pub fn from_proto(model: &ModelProto) -> Self {
        let graph = model.graph.as_ref();
        let infos = |values: Option<&Vec<ValueInfoProto>>| -> Vec<ValueInfo> {
            values
                .map(|v| v.iter().map(ValueInfo::from_proto).collect())
                .unwrap_or_default()
        };

        Self {
            producer_name: model.producer_name.clone(),
            producer_version: model.producer_version.clone(),
            model_version: model.model_version,
            ir_version: model.ir_version,
            domain: model.domain.clone(),
            graph_name: graph.map(|g| g.name.clone()).unwrap_or_default(),
            opset_imports: model
                .opset_import
                .iter()
                .map(|o| OpsetImport {
                    domain: o.domain.clone(),
                    version: o.version,
                })
                .collect(),
            inputs: infos(graph.map(|g| &g.input)),
            outputs: infos(graph.map(|g| &g.output)),
        }
    }
}
