// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Declared tensor shapes with possibly-unknown dimensions.

use crate::proto::tensor_shape_proto::{dimension, Dimension};
use crate::proto::{type_proto, TypeProto};
use std::fmt;

/// A single declared dimension.
///
/// The model format uses `0` (or a symbolic name, or nothing at all) for
/// a dynamic dimension; all of those become [`Dim::Unknown`]. A `Dim`
/// never holds a literal zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Known(u64),
    Unknown,
}

impl Dim {
    /// Converts a declared dimension.
    pub fn from_proto(dim: &Dimension) -> Self {
        match dim.value {
            Some(dimension::Value::DimValue(v)) if v > 0 => Dim::Known(v as u64),
            _ => Dim::Unknown,
        }
    }
}

impl serde::Serialize for Dim {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dim::Known(v) => serializer.serialize_u64(*v),
            Dim::Unknown => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Known(v) => write!(f, "{v}"),
            Dim::Unknown => f.write_str("?"),
        }
    }
}

/// Extracts the element type and declared shape of a tensor-typed value.
///
/// Returns `(0, None)` when the type is missing or not a tensor, and
/// `(elem_type, None)` when the tensor declares no shape at all.
pub fn tensor_type_of(ty: Option<&TypeProto>) -> (i32, Option<Vec<Dim>>) {
    match ty.and_then(|t| t.value.as_ref()) {
        Some(type_proto::Value::TensorType(tensor)) => {
            let shape = tensor
                .shape
                .as_ref()
                .map(|s| s.dim.iter().map(Dim::from_proto).collect());
            (tensor.elem_type, shape)
        }
        None => (0, None),
    }
}

/// Formats a shape as `[1, 3, ?, ?]`.
pub fn format_shape(dims: &[Dim]) -> String {
    let parts: Vec<String> = dims.iter().map(Dim::to_string).collect();
    format!("[{}]", parts.join(", "))
}
