// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor element types as encoded in the model format.

use crate::proto::tensor_proto::DataType;

/// The element types a constant or declared tensor can carry.
///
/// The model format stores these as plain integer codes; `ElementType`
/// is only used to label them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElementType {
    Float,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Int32,
    Int64,
    String,
    Bool,
    Float16,
    Double,
    Uint32,
    Uint64,
    Complex64,
    Complex128,
    Bfloat16,
}

impl ElementType {
    /// Maps a raw type code to an element type. `0` (undefined) and codes
    /// outside the known range yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        let ty = match DataType::try_from(code).ok()? {
            DataType::Undefined => return None,
            DataType::Float => Self::Float,
            DataType::Uint8 => Self::Uint8,
            DataType::Int8 => Self::Int8,
            DataType::Uint16 => Self::Uint16,
            DataType::Int16 => Self::Int16,
            DataType::Int32 => Self::Int32,
            DataType::Int64 => Self::Int64,
            DataType::String => Self::String,
            DataType::Bool => Self::Bool,
            DataType::Float16 => Self::Float16,
            DataType::Double => Self::Double,
            DataType::Uint32 => Self::Uint32,
            DataType::Uint64 => Self::Uint64,
            DataType::Complex64 => Self::Complex64,
            DataType::Complex128 => Self::Complex128,
            DataType::Bfloat16 => Self::Bfloat16,
        };
        Some(ty)
    }

    /// Returns the schema's upper-case name (e.g. `"FLOAT"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Float => "FLOAT",
            Self::Uint8 => "UINT8",
            Self::Int8 => "INT8",
            Self::Uint16 => "UINT16",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Float16 => "FLOAT16",
            Self::Double => "DOUBLE",
            Self::Uint32 => "UINT32",
            Self::Uint64 => "UINT64",
            Self::Complex64 => "COMPLEX64",
            Self::Complex128 => "COMPLEX128",
            Self::Bfloat16 => "BFLOAT16",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels a raw type code, falling back to `"UNDEFINED(<code>)"`.
pub fn describe_code(code: i32) -> String {
    match ElementType::from_code(code) {
        Some(ty) => ty.as_str().to_string(),
        None => format!("UNDEFINED({code})"),
    }
}
