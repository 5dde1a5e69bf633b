// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Metadata index over the model's named constant tensors (initializers).
//!
//! Tensor *contents* are never materialised: each entry records only the
//! dimensions, the element type code and the size of the payload as it
//! was serialized.

use crate::proto::tensor_proto::DataLocation;
use crate::proto::TensorProto;
use crate::ModelError;
use prost::encoding::encoded_len_varint;
use std::collections::HashMap;

/// Metadata for one named constant tensor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConstantEntry {
    pub dims: Vec<u64>,
    /// Raw element type code (see [`crate::ElementType::from_code`]).
    #[serde(rename = "data_type")]
    pub element_type_code: i32,
    /// Bytes occupied by the payload in the serialized model.
    #[serde(rename = "size")]
    pub byte_size: u64,
    /// The payload lives outside the model bytes; `byte_size` is then 0.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

impl ConstantEntry {
    /// Builds the entry for a single tensor.
    pub fn from_proto(tensor: &TensorProto) -> Result<Self, ModelError> {
        let dims = tensor
            .dims
            .iter()
            .map(|&d| {
                u64::try_from(d).map_err(|_| ModelError::InvalidTensor {
                    name: tensor.name.clone(),
                    detail: format!("negative dimension {d}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            dims,
            element_type_code: tensor.data_type,
            byte_size: serialized_payload_len(tensor),
            external: tensor.data_location == Some(DataLocation::External as i32),
        })
    }
}

/// Element payload bytes of the tensor.
///
/// `raw_data` wins when present. Otherwise each element of the typed field
/// in use is measured: fixed-width floats/doubles, varint length for the
/// integer fields, raw byte length for strings. Field tags and length
/// prefixes are not counted, so packed and unpacked encodings of the same
/// values report the same size.
fn serialized_payload_len(tensor: &TensorProto) -> u64 {
    if !tensor.raw_data.is_empty() {
        return tensor.raw_data.len() as u64;
    }

    let floats = tensor.float_data.len() * 4;
    let doubles = tensor.double_data.len() * 8;
    // Negative int32 values are sign-extended to 64 bits on the wire.
    let int32: usize = tensor
        .int32_data
        .iter()
        .map(|&v| encoded_len_varint(i64::from(v) as u64))
        .sum();
    let int64: usize = tensor
        .int64_data
        .iter()
        .map(|&v| encoded_len_varint(v as u64))
        .sum();
    let uint64: usize = tensor.uint64_data.iter().map(|&v| encoded_len_varint(v)).sum();
    let strings: usize = tensor.string_data.iter().map(Vec::len).sum();

    (floats + doubles + int32 + int64 + uint64 + strings) as u64
}

/// Name → [`ConstantEntry`] index.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: HashMap<String, ConstantEntry>,
}

impl ConstantTable {
    /// Indexes the given tensors by name.
    ///
    /// Names are expected to be unique. If one repeats, the later tensor
    /// replaces the earlier entry.
    pub fn build(tensors: &[TensorProto]) -> Result<Self, ModelError> {
        let mut entries = HashMap::with_capacity(tensors.len());
        for tensor in tensors {
            let entry = ConstantEntry::from_proto(tensor)?;
            if entries.insert(tensor.name.clone(), entry).is_some() {
                tracing::debug!("constant '{}' declared twice, keeping the later one", tensor.name);
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&ConstantEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all serialized payload sizes.
    pub fn total_bytes(&self) -> u64 {
        self.entries.values().map(|e| e.byte_size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::helper::{make_tensor, make_zeros};
    use crate::proto::tensor_proto::DataType;

    #[test]
    fn test_raw_payload_size() {
        let table = ConstantTable::build(&[make_zeros("w", &[6, 1, 5, 5])]).unwrap();
        let w = table.get("w").unwrap();
        assert_eq!(w.dims, vec![6, 1, 5, 5]);
        assert_eq!(w.element_type_code, DataType::Float as i32);
        assert_eq!(w.byte_size, 6 * 25 * 4);
        assert!(!w.external);
    }

    #[test]
    fn test_size_comes_from_payload_not_dims() {
        // Payload deliberately shorter than dims × width.
        let t = make_tensor("b", DataType::Float as i32, &[16], vec![0u8; 10]);
        let table = ConstantTable::build(&[t]).unwrap();
        assert_eq!(table.get("b").unwrap().byte_size, 10);
    }

    #[test]
    fn test_typed_payload_sizes() {
        let mut floats = make_tensor("f", DataType::Float as i32, &[3], vec![]);
        floats.float_data = vec![1.0, 2.0, 3.0];

        let mut ints = make_tensor("i", DataType::Int64 as i32, &[3], vec![]);
        // 1 byte, 2 bytes, 10 bytes as varints.
        ints.int64_data = vec![1, 300, -1];

        let mut strings = make_tensor("s", DataType::String as i32, &[2], vec![]);
        strings.string_data = vec![b"ab".to_vec(), b"cde".to_vec()];

        let table = ConstantTable::build(&[floats, ints, strings]).unwrap();
        assert_eq!(table.get("f").unwrap().byte_size, 12);
        assert_eq!(table.get("i").unwrap().byte_size, 13);
        assert_eq!(table.get("s").unwrap().byte_size, 5);
        assert_eq!(table.total_bytes(), 30);
    }

    #[test]
    fn test_packed_and_unpacked_ints_same_size() {
        use prost::Message;

        // name = "i", int64_data = [1, 300], one tag per element.
        let unpacked = [0x42, 0x01, b'i', 0x38, 0x01, 0x38, 0xac, 0x02];
        // Same values as a single length-delimited run.
        let packed = [0x42, 0x01, b'i', 0x3a, 0x03, 0x01, 0xac, 0x02];

        for bytes in [&unpacked[..], &packed[..]] {
            let tensor = TensorProto::decode(bytes).unwrap();
            assert_eq!(tensor.int64_data, vec![1, 300]);
            assert_eq!(ConstantEntry::from_proto(&tensor).unwrap().byte_size, 3);
        }
    }

    #[test]
    fn test_external_tensor() {
        let mut t = make_tensor("ext", DataType::Float as i32, &[1024], vec![]);
        t.data_location = Some(DataLocation::External as i32);
        let table = ConstantTable::build(&[t]).unwrap();
        let e = table.get("ext").unwrap();
        assert!(e.external);
        assert_eq!(e.byte_size, 0);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let first = make_zeros("w", &[2]);
        let second = make_zeros("w", &[4, 4]);
        let table = ConstantTable::build(&[first, second]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("w").unwrap().dims, vec![4, 4]);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let t = make_tensor("bad", DataType::Float as i32, &[-1, 4], vec![]);
        let result = ConstantTable::build(&[t]);
        assert!(matches!(result, Err(ModelError::InvalidTensor { .. })));
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let table = ConstantTable::build(&[make_zeros("w", &[2])]).unwrap();
        let json = serde_json::to_value(table.get("w").unwrap()).unwrap();
        assert_eq!(json["dims"], serde_json::json!([2]));
        assert_eq!(json["data_type"], 1);
        assert_eq!(json["size"], 8);
        assert!(json.get("external").is_none());
    }
}
