// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Typed attribute values and their decoding from the wire record.

use crate::proto::attribute_proto::AttributeType;
use crate::proto::AttributeProto;
use std::string::FromUtf8Error;

/// A decoded node attribute.
///
/// Serializes untagged: numbers, strings and lists map to the matching
/// JSON value and [`AttributeValue::Absent`] to `null`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Float(f64),
    Int(i64),
    String(String),
    Floats(Vec<f64>),
    Ints(Vec<i64>),
    Strings(Vec<String>),
    /// The type tag is not one of the six scalar/list kinds above
    /// (tensors, graphs, unknown tags, ...).
    Absent,
}

impl AttributeValue {
    /// Decodes one attribute record.
    ///
    /// Only string payloads can fail; an unrecognised tag is not an error
    /// and yields [`AttributeValue::Absent`].
    pub fn decode(attr: &AttributeProto) -> Result<Self, FromUtf8Error> {
        let value = match AttributeType::try_from(attr.r#type) {
            Ok(AttributeType::Float) => Self::Float(f64::from(attr.f)),
            Ok(AttributeType::Int) => Self::Int(attr.i),
            Ok(AttributeType::String) => Self::String(String::from_utf8(attr.s.clone())?),
            Ok(AttributeType::Floats) => {
                Self::Floats(attr.floats.iter().copied().map(f64::from).collect())
            }
            Ok(AttributeType::Ints) => Self::Ints(attr.ints.clone()),
            Ok(AttributeType::Strings) => Self::Strings(
                attr.strings
                    .iter()
                    .map(|s| String::from_utf8(s.clone()))
                    .collect::<Result<_, _>>()?,
            ),
            _ => Self::Absent,
        };
        Ok(value)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Short type label used in listings (`"ints"`, `"string"`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::Floats(_) => "floats",
            Self::Ints(_) => "ints",
            Self::Strings(_) => "strings",
            Self::Absent => "absent",
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Floats(v) => write!(f, "{v:?}"),
            Self::Ints(v) => write!(f, "{v:?}"),
            Self::Strings(v) => write!(f, "{v:?}"),
            Self::Absent => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::helper::*;

    #[test]
    fn test_scalars() {
        let f = AttributeValue::decode(&make_attribute_float("alpha", 0.5)).unwrap();
        assert_eq!(f, AttributeValue::Float(0.5));

        let i = AttributeValue::decode(&make_attribute_int("group", 2)).unwrap();
        assert_eq!(i, AttributeValue::Int(2));

        let s = AttributeValue::decode(&make_attribute_string("auto_pad", "SAME_UPPER")).unwrap();
        assert_eq!(s, AttributeValue::String("SAME_UPPER".into()));
    }

    #[test]
    fn test_lists_keep_order() {
        let ints = AttributeValue::decode(&make_attribute_ints("pads", &[1, 0, 2, 3])).unwrap();
        assert_eq!(ints, AttributeValue::Ints(vec![1, 0, 2, 3]));

        let floats = AttributeValue::decode(&make_attribute_floats("scales", &[1.0, 2.5])).unwrap();
        assert_eq!(floats, AttributeValue::Floats(vec![1.0, 2.5]));

        let strings = AttributeValue::decode(&make_attribute_strings("dirs", &["b", "a"])).unwrap();
        assert_eq!(strings, AttributeValue::Strings(vec!["b".into(), "a".into()]));
    }

    #[test]
    fn test_unpacked_ints_decode() {
        use prost::Message;

        // name = "k", ints = [3, 4] one tag per element, type = INTS.
        let bytes = [0x0a, 0x01, b'k', 0x40, 0x03, 0x40, 0x04, 0xa0, 0x01, 0x07];
        let attr = AttributeProto::decode(&bytes[..]).unwrap();
        assert_eq!(AttributeValue::decode(&attr).unwrap(), AttributeValue::Ints(vec![3, 4]));
    }

    #[test]
    fn test_unrecognised_tag_is_absent() {
        let mut attr = make_attribute_int("value", 1);
        attr.r#type = AttributeType::Tensor as i32;
        assert!(AttributeValue::decode(&attr).unwrap().is_absent());

        attr.r#type = 999;
        assert!(AttributeValue::decode(&attr).unwrap().is_absent());
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let mut attr = make_attribute_string("mode", "x");
        attr.s = vec![0xff, 0xfe];
        assert!(AttributeValue::decode(&attr).is_err());

        let mut list = make_attribute_strings("modes", &["ok"]);
        list.strings.push(vec![0xc3]);
        assert!(AttributeValue::decode(&list).is_err());
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&AttributeValue::Ints(vec![3, 3])).unwrap();
        assert_eq!(json, "[3,3]");
        let json = serde_json::to_string(&AttributeValue::Absent).unwrap();
        assert_eq!(json, "null");
        let json = serde_json::to_string(&AttributeValue::String("x".into())).unwrap();
        assert_eq!(json, "\"x\"");
    }
}
