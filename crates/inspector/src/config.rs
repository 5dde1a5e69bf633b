// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Inspector configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! zoo_dir = "./model_zoo/cnn"
//! model_extension = "onnx"
//! pretty_json = true
//! ```

use crate::{InspectorError, ModelZoo};
use std::path::{Path, PathBuf};

/// Configuration for the inspector and its outer surfaces.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InspectorConfig {
    /// Directory served by the model zoo.
    #[serde(default = "default_zoo_dir")]
    pub zoo_dir: PathBuf,
    /// File extension accepted for uploaded/opened models (without the dot).
    #[serde(default = "default_extension")]
    pub model_extension: String,
    /// Whether JSON output is pretty-printed.
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

fn default_zoo_dir() -> PathBuf {
    PathBuf::from("./model_zoo/cnn")
}

fn default_extension() -> String {
    "onnx".to_string()
}

fn default_true() -> bool {
    true
}

impl InspectorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, InspectorError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            InspectorError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, InspectorError> {
        toml::from_str(toml_str)
            .map_err(|e| InspectorError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, InspectorError> {
        toml::to_string_pretty(self)
            .map_err(|e| InspectorError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Returns `true` if `path` carries the configured model extension
    /// (case-insensitive).
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.model_extension))
    }

    /// Creates the model zoo for the configured directory.
    pub fn zoo(&self) -> ModelZoo {
        ModelZoo::new(self.zoo_dir.clone())
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            zoo_dir: default_zoo_dir(),
            model_extension: default_extension(),
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = InspectorConfig::default();
        assert_eq!(c.zoo_dir, PathBuf::from("./model_zoo/cnn"));
        assert_eq!(c.model_extension, "onnx");
        assert!(c.pretty_json);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
zoo_dir = "/srv/zoo"
model_extension = "model"
pretty_json = false
"#;
        let c = InspectorConfig::from_toml(toml).unwrap();
        assert_eq!(c.zoo_dir, PathBuf::from("/srv/zoo"));
        assert_eq!(c.model_extension, "model");
        assert!(!c.pretty_json);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = InspectorConfig::from_toml("zoo_dir = \"zoo\"").unwrap();
        assert_eq!(c.zoo_dir, PathBuf::from("zoo"));
        assert_eq!(c.model_extension, "onnx");
        assert!(c.pretty_json);
    }

    #[test]
    fn test_bad_toml() {
        let result = InspectorConfig::from_toml("zoo_dir = [");
        assert!(matches!(result, Err(InspectorError::ConfigError(_))));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = InspectorConfig::default();
        let toml = c.to_toml().unwrap();
        let back = InspectorConfig::from_toml(&toml).unwrap();
        assert_eq!(back.zoo_dir, c.zoo_dir);
        assert_eq!(back.model_extension, c.model_extension);
    }

    #[test]
    fn test_accepts() {
        let c = InspectorConfig::default();
        assert!(c.accepts(Path::new("lenet.onnx")));
        assert!(c.accepts(Path::new("/tmp/LENET.ONNX")));
        assert!(!c.accepts(Path::new("lenet.pb")));
        assert!(!c.accepts(Path::new("onnx")));
    }
}
