// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pass-through access to bundled sample models.
//!
//! The zoo is a single flat directory. Lookups take a bare file name and
//! never resolve outside that directory.

use crate::InspectorError;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

/// A fixed directory of sample model files.
#[derive(Debug, Clone)]
pub struct ModelZoo {
    root: PathBuf,
}

impl ModelZoo {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` to a file inside the zoo directory.
    ///
    /// Names containing path separators, `..`, or naming anything other
    /// than a regular file are reported as not found.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, InspectorError> {
        let not_found = || InspectorError::AssetNotFound {
            name: name.to_string(),
        };

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(not_found()),
        }

        let path = self.root.join(name);
        if !path.is_file() {
            return Err(not_found());
        }
        Ok(path)
    }

    /// Opens an asset for reading.
    pub fn open(&self, name: &str) -> Result<File, InspectorError> {
        let path = self.resolve(name)?;
        tracing::debug!("serving zoo asset '{}'", path.display());
        Ok(File::open(path)?)
    }

    /// Lists the regular files in the zoo directory, sorted by name.
    pub fn list(&self) -> Result<Vec<String>, InspectorError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn zoo_with(files: &[(&str, &[u8])]) -> (tempfile::TempDir, ModelZoo) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let zoo = ModelZoo::new(dir.path().to_path_buf());
        (dir, zoo)
    }

    #[test]
    fn test_open_existing() {
        let (_dir, zoo) = zoo_with(&[("lenet.onnx", b"bytes")]);
        let mut content = Vec::new();
        zoo.open("lenet.onnx").unwrap().read_to_end(&mut content).unwrap();
        assert_eq!(content, b"bytes");
    }

    #[test]
    fn test_missing_asset() {
        let (_dir, zoo) = zoo_with(&[]);
        let err = zoo.open("resnet.onnx").unwrap_err();
        assert!(matches!(err, InspectorError::AssetNotFound { ref name } if name == "resnet.onnx"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_names_cannot_escape_root() {
        let (dir, zoo) = zoo_with(&[("lenet.onnx", b"x")]);
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        for name in ["../lenet.onnx", "nested/../lenet.onnx", "/etc/passwd", "", ".", "nested"] {
            assert!(
                matches!(zoo.resolve(name), Err(InspectorError::AssetNotFound { .. })),
                "{name:?} should not resolve"
            );
        }
    }

    #[test]
    fn test_list_sorted_files_only() {
        let (dir, zoo) = zoo_with(&[("b.onnx", b""), ("a.onnx", b"")]);
        std::fs::create_dir(dir.path().join("subdir")).unwrap();
        assert_eq!(zoo.list().unwrap(), vec!["a.onnx", "b.onnx"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let zoo = ModelZoo::new(PathBuf::from("/nonexistent/zoo"));
        assert!(matches!(zoo.list(), Err(InspectorError::Io(_))));
    }
}
