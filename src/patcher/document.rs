use crate::error::PatchError;
use serde_yaml::{Mapping, Value};
use std::fs::{self, File};
use std::path::Path;

/// Loads a YAML document from disk as an order-preserving mapping
pub fn load_document(path: &Path) -> Result<Mapping, PatchError> {
    let file = File::open(path).map_err(|e| PatchError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: Value = serde_yaml::from_reader(file).map_err(|e| PatchError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match document {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(PatchError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Writes a document back to `path`, fully replacing the previous contents.
///
/// Keys are emitted in mapping insertion order, block style.
pub fn write_document(path: &Path, document: &Mapping) -> Result<(), PatchError> {
    let yaml = serde_yaml::to_string(document).map_err(|e| PatchError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, yaml).map_err(|e| PatchError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
