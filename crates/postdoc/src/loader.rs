//! Reading collection exports from disk.

use std::fs;
use std::path::{Path, PathBuf};

use postdoc_render::Collection;
use thiserror::Error;
use tracing::debug;

/// Failure to load the source collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read collection {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse collection {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and deserializes a collection JSON file.
pub fn load_collection(path: impl AsRef<Path>) -> Result<Collection, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let collection: Collection = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        requests = collection.requests.len(),
        folders = collection.folders.len(),
        "loaded collection"
    );
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");
        fs::write(&path, r#"{"name": "Demo", "requests": [{"id": "r1"}]}"#).unwrap();

        let collection = load_collection(&path).unwrap();
        assert_eq!(collection.name, "Demo");
        assert_eq!(collection.requests[0].id, "r1");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_collection(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");
        fs::write(&path, "{ nope").unwrap();

        let err = load_collection(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("c.json"));
    }
}
