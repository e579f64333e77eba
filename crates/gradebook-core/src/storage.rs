//! One-JSON-file-per-student storage backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::{validate_id, StudentRecord};
use crate::traits::RecordStorage;

/// Stores each record at `<root>/<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirStorage {
    root: PathBuf,
}

impl JsonDirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the record files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Backing file for `id`. Rejects IDs that are not a plain file stem,
    /// so the result always sits directly under [`root`](Self::root).
    pub fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        validate_id(id)?;
        Ok(self.root.join(format!("{id}.json")))
    }
}

impl RecordStorage for JsonDirStorage {
    fn load(&self, id: &str) -> Result<StudentRecord, StoreError> {
        let path = self.path_for(id)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(id, path = %path.display(), "no backing file");
                return Err(StoreError::NotFound { id: id.to_string() });
            }
            Err(source) => {
                warn!(id, path = %path.display(), error = %source, "unreadable student file");
                return Err(StoreError::Io { path, source });
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => {
                debug!(id, path = %path.display(), "loaded student record");
                Ok(record)
            }
            Err(source) => {
                warn!(id, path = %path.display(), error = %source, "corrupt student file");
                Err(StoreError::Corrupt { path, source })
            }
        }
    }

    fn save(&self, record: &StudentRecord) -> Result<PathBuf, StoreError> {
        let path = self.path_for(&record.id)?;
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let json = to_json_pretty(record).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: io::Error::other(e),
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(id = %record.id, path = %path.display(), "wrote student record");
        Ok(path)
    }

    fn contains(&self, id: &str) -> Result<bool, StoreError> {
        let path = self.path_for(id)?;
        path.try_exists()
            .map_err(|source| StoreError::Io { path, source })
    }
}

/// Four-space indented JSON, the layout existing student files use.
fn to_json_pretty(record: &StudentRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    Ok(buf)
}
