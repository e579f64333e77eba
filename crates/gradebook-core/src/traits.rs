//! Storage seam for student records.
//!
//! [`crate::store::StudentStore`] never touches paths or serialization
//! directly; everything durable goes through a [`RecordStorage`]. The JSON
//! directory backend lives in [`crate::storage`].

use std::path::PathBuf;

use crate::error::StoreError;
use crate::model::StudentRecord;

/// Durable, ID-keyed storage for student records.
pub trait RecordStorage {
    /// Load the record for `id`.
    ///
    /// Must return [`StoreError::NotFound`] only when no record exists, and a
    /// different variant when one exists but cannot be read or decoded.
    fn load(&self, id: &str) -> Result<StudentRecord, StoreError>;

    /// Write `record`, replacing whatever is stored under its ID. Returns
    /// where it was written.
    fn save(&self, record: &StudentRecord) -> Result<PathBuf, StoreError>;

    /// Whether a record is stored under `id`.
    fn contains(&self, id: &str) -> Result<bool, StoreError>;
}
