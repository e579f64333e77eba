//! Store error types.
//!
//! Lookups must keep "no such student" apart from "the file is there but
//! unusable", so every failure carries enough context to tell them apart.
//! [`StoreError::kind`] collapses the variants into the coarse categories
//! callers branch on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, writing, or updating student records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No backing file exists for this ID.
    #[error("no student found with ID {id}")]
    NotFound { id: String },

    /// The ID cannot name a record file: empty, or holding characters other
    /// than ASCII letters, digits, `-` and `_`.
    #[error("invalid student ID {id:?}")]
    InvalidId { id: String },

    /// A score token could not be parsed as an integer.
    #[error("score must be a number, got {token:?}")]
    InvalidScore { token: String },

    /// The backing file exists but does not hold a valid record.
    #[error("corrupt student file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file or directory could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every generated ID is already taken.
    #[error("no free student ID left after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },
}

/// Coarse classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ParseFailure,
    IoFailure,
    Exhausted,
}

impl StoreError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::InvalidId { .. }
            | StoreError::InvalidScore { .. }
            | StoreError::Corrupt { .. } => ErrorKind::ParseFailure,
            StoreError::Io { .. } => ErrorKind::IoFailure,
            StoreError::IdSpaceExhausted { .. } => ErrorKind::Exhausted,
        }
    }

    /// Returns `true` if the record simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
