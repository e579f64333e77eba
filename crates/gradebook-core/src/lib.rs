//! gradebook-core — Student records, score storage, and statistics.
//!
//! This crate defines the student record model, the storage seam and its
//! JSON-file backend, and the [`store::StudentStore`] that ties them together
//! with average and GPA computation.

pub mod config;
pub mod error;
pub mod model;
pub mod statistics;
pub mod storage;
pub mod store;
pub mod traits;

pub use error::{ErrorKind, StoreError};
pub use model::StudentRecord;
pub use statistics::{gpa_band, Average, ParseAverageError};
pub use store::StudentStore;
