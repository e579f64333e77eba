//! The student store: record creation, lookup, persistence, score updates,
//! and the average/GPA queries built on them.
//!
//! The backing storage is the source of truth. The in-memory map only holds
//! records created by this process and is never consulted by lookups or
//! statistics.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{info, warn};

use crate::config::GradebookConfig;
use crate::error::StoreError;
use crate::model::{validate_id, StudentRecord};
use crate::statistics::{gpa_band, Average};
use crate::storage::JsonDirStorage;
use crate::traits::RecordStorage;

/// Smallest generated ID.
const ID_MIN: u16 = 100;
/// Largest generated ID.
const ID_MAX: u16 = 999;

/// Default number of random draws before falling back to a scan.
pub const DEFAULT_ID_ATTEMPTS: u32 = 32;

/// Owns the per-process record cache and the storage backend.
#[derive(Debug)]
pub struct StudentStore<S = JsonDirStorage> {
    storage: S,
    students: HashMap<String, StudentRecord>,
    id_attempts: u32,
}

impl StudentStore<JsonDirStorage> {
    /// Store backed by JSON files under `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        Self::with_storage(JsonDirStorage::new(data_dir.as_ref()))
    }

    pub fn from_config(config: &GradebookConfig) -> Self {
        Self::open(&config.data_dir).with_id_attempts(config.id_attempts)
    }
}

impl<S: RecordStorage> StudentStore<S> {
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            students: HashMap::new(),
            id_attempts: DEFAULT_ID_ATTEMPTS,
        }
    }

    /// Set how many random IDs are tried before scanning for a free one.
    pub fn with_id_attempts(mut self, attempts: u32) -> Self {
        self.id_attempts = attempts;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// A record created earlier in this process, if any.
    pub fn cached(&self, id: &str) -> Option<&StudentRecord> {
        self.students.get(id)
    }

    /// Create a new record and cache it. Nothing is written until
    /// [`persist`](Self::persist) is called.
    ///
    /// A supplied `id` must pass [`validate_id`]; checking that it is not
    /// already taken is the caller's job. Without one, a free 3-digit ID is
    /// generated.
    pub fn create(
        &mut self,
        id: Option<String>,
        name: impl Into<String>,
        courses: Vec<String>,
    ) -> Result<StudentRecord, StoreError> {
        let id = match id {
            Some(id) => {
                validate_id(&id)?;
                id
            }
            None => self.generate_id()?,
        };

        let record = StudentRecord::new(id, name, courses);
        info!(id = %record.id, name = %record.name, "created student record");
        self.students.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    /// Read the stored record for `id`.
    pub fn lookup(&self, id: &str) -> Result<StudentRecord, StoreError> {
        self.storage.load(id)
    }

    /// Write `record` to storage, overwriting any previous version.
    pub fn persist(&self, record: &StudentRecord) -> Result<PathBuf, StoreError> {
        let location = self.storage.save(record)?;
        info!(id = %record.id, location = %location.display(), "persisted student record");
        Ok(location)
    }

    /// Replace the scores of `record` with `tokens` parsed as integers and
    /// persist it.
    ///
    /// Every token is validated first; a single bad token rejects the whole
    /// update and nothing is changed or written. Previous scores are
    /// discarded, not merged.
    pub fn update_scores<T: AsRef<str>>(
        &self,
        record: &mut StudentRecord,
        tokens: &[T],
    ) -> Result<Vec<i64>, StoreError> {
        let scores = parse_scores(tokens)?;

        let mut updated = record.clone();
        updated.scores = scores;
        self.persist(&updated)?;

        *record = updated;
        Ok(record.scores.clone())
    }

    /// Average score of the stored record for `id`.
    ///
    /// A missing student or an empty score list yields `0.00`. Read and
    /// decode failures are returned.
    pub fn average_score(&self, id: &str) -> Result<Average, StoreError> {
        match self.lookup(id) {
            Ok(record) => Ok(Average::of(&record.scores)),
            Err(e) if e.is_not_found() => {
                warn!(id, "average requested for unknown student, reporting 0.00");
                Ok(Average::ZERO)
            }
            Err(e) => Err(e),
        }
    }

    /// GPA band (0..=5) of the stored record for `id`.
    ///
    /// Unlike [`average_score`](Self::average_score), a missing student is an
    /// error here.
    pub fn gpa(&self, id: &str) -> Result<u8, StoreError> {
        let record = self.lookup(id)?;
        Ok(gpa_band(Average::of(&record.scores)))
    }

    fn generate_id(&self) -> Result<String, StoreError> {
        let mut rng = rand::rng();

        for _ in 0..self.id_attempts {
            let candidate = rng.random_range(ID_MIN..=ID_MAX).to_string();
            if self.is_free(&candidate)? {
                return Ok(candidate);
            }
        }

        // Dense ID space: walk it from a random offset.
        let span = ID_MAX - ID_MIN + 1;
        let offset = rng.random_range(0..span);
        for step in 0..span {
            let candidate = (ID_MIN + (offset + step) % span).to_string();
            if self.is_free(&candidate)? {
                return Ok(candidate);
            }
        }

        Err(StoreError::IdSpaceExhausted {
            attempts: total_attempts(self.id_attempts),
        })
    }

    fn is_free(&self, id: &str) -> Result<bool, StoreError> {
        Ok(!self.students.contains_key(id) && !self.storage.contains(id)?)
    }
}

/// Random draws plus one scan of the whole ID space.
fn total_attempts(id_attempts: u32) -> u32 {
    id_attempts.saturating_add(u32::from(ID_MAX - ID_MIN + 1))
}

/// Parse raw score tokens as integers, ignoring surrounding whitespace.
pub fn parse_scores<T: AsRef<str>>(tokens: &[T]) -> Result<Vec<i64>, StoreError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| StoreError::InvalidScore {
                    token: token.to_string(),
                })
        })
        .collect()
}
