//! Core data model types for gradebook.
//!
//! A [`StudentRecord`] is the full set of stored attributes for one student.
//! Its serde representation is the on-disk contract, so the field names are
//! fixed: `ID`, `Name`, `Courses`, `Scores`, `Attendance`, `Remarks`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StoreError;

/// A single student's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Short numeric identifier, stable once assigned.
    #[serde(rename = "ID")]
    pub id: String,
    /// Student name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Enrolled courses, in the order they were entered.
    #[serde(rename = "Courses", default)]
    pub courses: Vec<String>,
    /// Recorded scores. Replaced wholesale on every update.
    #[serde(rename = "Scores", default, deserialize_with = "scores_or_empty_map")]
    pub scores: Vec<i64>,
    /// Reserved. Always written empty.
    #[serde(rename = "Attendance", default)]
    pub attendance: BTreeMap<String, serde_json::Value>,
    /// Reserved. Always written empty.
    #[serde(rename = "Remarks", default)]
    pub remarks: Vec<serde_json::Value>,
}

impl StudentRecord {
    /// Build a fresh record with no scores.
    pub fn new(id: impl Into<String>, name: impl Into<String>, courses: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses,
            scores: Vec::new(),
            attendance: BTreeMap::new(),
            remarks: Vec::new(),
        }
    }
}

/// Check that `id` can key a record: non-empty and made only of ASCII
/// letters, digits, `-` and `_`. Path separators, `.` and `..` never pass.
pub fn validate_id(id: &str) -> Result<(), StoreError> {
    let valid = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidId { id: id.to_string() })
    }
}

/// Older files stored `"Scores": {}` for students that never had scores
/// recorded. Accept that shape as an empty list.
fn scores_or_empty_map<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScores {
        List(Vec<i64>),
        Map(BTreeMap<String, serde_json::Value>),
    }

    match RawScores::deserialize(deserializer)? {
        RawScores::List(scores) => Ok(scores),
        RawScores::Map(map) if map.is_empty() => Ok(Vec::new()),
        RawScores::Map(_) => Err(serde::de::Error::custom(
            "Scores must be a list of integers",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = StudentRecord::new("101", "Ada", vec!["Math".into(), "CS".into()]);
        assert_eq!(record.id, "101");
        assert_eq!(record.courses, vec!["Math", "CS"]);
        assert!(record.scores.is_empty());
        assert!(record.attendance.is_empty());
        assert!(record.remarks.is_empty());
    }

    #[test]
    fn serializes_with_fixed_key_names() {
        let mut record = StudentRecord::new("101", "Ada", vec!["Math".into()]);
        record.scores = vec![90, 85];
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ID": "101",
                "Name": "Ada",
                "Courses": ["Math"],
                "Scores": [90, 85],
                "Attendance": {},
                "Remarks": []
            })
        );
    }

    #[test]
    fn legacy_empty_scores_object_reads_as_empty_list() {
        let json = r#"{"ID": "7", "Name": "Bo", "Courses": ["Art"], "Scores": {}, "Attendance": {}, "Remarks": []}"#;
        let record: StudentRecord = serde_json::from_str(json).unwrap();
        assert!(record.scores.is_empty());
    }

    #[test]
    fn non_empty_scores_object_is_rejected() {
        let json = r#"{"ID": "7", "Name": "Bo", "Courses": [], "Scores": {"Art": 80}}"#;
        assert!(serde_json::from_str::<StudentRecord>(json).is_err());
    }

    #[test]
    fn valid_ids() {
        for id in ["101", "7", "s-12", "a_b", "Ada"] {
            assert!(validate_id(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn ids_that_could_leave_the_data_dir_are_rejected() {
        for id in ["", "../x", "..", ".", "a/b", "a\\b", "/etc/passwd", "1.json", " 1"] {
            let err = validate_id(id).unwrap_err();
            assert!(matches!(err, StoreError::InvalidId { .. }), "{id:?}: {err:?}");
        }
    }

    #[test]
    fn missing_reserved_fields_default() {
        let json = r#"{"ID": "7", "Name": "Bo", "Courses": [" Art"], "Scores": [50]}"#;
        let record: StudentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.courses, vec![" Art"]);
        assert_eq!(record.scores, vec![50]);
        assert!(record.remarks.is_empty());
    }
}
