// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The shared workspace knowledge sources read from and write to.
//!
//! A [`Blackboard`] is a keyed map of [`BlackboardValue`]s plus a [`Status`]
//! flag. It performs no validation of its own: sources coordinate purely by
//! checking whether a key is present, and the controller only looks at the
//! status. Access is through ordinary borrows, so the borrow checker
//! guarantees a single writer at any point of a run.

mod status;
mod value;

pub use status::Status;
pub use value::BlackboardValue;

use serde::Serialize;
use std::collections::HashMap;

use crate::errors::BlackboardError;

/// Shared key/value workspace with a one-way completion flag.
///
/// # Example
///
/// ```
/// use the_blackboard::blackboard::{Blackboard, BlackboardValue, Status};
///
/// let mut bb = Blackboard::new();
/// assert!(!bb.contains("input"));
///
/// bb.set("input", BlackboardValue::InputPair(9, 6));
/// assert_eq!(bb.input_pair("input").unwrap(), (9, 6));
///
/// bb.mark_complete();
/// assert_eq!(bb.status(), Status::Complete);
/// ```
#[derive(Debug, Default, Clone, Serialize)]
pub struct Blackboard {
    entries: HashMap<String, BlackboardValue>,
    status: Status,
}

impl Blackboard {
    /// Create an empty, incomplete blackboard.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Write operations ---

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: BlackboardValue) {
        self.entries.insert(key.into(), value);
    }

    /// Flip the status to [`Status::Complete`]. Calling it again is a no-op.
    pub fn mark_complete(&mut self) {
        self.status = Status::Complete;
    }

    // --- Read operations ---

    /// Get the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&BlackboardValue> {
        self.entries.get(key)
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Read the operand pair stored under `key`.
    pub fn input_pair(&self, key: &str) -> Result<(i64, i64), BlackboardError> {
        match self.require(key)? {
            BlackboardValue::InputPair(a, b) => Ok((*a, *b)),
            other => Err(BlackboardError::TypeMismatch {
                key: key.to_string(),
                expected: "input_pair",
                found: other.kind(),
            }),
        }
    }

    /// Read the scalar stored under `key`.
    pub fn scalar(&self, key: &str) -> Result<i64, BlackboardError> {
        match self.require(key)? {
            BlackboardValue::Sum(value) => Ok(*value),
            other => Err(BlackboardError::TypeMismatch {
                key: key.to_string(),
                expected: "sum",
                found: other.kind(),
            }),
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the blackboard holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the keys currently present.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Render entries and status as JSON for diagnostics.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "status": self.status.as_str(), "error": e.to_string() })
        })
    }

    fn require(&self, key: &str) -> Result<&BlackboardValue, BlackboardError> {
        self.entries.get(key).ok_or_else(|| BlackboardError::MissingEntry {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blackboard_is_empty_and_incomplete() {
        let bb = Blackboard::new();
        assert!(bb.is_empty());
        assert_eq!(bb.len(), 0);
        assert_eq!(bb.status(), Status::Incomplete);
        assert!(bb.get("input").is_none());
    }

    #[test]
    fn test_set_and_get() {
        let mut bb = Blackboard::new();
        bb.set("sum", BlackboardValue::Sum(15));

        assert!(bb.contains("sum"));
        assert_eq!(bb.get("sum"), Some(&BlackboardValue::Sum(15)));
        assert_eq!(bb.scalar("sum").unwrap(), 15);
        assert_eq!(bb.keys().collect::<Vec<_>>(), vec!["sum"]);
    }

    #[test]
    fn test_typed_reader_reports_missing_entry() {
        let bb = Blackboard::new();
        assert_eq!(
            bb.input_pair("input"),
            Err(BlackboardError::MissingEntry {
                key: "input".to_string()
            })
        );
    }

    #[test]
    fn test_typed_reader_reports_type_mismatch() {
        let mut bb = Blackboard::new();
        bb.set("input", BlackboardValue::Sum(3));

        let err = bb.input_pair("input").unwrap_err();
        assert_eq!(
            err,
            BlackboardError::TypeMismatch {
                key: "input".to_string(),
                expected: "input_pair",
                found: "sum",
            }
        );
        assert!(bb.scalar("input").is_ok());
    }

    #[test]
    fn test_mark_complete_is_one_way() {
        let mut bb = Blackboard::new();
        bb.mark_complete();
        bb.mark_complete();
        assert!(bb.is_complete());

        // Writes after completion do not touch the status
        bb.set("sum", BlackboardValue::Sum(1));
        assert_eq!(bb.status(), Status::Complete);
    }

    #[test]
    fn test_snapshot_contains_entries_and_status() {
        let mut bb = Blackboard::new();
        bb.set("input", BlackboardValue::InputPair(9, 6));

        let snapshot = bb.snapshot();
        assert_eq!(snapshot["status"], "incomplete");
        assert_eq!(snapshot["entries"]["input"]["kind"], "input_pair");
    }
}
