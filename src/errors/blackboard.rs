// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised when reading from or deriving values on the blackboard.
//!
//! An absent key is not an error during normal scheduling: predicates treat it
//! as "not ready yet". These variants only surface when a knowledge source is
//! asked to contribute while its precondition does not hold.

use thiserror::Error;

/// Failure to read or derive a blackboard entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlackboardError {
    /// The requested key has not been written yet.
    #[error("Blackboard entry '{key}' is not present")]
    MissingEntry { key: String },

    /// The key holds a value of a different shape than the reader expected.
    #[error("Blackboard entry '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Deriving the value for this key overflowed the integer range.
    #[error("Arithmetic overflow while deriving blackboard entry '{key}'")]
    Overflow { key: String },
}
