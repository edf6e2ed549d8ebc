// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The shapes of data a knowledge source may place on the blackboard.
///
/// Readers pattern-match on the variant instead of downcasting, so a key
/// holding the wrong shape is reported as a
/// [`TypeMismatch`](crate::errors::BlackboardError::TypeMismatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum BlackboardValue {
    /// A pair of operands, as written by the input stage.
    InputPair(i64, i64),
    /// A single derived integer, as written by the sum stage.
    Sum(i64),
}

impl BlackboardValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            BlackboardValue::InputPair(..) => "input_pair",
            BlackboardValue::Sum(_) => "sum",
        }
    }
}

impl Display for BlackboardValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlackboardValue::InputPair(a, b) => write!(f, "({}, {})", a, b),
            BlackboardValue::Sum(value) => write!(f, "{}", value),
        }
    }
}
