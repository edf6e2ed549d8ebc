// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::blackboard::{Blackboard, BlackboardValue};
use crate::config::consts::{INPUT_KEY, SUM_KEY};
use crate::errors::BlackboardError;
use crate::traits::KnowledgeSource;

/// Sum stage - adds the two components of the input pair.
pub struct SumSource {
    name: String,
}

impl SumSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl KnowledgeSource for SumSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_contribute(&self, blackboard: &Blackboard) -> bool {
        blackboard.contains(INPUT_KEY) && !blackboard.contains(SUM_KEY)
    }

    fn contribute(&self, blackboard: &mut Blackboard) -> Result<String, BlackboardError> {
        let (a, b) = blackboard.input_pair(INPUT_KEY)?;
        let sum = a.checked_add(b).ok_or_else(|| BlackboardError::Overflow {
            key: SUM_KEY.to_string(),
        })?;

        blackboard.set(SUM_KEY, BlackboardValue::Sum(sum));
        Ok(format!("computed the sum: {}", sum))
    }
}
