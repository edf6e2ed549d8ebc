// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::blackboard::Blackboard;
use crate::config::consts::SUM_KEY;
use crate::errors::BlackboardError;
use crate::traits::KnowledgeSource;

/// Output stage - reports the final sum and marks the blackboard complete.
pub struct OutputSource {
    name: String,
}

impl OutputSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl KnowledgeSource for OutputSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_contribute(&self, blackboard: &Blackboard) -> bool {
        blackboard.contains(SUM_KEY) && !blackboard.is_complete()
    }

    fn contribute(&self, blackboard: &mut Blackboard) -> Result<String, BlackboardError> {
        let result = blackboard.scalar(SUM_KEY)?;
        blackboard.mark_complete();
        Ok(format!("final result: {}", result))
    }
}
