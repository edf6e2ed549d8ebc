// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::blackboard::{Blackboard, BlackboardValue};
use crate::config::consts::{DEFAULT_INPUT_PAIR, INPUT_KEY};
use crate::errors::BlackboardError;
use crate::traits::KnowledgeSource;

/// Input stage - seeds the blackboard with a fixed operand pair.
pub struct InputSource {
    name: String,
    pair: (i64, i64),
}

impl InputSource {
    /// Input stage writing the default pair `(9, 6)`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_pair(name, DEFAULT_INPUT_PAIR)
    }

    pub fn with_pair(name: impl Into<String>, pair: (i64, i64)) -> Self {
        Self {
            name: name.into(),
            pair,
        }
    }

    pub fn pair(&self) -> (i64, i64) {
        self.pair
    }
}

impl KnowledgeSource for InputSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_contribute(&self, blackboard: &Blackboard) -> bool {
        !blackboard.contains(INPUT_KEY)
    }

    fn contribute(&self, blackboard: &mut Blackboard) -> Result<String, BlackboardError> {
        let value = BlackboardValue::InputPair(self.pair.0, self.pair.1);
        blackboard.set(INPUT_KEY, value);
        Ok(format!("wrote input: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_on_empty_blackboard() {
        let source = InputSource::new("Input");
        assert!(source.can_contribute(&Blackboard::new()));
    }

    #[test]
    fn test_contribute_writes_default_pair() {
        let source = InputSource::new("Input");
        assert_eq!(source.pair(), DEFAULT_INPUT_PAIR);
        let mut bb = Blackboard::new();

        let message = source.contribute(&mut bb).unwrap();

        assert_eq!(message, "wrote input: (9, 6)");
        assert_eq!(bb.input_pair(INPUT_KEY).unwrap(), (9, 6));
        assert_eq!(bb.len(), 1);
    }

    #[test]
    fn test_not_ready_after_contributing_once() {
        let source = InputSource::new("Input");
        let mut bb = Blackboard::new();
        source.contribute(&mut bb).unwrap();

        assert!(!source.can_contribute(&bb));
        // Repeated polling does not change the answer
        assert!(!source.can_contribute(&bb));
    }

    #[test]
    fn test_custom_pair() {
        let source = InputSource::with_pair("Custom", (-4, 10));
        let mut bb = Blackboard::new();
        source.contribute(&mut bb).unwrap();

        assert_eq!(source.name(), "Custom");
        assert_eq!(source.pair(), (-4, 10));
        assert_eq!(bb.input_pair(INPUT_KEY).unwrap(), source.pair());
    }
}
