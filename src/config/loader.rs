// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Options controlling how a [`Controller`](crate::engine::Controller) runs.
///
/// All fields are optional. The defaults reproduce the plain blackboard loop:
/// sweep until the blackboard reports completion, however long that takes.
///
/// # Fields
/// * `max_sweeps` - Upper bound on the number of sweeps (optional). When unset,
///   a source list that can never complete keeps the loop running forever.
///
/// # Example
/// ```yaml
/// max_sweeps: 100
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ControllerOptions {
    #[serde(default)]
    pub max_sweeps: Option<usize>,
}

impl ControllerOptions {
    /// Options with an explicit sweep bound.
    pub fn bounded(max_sweeps: usize) -> Self {
        Self {
            max_sweeps: Some(max_sweeps),
        }
    }

    /// Reject values the controller cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sweeps == Some(0) {
            return Err(ConfigError::Invalid {
                reason: "max_sweeps must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse and validate controller options from YAML text.
pub fn parse_config(content: &str) -> Result<ControllerOptions, ConfigError> {
    // An empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(ControllerOptions::default());
    }
    let options: ControllerOptions = serde_yaml::from_str(content)?;
    options.validate()?;
    Ok(options)
}

/// Load and validate controller options from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ControllerOptions, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_bounded_config() {
        let options = parse_config("max_sweeps: 25\n").unwrap();
        assert_eq!(options, ControllerOptions::bounded(25));
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), ControllerOptions::default());
        assert_eq!(parse_config("{}").unwrap().max_sweeps, None);
    }

    #[test]
    fn test_zero_sweeps_rejected() {
        let err = parse_config("max_sweeps: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("max_sweeps"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = parse_config("max_sweeps: [not, a, number]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_sweeps: 7").unwrap();

        let options = load_config(file.path()).unwrap();
        assert_eq!(options.max_sweeps, Some(7));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
