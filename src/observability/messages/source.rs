// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for knowledge source readiness and contribution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A source's predicate held and it contributed.
///
/// # Log Level
/// `debug!` - Per-contribution detail; the trace line itself is program output
///
/// # Example
/// ```
/// use the_blackboard::observability::messages::source::SourceContributed;
///
/// let msg = SourceContributed {
///     source_name: "Sum",
///     sweep: 1,
///     message: "computed the sum: 15",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct SourceContributed<'a> {
    pub source_name: &'a str,
    pub sweep: usize,
    pub message: &'a str,
}

impl Display for SourceContributed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Source '{}' contributed in sweep {}: {}",
            self.source_name, self.sweep, self.message
        )
    }
}

impl StructuredLog for SourceContributed<'_> {
    fn log(&self) {
        tracing::debug!(
            source_name = self.source_name,
            sweep = self.sweep,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "source_contribution",
            span_name = name,
            source_name = self.source_name,
            sweep = self.sweep,
        )
    }
}

/// A source was polled and declined.
///
/// # Log Level
/// `trace!` - Very chatty
pub struct SourceNotReady<'a> {
    pub source_name: &'a str,
    pub sweep: usize,
}

impl Display for SourceNotReady<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Source '{}' cannot contribute in sweep {}",
            self.source_name, self.sweep
        )
    }
}

impl StructuredLog for SourceNotReady<'_> {
    fn log(&self) {
        tracing::trace!(
            source_name = self.source_name,
            sweep = self.sweep,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "source_not_ready",
            span_name = name,
            source_name = self.source_name,
            sweep = self.sweep,
        )
    }
}

/// A source failed while contributing.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_blackboard::observability::messages::source::SourceContributionFailed;
/// use the_blackboard::errors::BlackboardError;
///
/// let error = BlackboardError::MissingEntry { key: "input".to_string() };
/// let msg = SourceContributionFailed {
///     source_name: "Sum",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct SourceContributionFailed<'a> {
    pub source_name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SourceContributionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Source '{}' failed to contribute: {}",
            self.source_name, self.error
        )
    }
}

impl StructuredLog for SourceContributionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            source_name = self.source_name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "source_contribution_failed",
            span_name = name,
            source_name = self.source_name,
            error = %self.error,
        )
    }
}
