// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for controller run and sweep lifecycle events.

use crate::blackboard::Status;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Controller run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_blackboard::observability::messages::controller::RunStarted;
///
/// let msg = RunStarted {
///     source_count: 3,
///     max_sweeps: None,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted {
    pub source_count: usize,
    pub max_sweeps: Option<usize>,
}

impl Display for RunStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.max_sweeps {
            Some(max) => write!(
                f,
                "Starting blackboard run: {} sources, max_sweeps={}",
                self.source_count, max
            ),
            None => write!(
                f,
                "Starting blackboard run: {} sources, unbounded sweeps",
                self.source_count
            ),
        }
    }
}

impl StructuredLog for RunStarted {
    fn log(&self) {
        tracing::info!(
            source_count = self.source_count,
            max_sweeps = ?self.max_sweeps,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "blackboard_run",
            span_name = name,
            source_count = self.source_count,
            max_sweeps = ?self.max_sweeps,
        )
    }
}

/// A sweep is about to start; `status` is the value read by the loop check.
///
/// # Log Level
/// `debug!` - Per-sweep detail
pub struct SweepStarted {
    pub sweep: usize,
    pub status: Status,
}

impl Display for SweepStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Sweep {} starting (status={})", self.sweep, self.status)
    }
}

impl StructuredLog for SweepStarted {
    fn log(&self) {
        tracing::debug!(sweep = self.sweep, status = %self.status, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sweep",
            span_name = name,
            sweep = self.sweep,
            status = %self.status,
        )
    }
}

/// A sweep finished.
///
/// # Log Level
/// `debug!` - Per-sweep detail
pub struct SweepCompleted {
    pub sweep: usize,
    pub contributions: usize,
}

impl Display for SweepCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Sweep {} completed with {} contribution(s)",
            self.sweep, self.contributions
        )
    }
}

impl StructuredLog for SweepCompleted {
    fn log(&self) {
        tracing::debug!(
            sweep = self.sweep,
            contributions = self.contributions,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sweep_completed",
            span_name = name,
            sweep = self.sweep,
            contributions = self.contributions,
        )
    }
}

/// A whole sweep passed without any source contributing while the blackboard
/// is still incomplete. Nothing can change the blackboard any more, so an
/// unbounded run will not terminate.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use the_blackboard::observability::messages::controller::SweepStalled;
///
/// let msg = SweepStalled {
///     sweep: 4,
///     source_count: 2,
///     bounded: false,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct SweepStalled {
    pub sweep: usize,
    pub source_count: usize,
    pub bounded: bool,
}

impl Display for SweepStalled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Sweep {} made no progress: none of {} sources can contribute and the blackboard is incomplete",
            self.sweep, self.source_count
        )?;
        if !self.bounded {
            write!(f, "; the loop will not terminate (set max_sweeps to bound it)")?;
        }
        Ok(())
    }
}

impl StructuredLog for SweepStalled {
    fn log(&self) {
        tracing::warn!(
            sweep = self.sweep,
            source_count = self.source_count,
            bounded = self.bounded,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "sweep_stalled",
            span_name = name,
            sweep = self.sweep,
            source_count = self.source_count,
            bounded = self.bounded,
        )
    }
}

/// The configured sweep bound was reached.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SweepLimitReached {
    pub max_sweeps: usize,
}

impl Display for SweepLimitReached {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Giving up after {} sweeps: blackboard still incomplete",
            self.max_sweeps
        )
    }
}

impl StructuredLog for SweepLimitReached {
    fn log(&self) {
        tracing::error!(max_sweeps = self.max_sweeps, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "sweep_limit_reached",
            span_name = name,
            max_sweeps = self.max_sweeps,
        )
    }
}

/// Run finished with the blackboard complete.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_blackboard::observability::messages::controller::RunCompleted;
/// use std::time::Duration;
///
/// let msg = RunCompleted {
///     sweeps: 1,
///     contributions: 3,
///     duration: Duration::from_micros(40),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunCompleted {
    pub sweeps: usize,
    pub contributions: usize,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Blackboard complete after {} sweep(s), {} contribution(s) in {:?}",
            self.sweeps, self.contributions, self.duration
        )
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        tracing::info!(
            sweeps = self.sweeps,
            contributions = self.contributions,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_completed",
            span_name = name,
            sweeps = self.sweeps,
            contributions = self.contributions,
            duration = ?self.duration,
        )
    }
}
