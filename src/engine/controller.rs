// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The blackboard control loop.
//!
//! A [`Controller`] owns a [`Blackboard`] and sweeps an ordered [`SourceList`]
//! until the blackboard reports completion:
//!
//! ```text
//! while status != complete:          <- checked only between sweeps
//!     for source in sources:         <- one sweep, in list order
//!         if source.can_contribute(bb):
//!             source.contribute(bb)  <- runs to completion before the next poll
//! ```
//!
//! Sources never see each other. Whether they converge depends only on what
//! they read and write; list order changes how many sweeps it takes, not the
//! final state, as long as each stage's inputs eventually appear.
//!
//! # Non-termination
//!
//! With default [`ControllerOptions`] the loop is unbounded. If no source can
//! ever contribute while the status is still incomplete, [`Controller::run`]
//! never returns. The controller notices the first sweep with no contribution
//! and logs a [`SweepStalled`] warning, but keeps looping. Set
//! [`ControllerOptions::max_sweeps`] to turn that hang into
//! [`ExecutionError::SweepLimitExceeded`].

use std::io::{self, Write};
use std::time::Instant;

use crate::blackboard::Blackboard;
use crate::config::{ControllerOptions, SourceList};
use crate::engine::report::{Contribution, RunReport};
use crate::errors::ExecutionError;
use crate::observability::messages::controller::*;
use crate::observability::messages::source::*;
use crate::observability::messages::StructuredLog;

/// Drives knowledge sources over a blackboard until it is complete.
///
/// Trace lines (`[<source name>] <message>`, one per contribution) are written
/// to `W`, which is stdout unless the controller was built with
/// [`Controller::with_output`].
///
/// # Example
///
/// ```
/// use the_blackboard::blackboard::{Blackboard, Status};
/// use the_blackboard::engine::Controller;
/// use the_blackboard::sources::default_sources;
///
/// let mut controller = Controller::with_output(Blackboard::new(), default_sources(), Vec::<u8>::new());
/// let report = controller.run().unwrap();
///
/// assert_eq!(report.contributors(), vec!["Input", "Sum", "Output"]);
/// assert_eq!(controller.blackboard().status(), Status::Complete);
///
/// let output = String::from_utf8(controller.into_output()).unwrap();
/// assert!(output.ends_with("[Output] final result: 15\n"));
/// ```
pub struct Controller<W: Write = io::Stdout> {
    blackboard: Blackboard,
    sources: SourceList,
    options: ControllerOptions,
    output: W,
}

impl Controller<io::Stdout> {
    /// Controller writing its trace to stdout, with default (unbounded) options.
    pub fn new(blackboard: Blackboard, sources: SourceList) -> Self {
        Self::with_output(blackboard, sources, io::stdout())
    }
}

impl<W: Write> Controller<W> {
    /// Controller writing its trace to `output`.
    pub fn with_output(blackboard: Blackboard, sources: SourceList, output: W) -> Self {
        Self {
            blackboard,
            sources,
            options: ControllerOptions::default(),
            output,
        }
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sweep the sources until the blackboard is complete.
    ///
    /// Status is read once before every sweep and never in the middle of one,
    /// so sources later in the list are still polled during the sweep in which
    /// the blackboard becomes complete.
    ///
    /// Returns [`ExecutionError::ContributionFailed`] if a source fails,
    /// [`ExecutionError::TraceOutput`] if the trace cannot be written and
    /// [`ExecutionError::SweepLimitExceeded`] once a configured bound is hit.
    /// Without a bound, a run that can never complete does not return.
    pub fn run(&mut self) -> Result<RunReport, ExecutionError> {
        let start_msg = RunStarted {
            source_count: self.sources.len(),
            max_sweeps: self.options.max_sweeps,
        };
        let span = start_msg.span("controller_run");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let mut report = RunReport::default();
        let mut stall_reported = false;

        loop {
            let status = self.blackboard.status();
            report.record_status(report.sweeps, status);
            if status.is_complete() {
                break;
            }

            if let Some(max_sweeps) = self.options.max_sweeps {
                if report.sweeps >= max_sweeps {
                    SweepLimitReached { max_sweeps }.log();
                    return Err(ExecutionError::SweepLimitExceeded { max_sweeps });
                }
            }

            report.sweeps += 1;
            let sweep = report.sweeps;
            SweepStarted { sweep, status }.log();

            let contributed = self.sweep(sweep, &mut report)?;
            SweepCompleted {
                sweep,
                contributions: contributed,
            }
            .log();

            // No contribution means the blackboard did not change, so no
            // predicate can change either.
            if contributed == 0 && !stall_reported {
                SweepStalled {
                    sweep,
                    source_count: self.sources.len(),
                    bounded: self.options.max_sweeps.is_some(),
                }
                .log();
                stall_reported = true;
            }
        }

        self.output.flush()?;

        RunCompleted {
            sweeps: report.sweeps,
            contributions: report.contributions.len(),
            duration: start_time.elapsed(),
        }
        .log();
        tracing::debug!(blackboard = %self.blackboard.snapshot(), "Final blackboard state");

        Ok(report)
    }

    /// One pass over every source in order. Returns how many contributed.
    fn sweep(&mut self, sweep: usize, report: &mut RunReport) -> Result<usize, ExecutionError> {
        let mut contributed = 0;

        for source in self.sources.iter() {
            if !source.can_contribute(&self.blackboard) {
                SourceNotReady {
                    source_name: source.name(),
                    sweep,
                }
                .log();
                continue;
            }

            let message = source.contribute(&mut self.blackboard).map_err(|error| {
                SourceContributionFailed {
                    source_name: source.name(),
                    error: &error,
                }
                .log();
                ExecutionError::ContributionFailed {
                    source_name: source.name().to_string(),
                    source: error,
                }
            })?;

            let contribution = Contribution {
                sweep,
                source_name: source.name().to_string(),
                message,
            };
            writeln!(self.output, "{}", contribution.trace_line())?;
            SourceContributed {
                source_name: &contribution.source_name,
                sweep,
                message: &contribution.message,
            }
            .log();

            report.contributions.push(contribution);
            contributed += 1;
        }

        Ok(contributed)
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn into_blackboard(self) -> Blackboard {
        self.blackboard
    }

    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackboard::Status;
    use crate::sources::default_sources;

    #[test]
    fn test_run_on_complete_blackboard_does_nothing() {
        let mut bb = Blackboard::new();
        bb.mark_complete();
        let mut controller = Controller::with_output(bb, default_sources(), Vec::<u8>::new());

        let report = controller.run().unwrap();

        assert_eq!(report.sweeps, 0);
        assert!(report.contributions.is_empty());
        assert_eq!(report.status_checks(), vec![Status::Complete]);
        assert!(controller.output().is_empty());
    }

    #[test]
    fn test_default_options_are_unbounded() {
        let controller = Controller::with_output(Blackboard::new(), default_sources(), Vec::<u8>::new());
        assert_eq!(controller.options().max_sweeps, None);
        assert_eq!(controller.sources().len(), 3);
    }

    #[test]
    fn test_with_options_replaces_options() {
        let controller = Controller::with_output(Blackboard::new(), default_sources(), Vec::<u8>::new())
            .with_options(ControllerOptions::bounded(3));
        assert_eq!(controller.options().max_sweeps, Some(3));
    }

    #[test]
    fn test_empty_source_list_hits_sweep_bound() {
        let mut controller = Controller::with_output(Blackboard::new(), SourceList::new(), Vec::<u8>::new())
            .with_options(ControllerOptions::bounded(2));

        let err = controller.run().unwrap_err();

        assert!(matches!(err, ExecutionError::SweepLimitExceeded { max_sweeps: 2 }));
        assert_eq!(controller.blackboard().status(), Status::Incomplete);
    }
}
