// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::blackboard::Status;

/// One successful `contribute` call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// 1-based index of the sweep the contribution happened in
    pub sweep: usize,
    pub source_name: String,
    pub message: String,
}

impl Contribution {
    /// The line written to the controller's output: `[<name>] <message>`.
    pub fn trace_line(&self) -> String {
        format!("[{}] {}", self.source_name, self.message)
    }
}

/// A loop check that read a different status than the check before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// 0-based index of the loop check; check `n` runs before sweep `n + 1`
    pub check: usize,
    pub status: Status,
}

/// What a controller run did, for callers and tests.
///
/// Only status changes are stored, so a long run keeps a report of constant
/// size apart from its contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of sweeps started
    pub sweeps: usize,
    pub contributions: Vec<Contribution>,
    pub status_changes: Vec<StatusChange>,
}

impl RunReport {
    pub(crate) fn record_status(&mut self, check: usize, status: Status) {
        if self.status_changes.last().map(|change| change.status) != Some(status) {
            self.status_changes.push(StatusChange { check, status });
        }
    }

    /// Status read by loop check `check`.
    pub fn status_at_check(&self, check: usize) -> Status {
        self.status_changes
            .iter()
            .rev()
            .find(|change| change.check <= check)
            .map(|change| change.status)
            .unwrap_or_default()
    }

    /// Status read by every loop check of a finished run, including the final
    /// one that ended it.
    pub fn status_checks(&self) -> Vec<Status> {
        (0..=self.sweeps)
            .map(|check| self.status_at_check(check))
            .collect()
    }

    pub fn trace_lines(&self) -> Vec<String> {
        self.contributions.iter().map(Contribution::trace_line).collect()
    }

    /// Names of the sources that contributed, in order.
    pub fn contributors(&self) -> Vec<&str> {
        self.contributions
            .iter()
            .map(|c| c.source_name.as_str())
            .collect()
    }
}
