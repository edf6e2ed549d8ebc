// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::BlackboardError;

/// Errors that stop a controller run before the blackboard reaches completion.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// A knowledge source failed while contributing.
    #[error("Knowledge source '{source_name}' failed to contribute: {source}")]
    ContributionFailed {
        source_name: String,
        #[source]
        source: BlackboardError,
    },

    /// The configured sweep bound was reached without the blackboard completing.
    #[error("Blackboard still incomplete after {max_sweeps} sweeps")]
    SweepLimitExceeded { max_sweeps: usize },

    /// Writing a trace line to the output sink failed.
    #[error("Failed to write trace output: {0}")]
    TraceOutput(#[from] std::io::Error),
}
