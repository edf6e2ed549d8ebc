// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic logging
//! in the crate. Message types follow a struct-based pattern with a `Display`
//! implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep wording of log lines in one place
//! * Provide consistent, structured logging output
//!
//! Diagnostics are not the same thing as the `[name] message` trace lines the
//! controller writes for each contribution. Those are program output and go to
//! the controller's output sink; everything here goes through `tracing` to
//! stderr.
//!
//! # Usage
//!
//! ```rust
//! use the_blackboard::observability::messages::{controller::SweepStarted, StructuredLog};
//! use the_blackboard::blackboard::Status;
//!
//! let msg = SweepStarted {
//!     sweep: 1,
//!     status: Status::Incomplete,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use crate::config::consts::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`],
/// and writes to stderr. Installing twice is harmless: the second call leaves
/// the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
