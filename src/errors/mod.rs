// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod blackboard;
mod config;
mod execution;

pub use blackboard::BlackboardError;
pub use config::ConfigError;
pub use execution::ExecutionError;
