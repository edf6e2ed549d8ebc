// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod blackboard;    // shared workspace
pub mod config;        // controller options + loader
pub mod engine;        // the control loop
pub mod errors;        // error handling
pub mod observability;
pub mod sources;       // built-in knowledge sources
pub mod traits;        // unified abstractions
