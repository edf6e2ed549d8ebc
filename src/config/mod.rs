// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod source_list;

pub mod consts;

pub use loader::{load_config, parse_config, ControllerOptions};
pub use source_list::SourceList;
