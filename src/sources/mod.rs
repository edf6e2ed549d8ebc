// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in knowledge sources.
//!
//! Together they form a three-stage pipeline that never calls itself a
//! pipeline: each stage only inspects the blackboard for the keys it needs.
//!
//! | Source | Ready when | Effect |
//! |---|---|---|
//! | [`InputSource`] | `input` absent | writes `input = (9, 6)` |
//! | [`SumSource`] | `input` present, `sum` absent | writes `sum = a + b` |
//! | [`OutputSource`] | `sum` present, status incomplete | reports `sum`, marks complete |

mod input;
mod output;
mod sum;

pub use input::InputSource;
pub use output::OutputSource;
pub use sum::SumSource;

use std::sync::Arc;

use crate::config::consts::{INPUT_SOURCE_NAME, OUTPUT_SOURCE_NAME, SUM_SOURCE_NAME};
use crate::config::SourceList;
use crate::traits::KnowledgeSource;

/// The three built-in sources in their natural order: Input, Sum, Output.
pub fn default_sources() -> SourceList {
    let sources: Vec<Arc<dyn KnowledgeSource>> = vec![
        Arc::new(InputSource::new(INPUT_SOURCE_NAME)),
        Arc::new(SumSource::new(SUM_SOURCE_NAME)),
        Arc::new(OutputSource::new(OUTPUT_SOURCE_NAME)),
    ];
    SourceList::from(sources)
}
