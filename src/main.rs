// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use the_blackboard::blackboard::Blackboard;
use the_blackboard::engine::Controller;
use the_blackboard::observability::init_tracing;
use the_blackboard::sources::default_sources;

/// Run the three built-in sources over a fresh blackboard.
///
/// Trace lines go to stdout; diagnostics go to stderr and are controlled with
/// `RUST_LOG` (e.g. `RUST_LOG=the_blackboard=debug`).
fn main() -> anyhow::Result<()> {
    init_tracing();

    let blackboard = Blackboard::new();
    let sources = default_sources();

    let mut controller = Controller::new(blackboard, sources);
    controller.run().context("blackboard run failed")?;

    Ok(())
}
