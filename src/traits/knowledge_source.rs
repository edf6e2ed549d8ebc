// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::blackboard::Blackboard;
use crate::errors::BlackboardError;

/// An independent unit of domain logic that contributes to a [`Blackboard`].
///
/// Sources never call each other and do not know of each other's existence.
/// Everything they need to coordinate is read off the blackboard: a source
/// declares itself ready through [`can_contribute`](Self::can_contribute),
/// and the controller then hands it mutable access through
/// [`contribute`](Self::contribute).
///
/// Both methods are required, so a source that forgets either one is rejected
/// at compile time and the bare trait can never be scheduled on its own.
pub trait KnowledgeSource: Send + Sync {
    /// Human-readable name, used to tag trace output.
    fn name(&self) -> &str;

    /// Pure predicate over the current blackboard state.
    ///
    /// Must have no side effects and return the same answer until the
    /// blackboard itself changes.
    fn can_contribute(&self, blackboard: &Blackboard) -> bool;

    /// Perform exactly one unit of work and describe it.
    ///
    /// Reads the inputs the source needs, writes the key(s) it derives (or
    /// flips the status) and returns a one-line description of what it did.
    /// Only call this when [`can_contribute`](Self::can_contribute) last
    /// returned `true` for the same state; otherwise the source may fail with
    /// a [`BlackboardError`].
    fn contribute(&self, blackboard: &mut Blackboard) -> Result<String, BlackboardError>;
}
