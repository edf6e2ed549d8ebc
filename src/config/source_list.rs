// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::KnowledgeSource;
use std::sync::Arc;

/// The ordered, read-only sequence of knowledge sources a controller sweeps.
///
/// Sources are wrapped in `Arc<dyn KnowledgeSource>` so the same list can be
/// handed to several controllers (or kept by the caller for inspection)
/// without cloning the sources themselves. Order is significant: a sweep
/// visits sources front to back.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use the_blackboard::config::SourceList;
/// use the_blackboard::sources::{InputSource, OutputSource, SumSource};
///
/// let mut sources = SourceList::new();
/// sources.push(Arc::new(InputSource::new("Input")));
/// sources.push(Arc::new(SumSource::new("Sum")));
/// sources.push(Arc::new(OutputSource::new("Output")));
///
/// assert_eq!(sources.len(), 3);
/// assert_eq!(sources.names(), vec!["Input", "Sum", "Output"]);
/// ```
#[derive(Clone, Default)]
pub struct SourceList(pub Vec<Arc<dyn KnowledgeSource>>);

impl SourceList {
    /// Create a new empty source list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a source to the end of the sweep order
    pub fn push(&mut self, source: Arc<dyn KnowledgeSource>) {
        self.0.push(source);
    }

    /// Iterate over the sources in sweep order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn KnowledgeSource>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Source names in sweep order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|source| source.name()).collect()
    }
}

impl std::fmt::Debug for SourceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceList")
            .field("source_count", &self.0.len())
            .field("source_names", &self.names())
            .finish()
    }
}

impl From<Vec<Arc<dyn KnowledgeSource>>> for SourceList {
    fn from(sources: Vec<Arc<dyn KnowledgeSource>>) -> Self {
        Self(sources)
    }
}

impl From<SourceList> for Vec<Arc<dyn KnowledgeSource>> {
    fn from(sources: SourceList) -> Self {
        sources.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{InputSource, SumSource};

    #[test]
    fn test_preserves_insertion_order() {
        let sources = SourceList::from(vec![
            Arc::new(SumSource::new("second")) as Arc<dyn KnowledgeSource>,
            Arc::new(InputSource::new("first")) as Arc<dyn KnowledgeSource>,
        ]);

        assert_eq!(sources.names(), vec!["second", "first"]);
    }

    #[test]
    fn test_clone_shares_sources() {
        let mut sources = SourceList::new();
        let input: Arc<dyn KnowledgeSource> = Arc::new(InputSource::new("Input"));
        sources.push(input.clone());

        let copy = sources.clone();
        assert!(Arc::ptr_eq(&copy.0[0], &input));
        assert_eq!(Arc::strong_count(&input), 3);
    }

    #[test]
    fn test_debug_lists_names() {
        let mut sources = SourceList::new();
        sources.push(Arc::new(InputSource::new("Input")));

        let debug = format!("{:?}", sources);
        assert!(debug.contains("source_count: 1"));
        assert!(debug.contains("Input"));
    }
}
