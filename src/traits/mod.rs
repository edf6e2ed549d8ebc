pub mod knowledge_source;

pub use crate::config::SourceList;
pub use knowledge_source::KnowledgeSource;
