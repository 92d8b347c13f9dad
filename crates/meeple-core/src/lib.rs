//! # meeple-core
//!
//! Foundation crate for the meeple rules-answering pipeline.
//! Defines all types, traits, errors, config, and constants.
//! The pipeline crate depends on this; nothing here performs I/O.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RetrievalConfig;
pub use errors::{MeepleError, MeepleResult, RetrievalError};
pub use models::{
    CardSource, ConversationTurn, Entity, EntityKind, MessageSources, QueryType, RuleSource,
    SearchHit, Similarity, Source,
};
pub use traits::IVectorSearch;
