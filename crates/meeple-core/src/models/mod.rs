mod conversation;
mod entity;
mod query_type;
mod search_hit;
mod source;

pub use conversation::ConversationTurn;
pub use entity::{Entity, EntityKind};
pub use query_type::QueryType;
pub use search_hit::{SearchHit, Similarity};
pub use source::{CardSource, MessageSources, RuleSource, Source};
