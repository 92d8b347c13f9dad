use serde::{Deserialize, Serialize};

/// One turn of caller-supplied conversation history.
///
/// History arrives oldest first, already truncated by the caller (typically
/// to the last handful of turns), and is immutable for the duration of one
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub content: String,
    pub is_user: bool,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: true,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: false,
        }
    }
}
