use serde::{Deserialize, Serialize};

/// A citable rule passage.
///
/// Dedup identity is `(source_heading, page_number, book_name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSource {
    pub id: String,
    pub title: String,
    pub source_heading: String,
    pub book_name: String,
    pub page_number: Option<u32>,
    pub content: String,
}

/// A citable card entry.
///
/// Dedup identity is `(card_name, card_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSource {
    pub id: String,
    pub title: String,
    pub card_id: Option<String>,
    pub card_name: String,
    pub content: String,
}

/// A formatted, citable unit derived from a retrieval hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Rule(RuleSource),
    Card(CardSource),
}

impl Source {
    pub fn id(&self) -> &str {
        match self {
            Source::Rule(r) => &r.id,
            Source::Card(c) => &c.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Source::Rule(r) => &r.title,
            Source::Card(c) => &c.title,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Source::Rule(r) => &r.content,
            Source::Card(c) => &c.content,
        }
    }
}

/// The externally visible result of the pipeline, consumed downstream for
/// citation display and prompt composition.
///
/// An empty result (count 0) is a legitimate outcome, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSources {
    pub count: usize,
    pub sources: Vec<Source>,
}

impl MessageSources {
    pub fn new(sources: Vec<Source>) -> Self {
        Self {
            count: sources.len(),
            sources,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}
