//! Conversation entity mining.
//!
//! Assistant turns yield list items and emphasized spans; user turns yield
//! question subjects and capitalized proper-noun phrases. Salience weights
//! reflect how reliably each span names the topic under discussion.

use meeple_core::{ConversationTurn, Entity, EntityKind};

lazy_regex!(RE_LIST_ITEM, r"(?m)^\s*(?:[-*+]|\d+[.)])\s+(.+)$");
lazy_regex!(RE_EMPHASIZED, r"\*\*([^*\n]+)\*\*|\*([^*\n]+)\*|__([^_\n]+)__|_([^_\n]+)_");
lazy_regex!(
    RE_WHAT_IS,
    r"(?i)\bwhat\s+(?:is|are)\s+(?:the\s+|a\s+|an\s+)?([^?.!]+)"
);
lazy_regex!(
    RE_HOW_WORK,
    r"(?i)\bhow\s+do(?:es)?\s+(?:the\s+|a\s+|an\s+)?(.+?)\s+work"
);
lazy_regex!(RE_PROPER_NOUN, r"\b([A-Z][a-z]+(?: [A-Z][a-z]+)+)\b");

/// First words that disqualify a capitalized phrase from being a proper noun.
const PROPER_NOUN_STOPWORDS: &[&str] = &[
    "The", "This", "That", "What", "How", "When", "Where", "Why", "Which", "Who",
];

/// Mine salient entities out of a transcript, oldest turn first.
///
/// The result is deduplicated case-insensitively; survivors keep the maximum
/// salience and latest position seen.
pub fn extract_from_history(history: &[ConversationTurn]) -> Vec<Entity> {
    let mut found = Vec::new();

    for (position, turn) in history.iter().enumerate() {
        if turn.is_user {
            extract_from_user_turn(&turn.content, position, &mut found);
        } else {
            extract_from_assistant_turn(&turn.content, position, &mut found);
        }
    }

    Entity::merge(found)
}

/// Extract the subject of a "what is/are X" or "how does X work" question
/// from a single user message. Shared with follow-up reformulation.
pub(crate) fn question_subject(content: &str) -> Option<String> {
    if let Some(re) = RE_WHAT_IS.as_ref() {
        if let Some(caps) = re.captures(content) {
            let subject = caps.get(1)?.as_str().trim();
            if !subject.is_empty() {
                return Some(subject.to_string());
            }
        }
    }
    if let Some(re) = RE_HOW_WORK.as_ref() {
        if let Some(caps) = re.captures(content) {
            let subject = caps.get(1)?.as_str().trim();
            if !subject.is_empty() {
                return Some(subject.to_string());
            }
        }
    }
    None
}

fn extract_from_assistant_turn(content: &str, position: usize, out: &mut Vec<Entity>) {
    if let Some(re) = RE_LIST_ITEM.as_ref() {
        for caps in re.captures_iter(content) {
            if let Some(item) = caps.get(1) {
                let text = clean_list_item(item.as_str());
                if !text.is_empty() {
                    out.push(Entity::new(text, EntityKind::ListItem, position, 0.8));
                }
            }
        }
    }

    if let Some(re) = RE_EMPHASIZED.as_ref() {
        for caps in re.captures_iter(content) {
            let span = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().trim())
                .find(|s| !s.is_empty());
            if let Some(text) = span {
                out.push(Entity::new(text, EntityKind::Emphasized, position, 0.9));
            }
        }
    }
}

fn extract_from_user_turn(content: &str, position: usize, out: &mut Vec<Entity>) {
    if let Some(re) = RE_WHAT_IS.as_ref() {
        if let Some(caps) = re.captures(content) {
            if let Some(subject) = caps.get(1) {
                let text = subject.as_str().trim();
                if !text.is_empty() {
                    out.push(Entity::new(text, EntityKind::QuestionSubject, position, 1.0));
                }
            }
        }
    }

    if let Some(re) = RE_HOW_WORK.as_ref() {
        if let Some(caps) = re.captures(content) {
            if let Some(subject) = caps.get(1) {
                let text = subject.as_str().trim();
                if !text.is_empty() {
                    out.push(Entity::new(text, EntityKind::QuestionSubject, position, 0.9));
                }
            }
        }
    }

    if let Some(re) = RE_PROPER_NOUN.as_ref() {
        for caps in re.captures_iter(content) {
            if let Some(phrase) = caps.get(1) {
                let text = phrase.as_str();
                let first = text.split_whitespace().next().unwrap_or("");
                if PROPER_NOUN_STOPWORDS.contains(&first) {
                    continue;
                }
                out.push(Entity::new(text, EntityKind::ProperNoun, position, 0.7));
            }
        }
    }
}

/// Reduce a markdown list item to its lead phrase: the text before any
/// colon, with emphasis markers stripped.
fn clean_list_item(item: &str) -> String {
    let lead = item.split(':').next().unwrap_or(item);
    lead.trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .to_string()
}
