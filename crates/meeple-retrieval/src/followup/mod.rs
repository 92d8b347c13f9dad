//! Follow-up detection and resolution.
//!
//! Detection is an ordered table of lexical patterns; any match marks the
//! question as a follow-up. Confidence is advisory metadata (summed category
//! weights, capped at 1.0) and never gates detection. Reformulation rewrites
//! the question into a self-contained query using entities mined from the
//! conversation history.

pub mod entities;

use std::sync::LazyLock;

use meeple_core::{ConversationTurn, Entity, EntityKind};
use regex::{NoExpand, Regex};

/// Outcome of follow-up resolution.
#[derive(Debug, Clone)]
pub struct FollowUpResolution {
    pub is_follow_up: bool,
    /// Present only when detection fired and history gave enough context.
    pub reformulated_query: Option<String>,
    /// Advisory confidence in [0, 1].
    pub confidence: f64,
}

struct FollowUpPattern {
    name: &'static str,
    regex: &'static LazyLock<Option<Regex>>,
    /// Contribution to the advisory confidence score.
    weight: f64,
}

lazy_regex!(RE_LEADING_CONJUNCTION, r"(?i)^(?:and|so|but)\b");
lazy_regex!(RE_ANAPHORIC_PRONOUN, r"(?i)\b(?:they|them|these|those|it|this)\b");
lazy_regex!(
    RE_WH_BE_DO_PRONOUN,
    r"(?i)^(?:what|who|how|why|when|where)\s+(?:is|are|do|does|did|was|were)\s+(?:they|them|these|those|it|this)\b"
);
lazy_regex!(
    RE_WHO_WHAT_IS_PRONOUN,
    r"(?i)^(?:who|what)\s+(?:are|is)\s+(?:they|these|those|it)\b"
);
lazy_regex!(RE_USED_FOR, r"(?i)\bused for\b");
lazy_regex!(RE_TELL_ME_MORE, r"(?i)\btell me more\b");
lazy_regex!(RE_EXAMPLES, r"(?i)(?:^|\s)(?:some |more |any )?examples?\s*\??$");
lazy_regex!(RE_OPENER, r"(?i)^(?:great|thanks|thank you|ok|okay)\b");

/// Detection patterns in priority order. Weights follow the category the
/// pattern belongs to; structural variants of the pronoun category carry no
/// extra weight of their own.
static FOLLOW_UP_PATTERNS: &[FollowUpPattern] = &[
    FollowUpPattern {
        name: "leading_conjunction",
        regex: &RE_LEADING_CONJUNCTION,
        weight: 0.3,
    },
    FollowUpPattern {
        name: "anaphoric_pronoun",
        regex: &RE_ANAPHORIC_PRONOUN,
        weight: 0.4,
    },
    FollowUpPattern {
        name: "wh_be_do_pronoun",
        regex: &RE_WH_BE_DO_PRONOUN,
        weight: 0.0,
    },
    FollowUpPattern {
        name: "who_what_is_pronoun",
        regex: &RE_WHO_WHAT_IS_PRONOUN,
        weight: 0.0,
    },
    FollowUpPattern {
        name: "used_for",
        regex: &RE_USED_FOR,
        weight: 0.2,
    },
    FollowUpPattern {
        name: "tell_me_more",
        regex: &RE_TELL_ME_MORE,
        weight: 0.0,
    },
    FollowUpPattern {
        name: "examples",
        regex: &RE_EXAMPLES,
        weight: 0.2,
    },
    FollowUpPattern {
        name: "conversational_opener",
        regex: &RE_OPENER,
        weight: 0.1,
    },
];

// Pronoun substitution: plural anaphora take priority over singular, and
// only the first pronoun found is replaced.
lazy_regex!(RE_PRONOUN_PLURAL, r"(?i)\b(?:they|them|these|those)\b");
lazy_regex!(RE_PRONOUN_SINGULAR, r"(?i)\b(?:it|this)\b");

/// Does this question read as an elliptical follow-up?
pub fn detect(query: &str) -> bool {
    FOLLOW_UP_PATTERNS
        .iter()
        .any(|p| p.regex.as_ref().is_some_and(|re| re.is_match(query)))
}

/// Advisory confidence: summed weights of matched categories, capped at 1.0.
pub fn confidence(query: &str) -> f64 {
    let sum: f64 = FOLLOW_UP_PATTERNS
        .iter()
        .filter(|p| p.regex.as_ref().is_some_and(|re| re.is_match(query)))
        .map(|p| p.weight)
        .sum();
    sum.min(1.0)
}

/// Detect and, when possible, reformulate a follow-up question.
///
/// Reformulation is attempted only when detection fired and the history has
/// at least two turns; otherwise the question passes through unchanged.
pub fn resolve(query: &str, history: &[ConversationTurn]) -> FollowUpResolution {
    let is_follow_up = detect(query);
    let confidence = confidence(query);

    if !is_follow_up || history.len() < 2 {
        return FollowUpResolution {
            is_follow_up,
            reformulated_query: None,
            confidence,
        };
    }

    let ranked = ranked_entities(history, query);
    let Some(top) = ranked.first() else {
        return FollowUpResolution {
            is_follow_up,
            reformulated_query: None,
            confidence,
        };
    };

    FollowUpResolution {
        is_follow_up,
        reformulated_query: Some(reformulate(query, top, history)),
        confidence,
    }
}

/// Extract entities from history and rank them against the current query:
/// `salience + 0.5·(verbatim in query) + 0.1·position + 0.3·(question subject)`,
/// descending. Shared with the engine's recovery phase.
pub fn ranked_entities(history: &[ConversationTurn], query: &str) -> Vec<Entity> {
    let lower_query = query.to_lowercase();
    let mut entities = entities::extract_from_history(history);
    entities.sort_by(|a, b| {
        entity_score(b, &lower_query)
            .partial_cmp(&entity_score(a, &lower_query))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entities
}

fn entity_score(entity: &Entity, lower_query: &str) -> f64 {
    let mut score = entity.salience;
    if lower_query.contains(&entity.text.to_lowercase()) {
        score += 0.5;
    }
    score += entity.position as f64 * 0.1;
    if entity.kind == EntityKind::QuestionSubject {
        score += 0.3;
    }
    score
}

/// Rewrite the question around the top-ranked entity: substitute the first
/// pronoun, or failing that append a contextual clause.
fn reformulate(query: &str, top: &Entity, history: &[ConversationTurn]) -> String {
    for re in [&RE_PRONOUN_PLURAL, &RE_PRONOUN_SINGULAR] {
        let Some(re) = re.as_ref() else { continue };
        if re.is_match(query) {
            return re.replace(query, NoExpand(&top.text)).into_owned();
        }
    }

    // No pronoun to substitute: anchor to the previous user question's
    // subject when one exists, otherwise to the top entity.
    if let Some(prev) = history.iter().rev().find(|t| t.is_user) {
        if let Some(subject) = entities::question_subject(&prev.content) {
            return format!("{query} regarding {subject}");
        }
    }
    format!("{query} about {}", top.text)
}
