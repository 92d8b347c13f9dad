//! The classification rule table.
//!
//! Declaration order is the documented priority order. Rules are independent
//! predicates, not an if/else chain; every matching rule contributes its
//! label.

use meeple_core::QueryType;

/// One classification rule: `label` is added when `matches` fires on the
/// lowercased query.
pub struct ClassifyRule {
    pub name: &'static str,
    pub label: QueryType,
    pub matches: fn(&str) -> bool,
}

lazy_regex!(RE_ENUM_WHAT_ARE, r"what are the (5|five|different|types|kinds)");
lazy_regex!(RE_VS_WORD, r"\bvs\.?\b");

pub static CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        name: "resource",
        label: QueryType::Resource,
        matches: |q| contains_any(q, &["resource", "token"]),
    },
    ClassifyRule {
        name: "card",
        label: QueryType::Card,
        matches: |q| contains_any(q, &["card", "deck", "hand"]),
    },
    ClassifyRule {
        name: "rule",
        label: QueryType::Rule,
        matches: |q| contains_any(q, &["rule", "how do i"]),
    },
    ClassifyRule {
        name: "setup",
        label: QueryType::Setup,
        matches: |q| contains_any(q, &["setup", "start"]),
    },
    ClassifyRule {
        name: "victory",
        label: QueryType::Victory,
        matches: |q| contains_any(q, &["win", "victory", "points"]),
    },
    ClassifyRule {
        name: "action",
        label: QueryType::Action,
        matches: |q| contains_any(q, &["action", "move", "turn"]),
    },
    ClassifyRule {
        name: "component",
        label: QueryType::Component,
        matches: |q| contains_any(q, &["piece", "component", "tile"]),
    },
    ClassifyRule {
        name: "enumeration",
        label: QueryType::Enumeration,
        matches: |q| {
            contains_any(q, &["how many", "list all", "what are all", "count"])
                || matched(&RE_ENUM_WHAT_ARE, q)
        },
    },
    ClassifyRule {
        name: "comparison",
        label: QueryType::Comparison,
        matches: |q| {
            contains_any(q, &["difference between", "versus", "instead of"])
                || matched(&RE_VS_WORD, q)
        },
    },
    ClassifyRule {
        name: "interaction",
        label: QueryType::Interaction,
        matches: |q| {
            contains_any(q, &["interact", "work with", "combine"])
                && contains_any(q, &[" and ", " with "])
        },
    },
    ClassifyRule {
        name: "reasoning",
        label: QueryType::Reasoning,
        matches: |q| {
            contains_any(
                q,
                &["why", "when would", "if i", "what happens if", "explain how", "scenario"],
            )
        },
    },
];

fn contains_any(query: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| query.contains(n))
}

fn matched(re: &std::sync::LazyLock<Option<regex::Regex>>, query: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(query))
}
