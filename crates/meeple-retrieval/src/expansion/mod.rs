//! Query expansion: alternate search strings to raise retrieval recall.
//!
//! The first element of an expansion is always the original query. Variants
//! are append-only and never deduplicated here; the engine deduplicates by
//! hit id after fan-out.

pub mod subjects;

use meeple_core::QueryType;

/// Domain vocabulary appended per label.
const RESOURCE_TERMS: &str = "tokens spend prelude action material fuel weapon relic psionic";
const CARD_TERMS: &str = "play hand deck discard action effect text abilities";
const VICTORY_TERMS: &str = "victory points scoring objective ambition win condition";
const ACTION_TERMS: &str = "turn move build actions allowed sequence";
const COMPONENT_LIST_TERMS: &str = "pieces components complete list all types";

lazy_regex!(RE_EXPLICIT_COUNT, r"how many|number of|all (?:the )?(?:piece|component|tile)");

/// Produce the ordered expanded-query list for a classified question.
///
/// `expand(q, &[])` returns exactly `[q]`.
pub fn expand(query: &str, types: &[QueryType]) -> Vec<String> {
    let mut out = vec![query.to_string()];
    let lower = query.to_lowercase();

    for ty in types {
        match ty {
            QueryType::Resource => out.push(format!("{query} {RESOURCE_TERMS}")),
            QueryType::Card => out.push(format!("{query} {CARD_TERMS}")),
            QueryType::Victory => out.push(format!("{query} {VICTORY_TERMS}")),
            QueryType::Action => out.push(format!("{query} {ACTION_TERMS}")),
            QueryType::Component => {
                if RE_EXPLICIT_COUNT.as_ref().is_some_and(|re| re.is_match(&lower)) {
                    out.push(format!("{query} {COMPONENT_LIST_TERMS}"));
                }
            }
            QueryType::Enumeration => {
                if let Some(subject) = subjects::enumeration_subject(&lower) {
                    out.push(format!("{subject} list all types"));
                    out.push(format!("{subject} count total number"));
                }
                out.push(format!("{query} complete list comprehensive all variants"));
            }
            QueryType::Comparison => {
                if let Some((left, right)) = subjects::comparison_terms(&lower) {
                    out.push(format!("{left} rules mechanics"));
                    out.push(format!("{right} rules mechanics"));
                    out.push(format!("{left} {right} comparison differences"));
                }
            }
            QueryType::Interaction => {
                out.push(format!("{query} rules combination interaction effect together"));
                out.push(format!("{query} conflict precedence priority order"));
            }
            QueryType::Reasoning => {
                out.push(format!("{query} explanation rationale scenario example"));
                if lower.contains("why") {
                    out.push(format!("{query} reason purpose design intention rules"));
                }
            }
            QueryType::Rule | QueryType::Setup | QueryType::General => {}
        }
    }

    out
}
