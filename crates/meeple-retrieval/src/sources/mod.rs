//! Source formatting: raw retrieval hits → typed, deduplicated, ranked
//! citation records.
//!
//! Never fails: a hit whose type or identity cannot be confidently derived
//! falls back to generic placeholders rather than being dropped.

mod book_names;
mod dedup;

use meeple_core::constants::{GENERIC_CARD_NAME, GENERIC_HEADING};
use meeple_core::models::{CardSource, RuleSource, SearchHit, Source};
use serde_json::Value;

/// Content first lines shorter than this read as card names, not prose.
const CARD_NAME_MAX_LEN: usize = 50;

lazy_regex!(
    RE_CARD_ID,
    r"\(ID:\s*([A-Za-z0-9-]+)\)|\bID:\s*([A-Za-z0-9-]+)|\b(ARCS-[A-Za-z0-9]+)\b"
);

/// Convert raw hits into deduplicated, sorted citation sources.
pub fn format(hits: &[SearchHit]) -> Vec<Source> {
    let candidates: Vec<Source> = hits.iter().map(to_source).collect();
    sort_sources(dedup::dedup_sources(candidates))
}

fn to_source(hit: &SearchHit) -> Source {
    match try_card(hit) {
        Some(card) => Source::Card(card),
        None => Source::Rule(rule_source(hit)),
    }
}

/// A hit is a card when its metadata says so, or — failing that — when its
/// content reads like a card: a short name-like first line, or an embedded
/// card-id pattern.
fn try_card(hit: &SearchHit) -> Option<CardSource> {
    let meta_card = hit.meta_str("card_id").is_some()
        || hit.meta_str("card_name").is_some()
        || hit.meta_str("content_type") == Some("card");

    let first_line = hit.content.lines().next().unwrap_or("").trim();
    let content_card = (!first_line.is_empty() && first_line.len() < CARD_NAME_MAX_LEN)
        || card_id_in(&hit.content).is_some();

    if !meta_card && !content_card {
        return None;
    }

    let card_name = hit
        .meta_str("card_name")
        .map(str::to_string)
        .or_else(|| {
            let name = first_line.trim_start_matches(['#', ' ']).trim();
            (!name.is_empty() && name.len() < CARD_NAME_MAX_LEN).then(|| name.to_string())
        })
        .unwrap_or_else(|| GENERIC_CARD_NAME.to_string());

    let card_id = hit
        .meta_str("card_id")
        .map(str::to_string)
        .or_else(|| card_id_in(&hit.content));

    Some(CardSource {
        id: hit.id.clone(),
        title: card_name.clone(),
        card_id,
        card_name,
        content: hit.content.clone(),
    })
}

fn rule_source(hit: &SearchHit) -> RuleSource {
    let heading = hit.heading.trim();
    let source_heading = if heading.is_empty() {
        GENERIC_HEADING.to_string()
    } else {
        heading.to_string()
    };

    RuleSource {
        id: hit.id.clone(),
        title: source_heading.clone(),
        source_heading,
        book_name: book_names::book_name(hit.meta_str("h1_heading")),
        page_number: page_number(hit),
        content: hit.content.clone(),
    }
}

fn card_id_in(content: &str) -> Option<String> {
    let re = RE_CARD_ID.as_ref()?;
    let caps = re.captures(content)?;
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().to_string())
        .next()
}

fn page_number(hit: &SearchHit) -> Option<u32> {
    let value = hit
        .metadata
        .get("page_number")
        .or_else(|| hit.metadata.get("page"))?;
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Default citation order: rule sources first (ascending page, missing page
/// last, ties by heading), then cards alphabetically by name.
fn sort_sources(mut sources: Vec<Source>) -> Vec<Source> {
    sources.sort_by_key(|s| match s {
        Source::Rule(r) => (
            0u8,
            r.page_number.unwrap_or(u32::MAX),
            r.source_heading.to_lowercase(),
        ),
        Source::Card(c) => (1u8, 0, c.card_name.to_lowercase()),
    });
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeple_core::models::Similarity;
    use serde_json::Map;

    fn hit(id: &str, content: &str, heading: &str, meta: &[(&str, Value)]) -> SearchHit {
        let mut metadata = Map::new();
        for (k, v) in meta {
            metadata.insert(k.to_string(), v.clone());
        }
        SearchHit {
            id: id.to_string(),
            content: content.to_string(),
            metadata,
            source_file: "corpus.md".to_string(),
            heading: heading.to_string(),
            similarity: Similarity::new(0.8),
        }
    }

    #[test]
    fn metadata_marks_a_card() {
        let sources = format(&[hit(
            "c1",
            "A long first line of card rules text that runs well past the cutoff for names.",
            "",
            &[("content_type", Value::from("card")), ("card_name", Value::from("Empath"))],
        )]);
        match &sources[0] {
            Source::Card(c) => {
                assert_eq!(c.card_name, "Empath");
                assert_eq!(c.card_id, None);
            }
            _ => panic!("expected card"),
        }
    }

    #[test]
    fn content_id_pattern_marks_a_card() {
        let sources = format(&[hit(
            "c2",
            "Seeker Torpedoes (ID: ARCS-12)\nPre-arm: gain one weapon token.",
            "",
            &[],
        )]);
        match &sources[0] {
            Source::Card(c) => {
                assert_eq!(c.card_name, "Seeker Torpedoes (ID: ARCS-12)");
                assert_eq!(c.card_id.as_deref(), Some("ARCS-12"));
            }
            _ => panic!("expected card"),
        }
    }

    #[test]
    fn long_prose_with_heading_is_a_rule() {
        let sources = format(&[hit(
            "r1",
            "When a player declares a raid, the defender may reveal intercepts before dice are assigned to the battle pool.",
            "Raids",
            &[("h1_heading", Value::from("arcs_rules_base_game")), ("page_number", Value::from(12))],
        )]);
        match &sources[0] {
            Source::Rule(r) => {
                assert_eq!(r.source_heading, "Raids");
                assert_eq!(r.book_name, "Base Game Rules");
                assert_eq!(r.page_number, Some(12));
            }
            _ => panic!("expected rule"),
        }
    }

    #[test]
    fn missing_heading_falls_back_to_generic() {
        let sources = format(&[hit(
            "r2",
            "An unattributed passage of rules prose that is clearly longer than any plausible card name would ever be.",
            "",
            &[],
        )]);
        match &sources[0] {
            Source::Rule(r) => {
                assert_eq!(r.source_heading, GENERIC_HEADING);
                assert_eq!(r.book_name, "Rulebook");
                assert_eq!(r.page_number, None);
            }
            _ => panic!("expected rule"),
        }
    }

    #[test]
    fn page_number_parses_from_string_metadata() {
        let sources = format(&[hit(
            "r3",
            "Outrage removes the matching resource from your court and returns agents ahead of scoring.",
            "Outrage",
            &[("page", Value::from("7"))],
        )]);
        match &sources[0] {
            Source::Rule(r) => assert_eq!(r.page_number, Some(7)),
            _ => panic!("expected rule"),
        }
    }

    #[test]
    fn output_orders_rules_by_page_then_cards_by_name() {
        let sources = format(&[
            hit("c1", "x", "", &[("card_name", Value::from("Zealots"))]),
            hit(
                "r-none",
                "A rules passage without any page metadata attached, long enough to stay a rule.",
                "Courts",
                &[],
            ),
            hit(
                "r2",
                "Another rules passage that is long enough to avoid the short-first-line card check.",
                "Battles",
                &[("page_number", Value::from(9))],
            ),
            hit("c0", "y", "", &[("card_name", Value::from("Empath"))]),
            hit(
                "r1",
                "Yet another sufficiently long rules passage for the formatter to treat as prose.",
                "Actions",
                &[("page_number", Value::from(4))],
            ),
        ]);

        let order: Vec<&str> = sources.iter().map(|s| s.title()).collect();
        assert_eq!(order, ["Actions", "Battles", "Courts", "Empath", "Zealots"]);
    }

    #[test]
    fn formatter_never_drops_hits() {
        let sources = format(&[hit("weird", "", "", &[])]);
        assert_eq!(sources.len(), 1);
    }
}
