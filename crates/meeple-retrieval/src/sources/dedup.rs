//! Source deduplication with ordered quality tie-breaks.

use std::collections::HashMap;

use meeple_core::constants::GENERIC_HEADING;
use meeple_core::models::{CardSource, RuleSource, Source};

/// Case-normalized dedup identity per source kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IdentityKey {
    Rule {
        heading: String,
        page: Option<u32>,
        book: String,
    },
    Card {
        name: String,
        id: Option<String>,
    },
}

fn identity(source: &Source) -> IdentityKey {
    match source {
        Source::Rule(r) => IdentityKey::Rule {
            heading: r.source_heading.to_lowercase(),
            page: r.page_number,
            book: r.book_name.to_lowercase(),
        },
        Source::Card(c) => IdentityKey::Card {
            name: c.card_name.to_lowercase(),
            id: c.card_id.as_ref().map(|s| s.to_lowercase()),
        },
    }
}

/// Collapse candidates sharing an identity key, then additionally collapse
/// rule sources sharing a case-normalized heading (catching near-duplicates
/// that differ only by page or book).
pub fn dedup_sources(candidates: Vec<Source>) -> Vec<Source> {
    let mut order: Vec<IdentityKey> = Vec::new();
    let mut best: HashMap<IdentityKey, Source> = HashMap::new();

    for candidate in candidates {
        let key = identity(&candidate);
        match best.remove(&key) {
            Some(existing) => {
                best.insert(key, better(existing, candidate));
            }
            None => {
                order.push(key.clone());
                best.insert(key, candidate);
            }
        }
    }

    let keyed: Vec<Source> = order.into_iter().filter_map(|k| best.remove(&k)).collect();
    collapse_rule_headings(keyed)
}

fn collapse_rule_headings(sources: Vec<Source>) -> Vec<Source> {
    let mut heading_order: Vec<String> = Vec::new();
    let mut best_rules: HashMap<String, RuleSource> = HashMap::new();
    let mut out: Vec<Source> = Vec::new();

    for source in sources {
        match source {
            Source::Rule(rule) => {
                let key = rule.source_heading.to_lowercase();
                match best_rules.remove(&key) {
                    Some(existing) => {
                        best_rules.insert(key, better_rule(existing, rule));
                    }
                    None => {
                        heading_order.push(key.clone());
                        best_rules.insert(key, rule);
                    }
                }
            }
            card => out.push(card),
        }
    }

    let mut result: Vec<Source> = heading_order
        .into_iter()
        .filter_map(|k| best_rules.remove(&k).map(Source::Rule))
        .collect();
    result.append(&mut out);
    result
}

/// Keep the higher-quality of two colliding candidates. Mismatched kinds
/// cannot collide on a key; the first candidate wins in that case.
fn better(a: Source, b: Source) -> Source {
    match (a, b) {
        (Source::Rule(a), Source::Rule(b)) => Source::Rule(better_rule(a, b)),
        (Source::Card(a), Source::Card(b)) => Source::Card(better_card(a, b)),
        (a, _) => a,
    }
}

/// Ordered tie-break for rules: page presence, then a specific heading over
/// the generic one, then the longer title. Earlier candidate wins exact ties.
fn better_rule(a: RuleSource, b: RuleSource) -> RuleSource {
    match (a.page_number.is_some(), b.page_number.is_some()) {
        (true, false) => return a,
        (false, true) => return b,
        _ => {}
    }

    let a_generic = a.source_heading.eq_ignore_ascii_case(GENERIC_HEADING);
    let b_generic = b.source_heading.eq_ignore_ascii_case(GENERIC_HEADING);
    match (a_generic, b_generic) {
        (false, true) => return a,
        (true, false) => return b,
        _ => {}
    }

    if b.title.len() > a.title.len() {
        b
    } else {
        a
    }
}

/// Ordered tie-break for cards: id presence, then the longer name. Earlier
/// candidate wins exact ties.
fn better_card(a: CardSource, b: CardSource) -> CardSource {
    match (a.card_id.is_some(), b.card_id.is_some()) {
        (true, false) => return a,
        (false, true) => return b,
        _ => {}
    }

    if b.card_name.len() > a.card_name.len() {
        b
    } else {
        a
    }
}
