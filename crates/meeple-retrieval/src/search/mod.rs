//! Search-phase plumbing: failure-tolerant collaborator calls and
//! insertion-ordered deduplication by hit id.

pub mod cache;
pub mod keyterms;

use std::collections::HashSet;

use meeple_core::models::SearchHit;
use meeple_core::traits::IVectorSearch;
use tracing::warn;

pub use cache::SearchCache;

/// Call the collaborator once, downgrading failure to zero hits.
///
/// A transport or authentication error must never abort the surrounding
/// phase; it is logged and the phase proceeds with what it has.
pub fn safe_search(
    client: &dyn IVectorSearch,
    cache: Option<&SearchCache>,
    query: &str,
) -> Vec<SearchHit> {
    if let Some(cache) = cache {
        if let Some(hits) = cache.get(query) {
            return hits;
        }
    }

    match client.search(query) {
        Ok(hits) => {
            if let Some(cache) = cache {
                cache.insert(query, hits.clone());
            }
            hits
        }
        Err(error) => {
            warn!(%error, query, "search call failed; treating as zero hits");
            Vec::new()
        }
    }
}

/// Sort hits by similarity descending. Order-independent with respect to the
/// accumulation that produced them.
pub fn sort_by_similarity(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        b.similarity
            .value()
            .partial_cmp(&a.similarity.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Accumulates hits across retrieval phases, deduplicating by id.
///
/// First occurrence wins and insertion order is preserved, except for
/// [`HitAccumulator::prepend`], which front-loads refine-phase hits.
#[derive(Debug, Default)]
pub struct HitAccumulator {
    hits: Vec<SearchHit>,
    seen: HashSet<String>,
}

impl HitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hit unless its id has been seen. Returns whether it was kept.
    pub fn push(&mut self, hit: SearchHit) -> bool {
        if self.seen.contains(&hit.id) {
            return false;
        }
        self.seen.insert(hit.id.clone());
        self.hits.push(hit);
        true
    }

    pub fn extend(&mut self, hits: Vec<SearchHit>) {
        for hit in hits {
            self.push(hit);
        }
    }

    /// Insert unseen hits at the front, ahead of everything accumulated so
    /// far. Used by the refine phase for focused enumeration results.
    pub fn prepend(&mut self, hits: Vec<SearchHit>) {
        let fresh: Vec<SearchHit> = hits
            .into_iter()
            .filter(|h| !self.seen.contains(&h.id))
            .collect();
        for hit in &fresh {
            self.seen.insert(hit.id.clone());
        }
        self.hits.splice(0..0, fresh);
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// True when every accumulated hit scores below `floor`.
    /// Vacuously true for an empty accumulator.
    pub fn all_below(&self, floor: f64) -> bool {
        self.hits.iter().all(|h| h.similarity.value() < floor)
    }

    /// Consume the accumulator, returning hits sorted by similarity
    /// descending.
    pub fn into_ranked(self) -> Vec<SearchHit> {
        let mut hits = self.hits;
        sort_by_similarity(&mut hits);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeple_core::models::Similarity;

    fn hit(id: &str, similarity: f64) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            content: format!("passage {id}"),
            metadata: serde_json::Map::new(),
            source_file: "rules.md".to_string(),
            heading: format!("Heading {id}"),
            similarity: Similarity::new(similarity),
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let mut acc = HitAccumulator::new();
        acc.extend(vec![hit("a", 0.4), hit("b", 0.5)]);
        acc.extend(vec![hit("a", 0.9)]);
        assert_eq!(acc.len(), 2);
        let ranked = acc.into_ranked();
        let a = ranked.iter().find(|h| h.id == "a").unwrap();
        assert_eq!(a.similarity.value(), 0.4);
    }

    #[test]
    fn prepend_front_loads_unseen_hits() {
        let mut acc = HitAccumulator::new();
        acc.extend(vec![hit("a", 0.4)]);
        acc.prepend(vec![hit("b", 0.3), hit("a", 0.9)]);
        assert_eq!(acc.len(), 2);
        // b leads the pre-sort order, the duplicate a was dropped.
        let ranked = acc.into_ranked();
        assert_eq!(ranked[0].id, "a"); // 0.4 > 0.3 after the final sort
        assert_eq!(ranked[1].id, "b");
    }

    #[test]
    fn into_ranked_sorts_similarity_descending() {
        let mut acc = HitAccumulator::new();
        acc.extend(vec![hit("a", 0.3), hit("b", 0.9), hit("c", 0.6)]);
        let order: Vec<String> = acc.into_ranked().into_iter().map(|h| h.id).collect();
        assert_eq!(order, ["b", "c", "a"]);
    }

    #[test]
    fn all_below_is_vacuously_true_when_empty() {
        let acc = HitAccumulator::new();
        assert!(acc.all_below(0.55));
    }
}
