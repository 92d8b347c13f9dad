//! Property tests for the retrieval pipeline's pure components.

use meeple_core::models::{Entity, EntityKind, QueryType, SearchHit, Similarity};
use meeple_retrieval::search::sort_by_similarity;
use meeple_retrieval::{expansion, intent};
use proptest::prelude::*;

fn hit_with(id: usize, similarity: f64) -> SearchHit {
    SearchHit {
        id: format!("h{id}"),
        content: String::new(),
        metadata: serde_json::Map::new(),
        source_file: String::new(),
        heading: String::new(),
        similarity: Similarity::new(similarity),
    }
}

proptest! {
    #[test]
    fn classification_is_total_and_non_empty(query in "\\PC*") {
        let labels = intent::classify(&query);
        prop_assert!(!labels.is_empty());
    }

    #[test]
    fn classification_is_deterministic(query in "\\PC{0,80}") {
        prop_assert_eq!(intent::classify(&query), intent::classify(&query));
    }

    #[test]
    fn expansion_with_no_types_is_identity(query in "\\PC{0,80}") {
        prop_assert_eq!(expansion::expand(&query, &[]), vec![query.clone()]);
    }

    #[test]
    fn expansion_head_is_always_the_original(query in "\\PC{0,80}") {
        for ty in QueryType::ALL {
            let expanded = expansion::expand(&query, &[ty]);
            prop_assert_eq!(&expanded[0], &query);
        }
    }

    #[test]
    fn entity_merge_keeps_max_salience_and_latest_position(
        s1 in 0.0f64..=1.0,
        s2 in 0.0f64..=1.0,
        p1 in 0usize..10,
        p2 in 0usize..10,
    ) {
        let merged = Entity::merge(vec![
            Entity::new("Fleet", EntityKind::ProperNoun, p1, s1),
            Entity::new("fleet", EntityKind::ListItem, p2, s2),
        ]);
        prop_assert_eq!(merged.len(), 1);
        prop_assert_eq!(merged[0].salience, s1.max(s2));
        prop_assert_eq!(merged[0].position, p1.max(p2));
    }

    #[test]
    fn similarity_is_always_clamped(raw in -10.0f64..10.0) {
        let s = Similarity::new(raw).value();
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn similarity_sort_is_monotonically_decreasing(
        sims in proptest::collection::vec(0.0f64..=1.0, 0..20)
    ) {
        let mut hits: Vec<SearchHit> = sims
            .iter()
            .enumerate()
            .map(|(i, &s)| hit_with(i, s))
            .collect();
        sort_by_similarity(&mut hits);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity.value() >= pair[1].similarity.value());
        }
    }
}
