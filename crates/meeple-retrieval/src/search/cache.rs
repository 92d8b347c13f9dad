//! Per-engine search-result cache.
//!
//! Memoizes collaborator responses by query string. The cache is constructed
//! by the caller and injected at engine construction; it is an explicit,
//! owned object, never module-level state.

use meeple_core::models::SearchHit;
use moka::sync::Cache;

#[derive(Clone)]
pub struct SearchCache {
    inner: Cache<String, Vec<SearchHit>>,
}

impl SearchCache {
    /// Create a cache holding at most `capacity` query entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    pub fn get(&self, query: &str) -> Option<Vec<SearchHit>> {
        self.inner.get(query)
    }

    pub fn insert(&self, query: &str, hits: Vec<SearchHit>) {
        self.inner.insert(query.to_string(), hits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeple_core::models::Similarity;

    #[test]
    fn insert_then_get_roundtrips() {
        let cache = SearchCache::new(8);
        assert!(cache.get("raid rules").is_none());
        cache.insert(
            "raid rules",
            vec![SearchHit {
                id: "r1".to_string(),
                content: "Raiding costs one action.".to_string(),
                metadata: serde_json::Map::new(),
                source_file: "rules.md".to_string(),
                heading: "Raids".to_string(),
                similarity: Similarity::new(0.8),
            }],
        );
        let hits = cache.get("raid rules").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "r1");
    }
}
