use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Semantic closeness score clamped to [0.0, 1.0], as reported by the
/// vector-search collaborator.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Similarity(f64);

impl Similarity {
    /// Create a new Similarity, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Similarity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// One passage returned by the vector-search collaborator.
///
/// Transient: created and consumed within a single question-answering
/// request; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub source_file: String,
    pub heading: String,
    pub similarity: Similarity,
}

impl SearchHit {
    /// Fetch a metadata field as a string, if present and string-valued.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_clamps_both_ends() {
        assert_eq!(Similarity::new(1.4).value(), 1.0);
        assert_eq!(Similarity::new(-0.2).value(), 0.0);
        assert_eq!(Similarity::new(0.63).value(), 0.63);
    }

    #[test]
    fn meta_str_ignores_non_string_values() {
        let mut metadata = Map::new();
        metadata.insert("page_number".to_string(), Value::from(12));
        metadata.insert("content_type".to_string(), Value::from("card"));
        let hit = SearchHit {
            id: "h1".to_string(),
            content: String::new(),
            metadata,
            source_file: String::new(),
            heading: String::new(),
            similarity: Similarity::new(0.5),
        };
        assert_eq!(hit.meta_str("content_type"), Some("card"));
        assert_eq!(hit.meta_str("page_number"), None);
        assert_eq!(hit.meta_str("missing"), None);
    }
}
