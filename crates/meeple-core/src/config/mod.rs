pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::MeepleResult;

/// Retrieval pipeline tuning.
///
/// Every similarity threshold and result cap here is an empirically tuned
/// constant with no derivation behind it; they are configuration, not
/// invariants, and callers may override any of them via TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Reasoning/comparison/interaction questions broaden below this many hits.
    pub broaden_analytical_min: usize,
    /// Any question broadens below this many hits.
    pub broaden_floor: usize,
    /// Refine when fewer than this many hits survive broadening.
    pub refine_min: usize,
    /// Refine when every hit scores below this similarity.
    pub refine_similarity_floor: f64,
    /// Result cap for card-enumeration questions.
    pub cap_card_enumeration: usize,
    /// Result cap for other enumeration questions.
    pub cap_enumeration: usize,
    /// Result cap for everything else.
    pub cap_default: usize,
    /// Recovery triggers when fewer than this many hits remain capped...
    pub recovery_min: usize,
    /// ...or when every remaining hit scores below this similarity.
    pub recovery_similarity_floor: f64,
    /// Recovery keeps only newly-seen hits above this similarity.
    pub recovery_hit_floor: f64,
    /// Number of top-ranked entities tried during recovery.
    pub recovery_entities: usize,
    /// Maximum new hits merged in by a recovery pass.
    pub recovery_keep: usize,
}

impl RetrievalConfig {
    /// Parse a config from TOML text; unspecified fields keep their defaults.
    pub fn from_toml_str(raw: &str) -> MeepleResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            broaden_analytical_min: defaults::DEFAULT_BROADEN_ANALYTICAL_MIN,
            broaden_floor: defaults::DEFAULT_BROADEN_FLOOR,
            refine_min: defaults::DEFAULT_REFINE_MIN,
            refine_similarity_floor: defaults::DEFAULT_REFINE_SIMILARITY_FLOOR,
            cap_card_enumeration: defaults::DEFAULT_CAP_CARD_ENUMERATION,
            cap_enumeration: defaults::DEFAULT_CAP_ENUMERATION,
            cap_default: defaults::DEFAULT_CAP,
            recovery_min: defaults::DEFAULT_RECOVERY_MIN,
            recovery_similarity_floor: defaults::DEFAULT_RECOVERY_SIMILARITY_FLOOR,
            recovery_hit_floor: defaults::DEFAULT_RECOVERY_HIT_FLOOR,
            recovery_entities: defaults::DEFAULT_RECOVERY_ENTITIES,
            recovery_keep: defaults::DEFAULT_RECOVERY_KEEP,
        }
    }
}
