//! Default values for retrieval tuning.
//!
//! All of these are empirically tuned. Override via [`RetrievalConfig`]
//! rather than editing here.
//!
//! [`RetrievalConfig`]: super::RetrievalConfig

/// Analytical questions (reasoning/comparison/interaction) broaden below this.
pub const DEFAULT_BROADEN_ANALYTICAL_MIN: usize = 5;

/// Any question broadens below this many hits.
pub const DEFAULT_BROADEN_FLOOR: usize = 2;

/// Refine when fewer hits than this survive broadening.
pub const DEFAULT_REFINE_MIN: usize = 3;

/// Refine when every hit scores below this similarity.
pub const DEFAULT_REFINE_SIMILARITY_FLOOR: f64 = 0.55;

/// Result cap for card-enumeration questions.
pub const DEFAULT_CAP_CARD_ENUMERATION: usize = 15;

/// Result cap for other enumeration questions.
pub const DEFAULT_CAP_ENUMERATION: usize = 12;

/// Result cap for everything else.
pub const DEFAULT_CAP: usize = 8;

/// Recovery triggers below this many capped hits.
pub const DEFAULT_RECOVERY_MIN: usize = 2;

/// Recovery triggers when every capped hit scores below this.
pub const DEFAULT_RECOVERY_SIMILARITY_FLOOR: f64 = 0.45;

/// Recovery keeps only newly-seen hits above this similarity.
pub const DEFAULT_RECOVERY_HIT_FLOOR: f64 = 0.5;

/// Entities tried per recovery pass.
pub const DEFAULT_RECOVERY_ENTITIES: usize = 2;

/// New hits merged in per recovery pass.
pub const DEFAULT_RECOVERY_KEEP: usize = 3;
