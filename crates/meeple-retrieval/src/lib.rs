//! # meeple-retrieval
//!
//! Query understanding and retrieval orchestration for board-game rules Q&A.
//!
//! One raw user question (possibly an elliptical follow-up) goes in; a
//! ranked, deduplicated, citable set of source passages comes out:
//! classification → expansion (+ follow-up resolution via conversation
//! entities) → adaptive multi-query search → source formatting.

/// Compiles a static regex once. A pattern that fails to compile is treated
/// as matching nothing rather than panicking.
macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).ok());
    };
}

pub mod engine;
pub mod expansion;
pub mod followup;
pub mod intent;
pub mod search;
pub mod sources;

pub use engine::{RetrievalEngine, RetrievalRequest};
