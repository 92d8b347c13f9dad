use serde::{Deserialize, Serialize};

/// Semantic label for a rules question.
///
/// Labels are not mutually exclusive; a question may carry several.
/// A classified set is never empty — unmatched questions fall back to
/// [`QueryType::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Resource,
    Card,
    Rule,
    Setup,
    Victory,
    Action,
    Component,
    General,
    Enumeration,
    Comparison,
    Interaction,
    Reasoning,
}

impl QueryType {
    pub const COUNT: usize = 12;

    pub const ALL: [QueryType; Self::COUNT] = [
        QueryType::Resource,
        QueryType::Card,
        QueryType::Rule,
        QueryType::Setup,
        QueryType::Victory,
        QueryType::Action,
        QueryType::Component,
        QueryType::General,
        QueryType::Enumeration,
        QueryType::Comparison,
        QueryType::Interaction,
        QueryType::Reasoning,
    ];

    /// Questions of these types need broader context than a single
    /// passage, so sparse results trigger query broadening sooner.
    pub fn is_analytical(self) -> bool {
        matches!(
            self,
            QueryType::Reasoning | QueryType::Comparison | QueryType::Interaction
        )
    }
}
