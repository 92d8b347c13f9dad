//! Query classification: an ordered table of lexical predicate → label rules.

pub mod rules;

use meeple_core::QueryType;

/// Classify a question into zero-or-more semantic types.
///
/// Pure, deterministic, and total: rules are evaluated independently against
/// the lowercased query and all matching labels accumulate. An unmatched
/// query falls back to `[General]`, so the result is never empty.
pub fn classify(query: &str) -> Vec<QueryType> {
    let lower = query.to_lowercase();
    let mut labels = Vec::new();

    for rule in rules::CLASSIFY_RULES {
        if (rule.matches)(&lower) && !labels.contains(&rule.label) {
            labels.push(rule.label);
        }
    }

    if labels.is_empty() {
        labels.push(QueryType::General);
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_general() {
        assert_eq!(classify(""), vec![QueryType::General]);
    }

    #[test]
    fn unmatched_query_is_general() {
        assert_eq!(classify("tell me about the lore"), vec![QueryType::General]);
    }

    #[test]
    fn domain_vocabulary_rules() {
        assert!(classify("How do I spend a resource?").contains(&QueryType::Resource));
        assert!(classify("Can I discard a card from my hand?").contains(&QueryType::Card));
        assert!(classify("What is the rule for taxing?").contains(&QueryType::Rule));
        assert!(classify("How does setup work for two players?").contains(&QueryType::Setup));
        assert!(classify("How do I win the game?").contains(&QueryType::Victory));
        assert!(classify("What actions can I take?").contains(&QueryType::Action));
        assert!(classify("Where does each tile go?").contains(&QueryType::Component));
    }

    #[test]
    fn labels_accumulate() {
        let labels = classify("How many victory point tokens are in the game?");
        assert!(labels.contains(&QueryType::Resource)); // "token"
        assert!(labels.contains(&QueryType::Victory));
        assert!(labels.contains(&QueryType::Enumeration)); // "how many"
    }

    #[test]
    fn enumeration_detectors() {
        assert!(classify("How many cities are there?").contains(&QueryType::Enumeration));
        assert!(classify("List all the ambitions").contains(&QueryType::Enumeration));
        assert!(classify("What are all the factions?").contains(&QueryType::Enumeration));
        assert!(classify("What are the five ambitions?").contains(&QueryType::Enumeration));
        assert!(classify("What are the different map layouts?").contains(&QueryType::Enumeration));
    }

    #[test]
    fn comparison_detectors() {
        assert!(classify("What is the difference between raid and battle?")
            .contains(&QueryType::Comparison));
        assert!(classify("Loyal agents versus free agents").contains(&QueryType::Comparison));
        assert!(classify("ships vs buildings").contains(&QueryType::Comparison));
        // "vs" must be a standalone word.
        assert!(!classify("the enemy advances").contains(&QueryType::Comparison));
    }

    #[test]
    fn interaction_detector_needs_both_halves() {
        assert!(classify("How does Blight interact with damaged ships?")
            .contains(&QueryType::Interaction));
        assert!(classify("Can I combine raid and repair?").contains(&QueryType::Interaction));
        assert!(!classify("Can I combine everything?").contains(&QueryType::Interaction));
    }

    #[test]
    fn reasoning_detectors() {
        assert!(classify("Why would I ever pass?").contains(&QueryType::Reasoning));
        assert!(classify("What happens if the chapter track ends?").contains(&QueryType::Reasoning));
        assert!(classify("Explain how outrage works").contains(&QueryType::Reasoning));
    }
}
