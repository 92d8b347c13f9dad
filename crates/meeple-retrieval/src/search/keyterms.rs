//! Key-term extraction for query broadening.
//!
//! Bigrams over the surviving tokens come first (they carry more signal for
//! rules vocabulary like "chapter track"), then unigrams.

/// Extract up to `limit` salient terms from a question.
pub fn key_terms(query: &str, limit: usize) -> Vec<String> {
    let tokens = tokenize(query);
    let mut terms: Vec<String> = Vec::new();

    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms.extend(tokens);

    terms.truncate(limit);
    terms
}

/// Whitespace + lowercase tokenizer with stop word removal.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "and"
            | "are"
            | "but"
            | "for"
            | "not"
            | "with"
            | "you"
            | "this"
            | "that"
            | "what"
            | "when"
            | "where"
            | "which"
            | "how"
            | "why"
            | "who"
            | "can"
            | "could"
            | "would"
            | "should"
            | "does"
            | "did"
            | "has"
            | "have"
            | "had"
            | "was"
            | "were"
            | "will"
            | "its"
            | "from"
            | "into"
            | "about"
            | "there"
            | "their"
            | "they"
            | "them"
            | "these"
            | "those"
            | "happen"
            | "happens"
            | "between"
            | "versus"
            | "instead"
    )
}
