//! Subject extraction for enumeration and comparison questions.
//!
//! All helpers expect an already-lowercased query and return cleaned,
//! search-ready terms.

lazy_regex!(
    RE_HOW_MANY,
    r"how many ([a-z0-9' -]+?)(?: (?:are|is|do|does|can|will|exist|come|in)\b.*)?\??$"
);
lazy_regex!(RE_WHAT_ARE, r"what are (?:all |the )+([a-z0-9' -]+?)\??$");
lazy_regex!(RE_LIST, r"list (?:all |the )*([a-z0-9' -]+?)\??$");
lazy_regex!(
    RE_DIFF_BETWEEN,
    r"difference between (?:the |a |an )?(.+?) and (?:the |a |an )?(.+?)\??$"
);
lazy_regex!(RE_COMPARE_SPLIT, r"\s+(?:versus|vs\.?|compared to|instead of)\s+");

/// Pull the enumerated subject out of a counting question, e.g.
/// `"how many ambitions are there?"` → `"ambitions"`.
pub fn enumeration_subject(query: &str) -> Option<String> {
    for re in [&RE_HOW_MANY, &RE_WHAT_ARE, &RE_LIST] {
        let Some(re) = re.as_ref() else { continue };
        if let Some(caps) = re.captures(query) {
            if let Some(subject) = caps.get(1) {
                let cleaned = clean_term(subject.as_str());
                if !cleaned.is_empty() {
                    return Some(cleaned);
                }
            }
        }
    }
    None
}

/// Split a comparison question into its two compared terms.
pub fn comparison_terms(query: &str) -> Option<(String, String)> {
    if let Some(re) = RE_DIFF_BETWEEN.as_ref() {
        if let Some(caps) = re.captures(query) {
            let left = clean_term(caps.get(1)?.as_str());
            let right = clean_term(caps.get(2)?.as_str());
            if !left.is_empty() && !right.is_empty() {
                return Some((left, right));
            }
        }
    }

    let re = RE_COMPARE_SPLIT.as_ref()?;
    let m = re.find(query)?;
    let left = clean_term(&query[..m.start()]);
    let right = clean_term(&query[m.end()..]);
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, right))
}

/// Strip interrogative lead-ins and trailing punctuation from a term.
fn clean_term(term: &str) -> String {
    let mut t = term.trim().trim_end_matches(['?', '.', '!']).trim();
    for prefix in ["what is ", "what are ", "what's ", "should i ", "can i ", "the ", "a ", "an "] {
        if let Some(rest) = t.strip_prefix(prefix) {
            t = rest.trim();
        }
    }
    t.to_string()
}
