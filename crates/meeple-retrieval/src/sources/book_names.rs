//! Book-name derivation from `h1_heading` metadata.

use meeple_core::constants::DEFAULT_BOOK_NAME;

/// Leading corpus prefixes stripped before title-casing.
const DOMAIN_PREFIXES: &[&str] = &["arcs_", "arcs-", "arcs "];

/// Clean a raw `h1_heading` into a display book name: strip the domain
/// prefix, underscores to spaces, title-case, then canonicalize.
pub fn book_name(h1_heading: Option<&str>) -> String {
    let Some(raw) = h1_heading else {
        return DEFAULT_BOOK_NAME.to_string();
    };

    let mut cleaned = raw.trim().to_lowercase();
    for prefix in DOMAIN_PREFIXES {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest.to_string();
            break;
        }
    }

    let titled = cleaned
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<String>>()
        .join(" ");

    if titled.is_empty() {
        return DEFAULT_BOOK_NAME.to_string();
    }

    canonical(&titled).map(str::to_string).unwrap_or(titled)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Canonicalization table for book names whose raw headings read backwards
/// or use in-house shorthand.
fn canonical(name: &str) -> Option<&'static str> {
    Some(match name {
        "Rules Base Game" => "Base Game Rules",
        "Rules Campaign" => "Campaign Rules",
        "Rules Leaders Lore" => "Leaders & Lore Rules",
        "Faq" => "FAQ",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_heading_falls_back() {
        assert_eq!(book_name(None), DEFAULT_BOOK_NAME);
        assert_eq!(book_name(Some("")), DEFAULT_BOOK_NAME);
    }

    #[test]
    fn prefix_and_underscores_are_cleaned() {
        assert_eq!(book_name(Some("arcs_campaign_guide")), "Campaign Guide");
    }

    #[test]
    fn canonical_names_are_rewritten() {
        assert_eq!(book_name(Some("arcs_rules_base_game")), "Base Game Rules");
        assert_eq!(book_name(Some("rules_campaign")), "Campaign Rules");
        assert_eq!(book_name(Some("faq")), "FAQ");
    }
}
