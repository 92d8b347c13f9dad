/// Meeple system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heading used when a hit carries no usable section heading.
pub const GENERIC_HEADING: &str = "General Rules";

/// Placeholder name for a card whose name cannot be derived.
pub const GENERIC_CARD_NAME: &str = "Card";

/// Book name used when a hit carries no `h1_heading` metadata.
pub const DEFAULT_BOOK_NAME: &str = "Rulebook";
