use once_cell::sync::Lazy;
use regex::Regex;

/// A whole line naming a category block, e.g. `bug_fixes:`
pub static CATEGORY_HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_]+:$").expect("Failed to compile category header regex"));

/// Parenthesized pull-request number inside a commit summary, e.g. `(#1234)`
pub static PULL_REQUEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(#([0-9]+)\)").expect("Failed to compile pull request regex"));

/// Inline cross-reference markup; the first identifier token is the symbol
pub static REF_MARKUP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":ref:`([_a-zA-Z0-9%]+)[^`]*`").expect("Failed to compile ref markup regex")
});

/// Inline option markup with a literal backtick-delimited symbol
pub static OPTION_MARKUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":option:`([^`]*)`").expect("Failed to compile option markup regex"));
