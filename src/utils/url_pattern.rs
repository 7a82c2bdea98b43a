//! Syntactic URL validation.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled pattern for accepted URLs.
///
/// Scheme is optional, the host is a lowercase domain-like token sequence,
/// the TLD segment is 2-6 letters/dots, and an optional path may follow.
/// This is a syntactic check only: no DNS resolution, no reachability.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://)?[\da-z.-]+\.[a-z.]{2,6}[/\w .-]*$").unwrap());

/// Returns whether `candidate` matches the accepted URL pattern.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}
