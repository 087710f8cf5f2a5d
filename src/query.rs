// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: how a free-text search box becomes scoreable terms.

use crate::utils::normalize;

/// Minimum character length for a query term to survive parsing.
///
/// One- and two-letter fragments ("a", "of", even "wp") match half the corpus
/// as substrings and drown out real terms, so they are discarded up front.
pub const MIN_TERM_LEN: usize = 3;

/// Parse a query string into normalized, whitespace-separated terms.
///
/// Terms shorter than [`MIN_TERM_LEN`] characters are discarded. An empty
/// return value means the query carried no usable terms at all - callers
/// treat that as "no query" (see [`crate::search`]), not as "nothing
/// matches".
///
/// # Example
///
/// ```
/// let terms = kindred::parse_query("WordPress at my site");
/// assert_eq!(terms, vec!["wordpress", "site"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|term| term.chars().count() >= MIN_TERM_LEN)
        .map(|term| term.to_string())
        .collect()
}
