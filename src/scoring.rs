//! Scoring functions for search and related-post ranking.
//!
//! All scores are additive integers: each signal that fires contributes a
//! fixed number of points, and a candidate's score is the plain sum. Nothing
//! is normalized, decayed, or trained.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD DOMINANCE (search)
//! The search weights form a strict hierarchy per term:
//!
//! ```text
//! Title (100) > Tags (80) > Category (70) > Excerpt (50) > Content (10)
//! ```
//!
//! A single-term title match always outranks a single-term match in any other
//! field. The exact-word bonus (+50) stacks on top of the title substring
//! match, so a whole-word title hit scores 150.
//!
//! ## RELATED-POST WEIGHTS
//! Category identity (50) dominates any single secondary signal; shared tags
//! (10 each), shared long title words (5 each), the flat recency bonus (10),
//! and shared long excerpt words (3 each) accumulate on top. The recency
//! bonus is flat within the window, not scaled by distance.
//!
//! Downstream ordering depends on these exact values; the worked examples in
//! the test suites pin them.

use crate::types::Post;
use crate::utils::{normalize, shared_word_count};
use chrono::Duration;

/// Term appears as a substring of the title.
pub const TITLE_MATCH: u32 = 100;
/// Term equals a whole whitespace-split title token; stacks with [`TITLE_MATCH`].
pub const TITLE_EXACT_WORD_BONUS: u32 = 50;
/// Term appears as a substring of any tag.
pub const TAG_MATCH: u32 = 80;
/// Term appears as a substring of the category.
pub const CATEGORY_MATCH: u32 = 70;
/// Term appears as a substring of the excerpt.
pub const EXCERPT_MATCH: u32 = 50;
/// Term appears as a substring of the content body.
pub const CONTENT_MATCH: u32 = 10;

/// Reference and candidate share the exact category string.
pub const SAME_CATEGORY: u32 = 50;
/// Per tag present in both tag sets.
pub const SHARED_TAG: u32 = 10;
/// Per word longer than [`MIN_SHARED_WORD_LEN`] chars common to both titles.
pub const SHARED_TITLE_WORD: u32 = 5;
/// Published within [`RECENCY_WINDOW_DAYS`] of each other (flat, not scaled).
pub const RECENT_PAIR: u32 = 10;
/// Per word longer than [`MIN_SHARED_WORD_LEN`] chars common to both excerpts.
pub const SHARED_EXCERPT_WORD: u32 = 3;

/// Window for the recency bonus, in days.
pub const RECENCY_WINDOW_DAYS: i64 = 30;
/// Words must be strictly longer than this to count as shared-word signals.
pub const MIN_SHARED_WORD_LEN: usize = 3;

/// Score one normalized query term against one post.
///
/// `term` must already be normalized (see [`crate::parse_query`]); field text
/// is normalized here before matching. Matching is plain substring
/// containment, no tokenization. Each field contributes at most once per
/// term: a term occurring three times in the excerpt still scores
/// [`EXCERPT_MATCH`] once.
pub fn term_score(post: &Post, term: &str) -> u32 {
    let mut score = 0;

    let title = normalize(&post.title);
    if title.contains(term) {
        score += TITLE_MATCH;
        // Whole-word hit on top of the substring hit
        if title.split(' ').any(|word| word == term) {
            score += TITLE_EXACT_WORD_BONUS;
        }
    }

    if post.tags.iter().any(|tag| normalize(tag).contains(term)) {
        score += TAG_MATCH;
    }

    if normalize(&post.category).contains(term) {
        score += CATEGORY_MATCH;
    }

    if normalize(&post.excerpt).contains(term) {
        score += EXCERPT_MATCH;
    }

    if let Some(content) = &post.content {
        if normalize(content).contains(term) {
            score += CONTENT_MATCH;
        }
    }

    score
}

/// Score a candidate post's similarity to a reference post.
///
/// The signals are independent and additive; see the module docs for the
/// weight table. Category and tag comparisons are exact string matches (the
/// content layer controls that vocabulary); title and excerpt word overlap is
/// case-insensitive.
pub fn related_score(reference: &Post, candidate: &Post) -> u32 {
    let mut score = 0;

    if candidate.category == reference.category {
        score += SAME_CATEGORY;
    }

    let shared_tags = candidate
        .tags
        .iter()
        .filter(|tag| reference.tags.contains(*tag))
        .collect::<std::collections::HashSet<&String>>()
        .len();
    score += SHARED_TAG * shared_tags as u32;

    score += SHARED_TITLE_WORD
        * shared_word_count(&reference.title, &candidate.title, MIN_SHARED_WORD_LEN) as u32;

    if let (Some(a), Some(b)) = (reference.published_date, candidate.published_date) {
        if (a - b).abs() <= Duration::days(RECENCY_WINDOW_DAYS) {
            score += RECENT_PAIR;
        }
    }

    score += SHARED_EXCERPT_WORD
        * shared_word_count(&reference.excerpt, &candidate.excerpt, MIN_SHARED_WORD_LEN) as u32;

    score
}
