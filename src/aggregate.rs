// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag and category aggregation over a candidate pool.
//!
//! These feed the sidebar widgets: a "popular tags" cloud and per-category
//! post counts. Both walk the pool fresh on every call - no cached counts.

use crate::types::{Post, TagCount};
use std::collections::HashMap;

/// Default number of popular tags to return.
pub const DEFAULT_TAG_LIMIT: usize = 10;

/// Count tag usage across published candidates, most used first.
///
/// Returns at most `limit` entries. Ties keep first-encountered order, i.e.
/// the order tags first appear while walking the candidate sequence - that
/// keeps the widget stable when counts are all 1, which is common on small
/// corpora. Occurrences are counted as-is: a tag listed twice on one post
/// counts twice.
pub fn popular_tags(candidates: &[Post], limit: usize) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for post in candidates.iter().filter(|post| post.is_published()) {
        for tag in &post.tags {
            match positions.get(tag.as_str()) {
                Some(&at) => counts[at].count += 1,
                None => {
                    positions.insert(tag.as_str(), counts.len());
                    counts.push(TagCount {
                        tag: tag.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort: first-encountered order survives among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Count published candidates per category.
///
/// Posts with an empty category are counted under the empty string; the
/// rendering layer decides whether to show that bucket.
pub fn category_counts(candidates: &[Post]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in candidates.iter().filter(|post| post.is_published()) {
        *counts.entry(post.category.clone()).or_insert(0) += 1;
    }
    counts
}
