// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category and tag filters for archive pages.
//!
//! # The empty-key quirk
//!
//! An empty filter key returns the input sequence unchanged - **without** the
//! published-only filter the non-empty branch applies. Archive pages call
//! these with whatever key came from the route, and the upstream site's
//! behavior for a missing key is "show everything you gave me". Preserved
//! as-is; callers that must not leak drafts filter their pool first.

use crate::types::Post;

/// Keep published candidates whose category equals `category` exactly.
///
/// An empty `category` passes the input through unchanged (drafts included -
/// see the module docs).
pub fn filter_by_category(candidates: &[Post], category: &str) -> Vec<Post> {
    if category.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .filter(|post| post.is_published() && post.category == category)
        .cloned()
        .collect()
}

/// Keep published candidates whose tag set contains `tag` exactly.
///
/// An empty `tag` passes the input through unchanged (drafts included - see
/// the module docs).
pub fn filter_by_tag(candidates: &[Post], tag: &str) -> Vec<Post> {
    if tag.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .filter(|post| post.is_published() && post.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}
