// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Related-post ranking: "you might also like" for a single reference post.
//!
//! Unlike search, this ranker has no score floor. If only zero-score
//! candidates exist, the top of the input order fills the slots anyway - a
//! sidebar with three mediocre suggestions beats an empty one. The stable
//! sort makes that fallback deterministic.

use crate::scoring::related_score;
use crate::types::{Post, ScoredPost};

/// Default number of related posts to return.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Rank the candidates most similar to `reference`, best first.
///
/// Returns at most `limit` posts. The reference itself (matched by slug) and
/// unpublished candidates never appear. Ties keep the relative order of the
/// input sequence.
///
/// A `None` reference yields an empty vec: the caller is typically rendering
/// a post page and the post lookup itself came up empty.
pub fn rank_related(reference: Option<&Post>, candidates: &[Post], limit: usize) -> Vec<Post> {
    let Some(reference) = reference else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredPost> = candidates
        .iter()
        .filter(|candidate| candidate.is_published() && candidate.slug != reference.slug)
        .map(|candidate| ScoredPost {
            score: related_score(reference, candidate),
            post: candidate.clone(),
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored.into_iter().map(|scored| scored.post).collect()
}
