//! Free-text search over an in-memory candidate pool.
//!
//! There is no index here: every call scans every published candidate against
//! every query term. That is a deliberate tradeoff - the corpora this engine
//! sees are a few hundred posts at most, and recomputing from scratch keeps
//! the function pure and the results trivially consistent with the input.
//!
//! # The pass-through quirk
//!
//! A query that normalizes to zero terms (blank, or nothing but one- and
//! two-letter words) returns the candidate sequence **unchanged** - same
//! order, drafts included. The rendering layer relies on this to show the
//! full post list when the search box is effectively empty, so it must not
//! be "fixed" into an empty result or a published-only list.

use crate::query::parse_query;
use crate::scoring::term_score;
use crate::types::{Post, ScoredPost};

/// Search the candidates for posts matching the query, best first.
///
/// Every returned post has a positive relevance score; scores accumulate
/// across all terms and all matched fields. Ties keep the relative order of
/// the input sequence. Unpublished candidates never match.
///
/// See the module docs for the blank-query pass-through behavior.
pub fn search(query: &str, candidates: &[Post]) -> Vec<Post> {
    let terms = parse_query(query);
    if terms.is_empty() {
        return candidates.to_vec();
    }

    let mut scored: Vec<ScoredPost> = candidates
        .iter()
        .filter(|candidate| candidate.is_published())
        .filter_map(|candidate| {
            let score: u32 = terms.iter().map(|term| term_score(candidate, term)).sum();
            (score > 0).then(|| ScoredPost {
                post: candidate.clone(),
                score,
            })
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().map(|scored| scored.post).collect()
}
