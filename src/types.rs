// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the relevance engine.
//!
//! A [`Post`] is a snapshot of one blog-post record as the content layer hands
//! it over. The engine never mutates posts and never holds on to them between
//! calls; every ranking and aggregation operation takes its candidate pool as
//! an explicit parameter and allocates its own output.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - Only [`Status::Published`] posts participate in ranking and aggregation.
//!   A post with any other status is silently skipped, never an error.
//! - `slug` is the identity: related-post ranking excludes the reference by
//!   slug equality, so two posts sharing a slug would shadow each other. The
//!   content layer guarantees uniqueness; the engine does not re-check it.
//! - Text fields the upstream API may omit deserialize to empty strings.
//!   Scoring treats empty as "matches nothing" (except category equality,
//!   which is a plain string comparison).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a post.
///
/// The upstream content API sends this as a lowercase string. Anything it
/// fails to send is treated as a draft, which keeps half-created records out
/// of search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Published,
}

/// One blog-post record, as supplied by the content-retrieval layer.
///
/// Every field except `slug` carries a serde default because the upstream
/// store does not guarantee field presence. `content` and `published_date`
/// stay `Option` rather than defaulting: "no body yet" and "empty body" are
/// different states upstream, and the recency signal must not fire against a
/// fabricated date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
}

impl Post {
    /// Whether this post participates in ranking and aggregation.
    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }
}

/// A tag and how many published posts carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// A scored post (internal use).
///
/// Rankers collect these, stable-sort by descending `score`, then strip the
/// score before returning. The numeric score is an implementation detail of
/// the ordering; callers that want to display it recompute via the public
/// scoring functions.
#[derive(Debug, Clone)]
pub(crate) struct ScoredPost {
    pub post: Post,
    pub score: u32,
}
