//! Deterministic relevance scoring for related posts and blog search.
//!
//! This crate is the ranking core behind a blog's "related posts" sidebar,
//! its free-text search box, and its tag/category widgets. It operates on an
//! in-memory candidate pool supplied by the caller: no index, no persistence,
//! no caching. Every operation is a pure function that recomputes from
//! scratch, which keeps results trivially consistent with the input and makes
//! concurrent use safe without coordination.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   types.rs  │────▶│  scoring.rs  │────▶│  related.rs  │
//! │    (Post,   │     │ (term_score, │     │  search.rs   │
//! │  TagCount)  │     │related_score)│     │  (rankers)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────┐     ┌──────────────────────────┐
//! │ aggregate.rs, filter.rs │     │  query.rs, utils.rs      │
//! │  (tag/category widgets) │     │ (parsing, normalization) │
//! └─────────────────────────┘     └──────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use kindred::{rank_related, search, popular_tags, DEFAULT_RELATED_LIMIT};
//! # use kindred::testing::make_post;
//!
//! # let posts = vec![make_post("a", "WordPress Security")];
//! let hits = search("wordpress security", &posts);
//! let related = rank_related(posts.first(), &posts, DEFAULT_RELATED_LIMIT);
//! let tags = popular_tags(&posts, 10);
//! ```
//!
//! Only published posts participate in ranking and aggregation; the handful
//! of deliberate pass-through behaviors (blank queries, empty filter keys)
//! are documented on the functions that have them.

// Module declarations
mod aggregate;
mod filter;
mod query;
mod related;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use aggregate::{category_counts, popular_tags, DEFAULT_TAG_LIMIT};
pub use filter::{filter_by_category, filter_by_tag};
pub use query::{parse_query, MIN_TERM_LEN};
pub use related::{rank_related, DEFAULT_RELATED_LIMIT};
pub use scoring::{
    related_score, term_score, CATEGORY_MATCH, CONTENT_MATCH, EXCERPT_MATCH, MIN_SHARED_WORD_LEN,
    RECENCY_WINDOW_DAYS, RECENT_PAIR, SAME_CATEGORY, SHARED_EXCERPT_WORD, SHARED_TAG,
    SHARED_TITLE_WORD, TAG_MATCH, TITLE_EXACT_WORD_BONUS, TITLE_MATCH,
};
pub use search::search;
pub use types::{Post, Status, TagCount};
pub use utils::normalize;
