//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Post, Status};
use chrono::{DateTime, Duration, Utc};

/// Create a published post with a title and no other signals.
///
/// This is the canonical implementation used across all tests.
pub fn make_post(slug: &str, title: &str) -> Post {
    Post {
        slug: slug.to_string(),
        status: Status::Published,
        category: String::new(),
        tags: vec![],
        title: title.to_string(),
        excerpt: String::new(),
        content: None,
        published_date: None,
    }
}

/// Create a draft post (excluded from every operation except pass-throughs).
pub fn make_draft(slug: &str, title: &str) -> Post {
    Post {
        status: Status::Draft,
        ..make_post(slug, title)
    }
}

/// Create a published post with a category.
pub fn make_post_in_category(slug: &str, title: &str, category: &str) -> Post {
    Post {
        category: category.to_string(),
        ..make_post(slug, title)
    }
}

/// Create a published post with tags.
pub fn make_tagged_post(slug: &str, tags: &[&str]) -> Post {
    Post {
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        ..make_post(slug, &format!("Post {}", slug))
    }
}

/// A deterministic publication date, `days` after the Unix epoch.
pub fn published_on(days: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::days(days)
}
