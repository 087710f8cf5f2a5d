// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kindred command-line interface.
//!
//! Four subcommands, one per engine operation: `related`, `search`, `tags`,
//! and `categories`. Each reads a JSON corpus file (an array of camelCase
//! post records, the same shape the content API emits), runs the operation,
//! and renders the result - pretty boxes on a TTY, `--json` for pipelines.
//!
//! The engine itself never fails; everything that can go wrong here is file
//! I/O or malformed JSON, reported as a formatted error string.

pub mod display;

use clap::{Parser, Subcommand};
use kindred::{
    category_counts, parse_query, popular_tags, rank_related, related_score, search, term_score,
    Post, TagCount, DEFAULT_RELATED_LIMIT, DEFAULT_TAG_LIMIT,
};

use display::{count_bar, row, score_value, section_bot, section_top, truncate, BOX_WIDTH};

#[derive(Parser)]
#[command(
    name = "kindred",
    about = "Deterministic relevance ranking for blog corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the posts most related to one reference post
    Related {
        /// Path to the JSON corpus (array of post records)
        corpus: String,

        /// Slug of the reference post
        slug: String,

        /// Maximum number of related posts to return
        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search the corpus with a free-text query
    Search {
        /// Path to the JSON corpus (array of post records)
        corpus: String,

        /// Search query
        query: String,

        /// Truncate the result list (searches return every positive match)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the most used tags across published posts
    Tags {
        /// Path to the JSON corpus (array of post records)
        corpus: String,

        /// Maximum number of tags to show
        #[arg(short, long, default_value_t = DEFAULT_TAG_LIMIT)]
        limit: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-category post counts
    Categories {
        /// Path to the JSON corpus (array of post records)
        corpus: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Load a corpus file: a JSON array of post records.
pub fn load_corpus(path: &str) -> Result<Vec<Post>, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read corpus '{}': {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid corpus JSON in '{}': {}", path, e))
}

pub fn run_related(path: &str, slug: &str, limit: usize, json: bool) -> Result<(), String> {
    let corpus = load_corpus(path)?;
    let reference = corpus
        .iter()
        .find(|post| post.slug == slug)
        .cloned()
        .ok_or_else(|| format!("No post with slug '{}' in '{}'", slug, path))?;

    let related = rank_related(Some(&reference), &corpus, limit);

    if json {
        return print_json(&related);
    }

    section_top(&format!("RELATED TO '{}'", slug));
    if related.is_empty() {
        row("  (no candidates)");
    }
    for (rank, post) in related.iter().enumerate() {
        let score = related_score(&reference, post);
        row(&format!(
            "  {}. {} {}  {}",
            rank + 1,
            score_value(score),
            truncate(&post.title, BOX_WIDTH - 30),
            post.slug
        ));
    }
    section_bot();
    Ok(())
}

pub fn run_search(path: &str, query: &str, limit: Option<usize>, json: bool) -> Result<(), String> {
    let corpus = load_corpus(path)?;
    let mut results = search(query, &corpus);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        return print_json(&results);
    }

    let terms = parse_query(query);
    section_top(&format!("SEARCH '{}'", query));
    if results.is_empty() {
        row("  (no matches)");
    }
    for (rank, post) in results.iter().enumerate() {
        let score: u32 = terms.iter().map(|term| term_score(post, term)).sum();
        row(&format!(
            "  {}. {} {}  {}",
            rank + 1,
            score_value(score),
            truncate(&post.title, BOX_WIDTH - 30),
            post.slug
        ));
    }
    section_bot();
    Ok(())
}

pub fn run_tags(path: &str, limit: usize, json: bool) -> Result<(), String> {
    let corpus = load_corpus(path)?;
    let tags = popular_tags(&corpus, limit);

    if json {
        return print_json(&tags);
    }

    let max = tags.first().map(|t| t.count).unwrap_or(0);
    section_top("POPULAR TAGS");
    if tags.is_empty() {
        row("  (no tags on published posts)");
    }
    for TagCount { tag, count } in &tags {
        row(&format!(
            "  {:<20} {} {:>4}",
            truncate(tag, 20),
            count_bar(*count, max, 24),
            count
        ));
    }
    section_bot();
    Ok(())
}

pub fn run_categories(path: &str, json: bool) -> Result<(), String> {
    let corpus = load_corpus(path)?;
    let counts = category_counts(&corpus);

    // HashMap iteration order is arbitrary; pin the display order
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if json {
        return print_json(&entries);
    }

    let max = entries.first().map(|(_, count)| *count).unwrap_or(0);
    section_top("CATEGORIES");
    if entries.is_empty() {
        row("  (no published posts)");
    }
    for (category, count) in &entries {
        let label = if category.is_empty() { "(none)" } else { category.as_str() };
        row(&format!(
            "  {:<20} {} {:>4}",
            truncate(label, 20),
            count_bar(*count, max, 24),
            count
        ));
    }
    section_bot();
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    println!("{}", out);
    Ok(())
}
