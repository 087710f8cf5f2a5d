//! Category and tag filter behavior, including the empty-key pass-through.

use kindred::testing::{make_draft, make_post_in_category, make_tagged_post};
use kindred::{filter_by_category, filter_by_tag, search};

#[test]
fn category_filter_is_exact_and_published_only() {
    let mut draft = make_draft("draft", "Draft");
    draft.category = "Tips".to_string();
    let posts = vec![
        make_post_in_category("a", "A", "Tips"),
        make_post_in_category("b", "B", "News"),
        draft,
    ];
    let filtered = filter_by_category(&posts, "Tips");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].slug, "a");
}

#[test]
fn empty_category_key_passes_drafts_through() {
    // The documented quirk: no status filter on the pass-through branch
    let posts = vec![
        make_draft("draft", "Draft"),
        make_post_in_category("a", "A", "Tips"),
    ];
    let filtered = filter_by_category(&posts, "");
    assert_eq!(filtered, posts);
    assert!(filtered.iter().any(|post| !post.is_published()));
}

#[test]
fn tag_filter_requires_exact_membership() {
    let posts = vec![
        make_tagged_post("a", &["wp", "auth"]),
        make_tagged_post("b", &["wordpress"]),
        make_tagged_post("c", &[]),
    ];
    let filtered = filter_by_tag(&posts, "wp");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].slug, "a");
}

#[test]
fn empty_tag_key_passes_through_unchanged() {
    let posts = vec![make_draft("d", "D"), make_tagged_post("a", &["wp"])];
    assert_eq!(filter_by_tag(&posts, ""), posts);
}

#[test]
fn filters_preserve_input_order() {
    let posts = vec![
        make_post_in_category("z", "Z", "Tips"),
        make_post_in_category("a", "A", "Tips"),
        make_post_in_category("m", "M", "Tips"),
    ];
    let filtered = filter_by_category(&posts, "Tips");
    let slugs: Vec<&str> = filtered.iter().map(|post| post.slug.as_str()).collect();
    assert_eq!(slugs, vec!["z", "a", "m"]);
}

#[test]
fn filter_then_search_composes() {
    // Archive pages narrow by category first, then search within the result
    let mut a = make_post_in_category("a", "Malware Cleanup", "Tips");
    a.tags = vec!["malware".to_string()];
    let b = make_post_in_category("b", "Malware Trends", "News");

    let tips = filter_by_category(&[a, b], "Tips");
    let results = search("malware", &tips);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].slug, "a");
}
