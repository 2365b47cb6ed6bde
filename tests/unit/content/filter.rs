use super::*;
use crate::{config::ContentConfig, content::posts::ContentLoader};

fn posts() -> Vec<BlogPost> {
    let loader = ContentLoader::new(ContentConfig::default());
    [
        ("edge-caching", "Edge Caching", "TTL tricks", "Caching", "Ada"),
        ("rsc-streams", "Flight Streams", "Chunked payloads", "RSC", "Grace"),
        ("csp", "Strict CSP", "Nonces everywhere", "Security", "Ada"),
    ]
    .iter()
    .map(|(slug, title, intro, cat, author)| {
        let src = format!(
            "---\ntitle: {title}\ndescription: {intro}\ndate: 2025-01-05\ncategory: {cat}\n\
             authors:\n  - name: {author}\n---\n"
        );
        loader.parse(slug, &src).unwrap()
    })
    .collect()
}

fn slugs(f: &FilteredArticles<'_>) -> Vec<String> {
    f.items.iter().map(|p| p.slug.clone()).collect()
}

#[test]
fn all_matches_everything() {
    let posts = posts();
    let f = filter_articles(&posts, "All", "", None);
    assert_eq!(f.total, 3);
    assert_eq!(f.items.len(), 3);
}

#[test]
fn category_is_case_insensitive() {
    let posts = posts();
    let f = filter_articles(&posts, "rsc", "", None);
    assert_eq!(slugs(&f), vec!["rsc-streams"]);
}

#[test]
fn query_searches_title_intro_category_and_authors() {
    let posts = posts();
    assert_eq!(slugs(&filter_articles(&posts, "all", "  ada ", None)), vec!["edge-caching", "csp"]);
    assert_eq!(slugs(&filter_articles(&posts, "all", "NONCES", None)), vec!["csp"]);
    assert_eq!(slugs(&filter_articles(&posts, "all", "security", None)), vec!["csp"]);
    assert_eq!(filter_articles(&posts, "caching", "grace", None).total, 0);
}

#[test]
fn limit_caps_items_but_not_total() {
    let posts = posts();
    let f = filter_articles(&posts, "all", "", Some(1));
    assert_eq!(f.items.len(), 1);
    assert_eq!(f.total, 3);
}
