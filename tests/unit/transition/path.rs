use super::*;

#[test]
fn normalize_strips_query_and_fragment() {
    assert_eq!(normalize_path("/blog?category=rsc#top"), "/blog");
    assert_eq!(normalize_path("/blog#top"), "/blog");
    assert_eq!(normalize_path("/about"), "/about");
}

#[test]
fn normalize_handles_absolute_and_protocol_relative_urls() {
    assert_eq!(normalize_path("https://example.com/blog/post?x=1"), "/blog/post");
    assert_eq!(normalize_path("http://localhost:3000"), "/");
    assert_eq!(normalize_path("//cdn.example.com/a/b"), "/a/b");
    assert_eq!(normalize_path("https://example.com?q"), "/");
}

#[test]
fn normalize_resolves_relative_and_dot_segments() {
    assert_eq!(normalize_path("blog"), "/blog");
    assert_eq!(normalize_path("./blog"), "/blog");
    assert_eq!(normalize_path("/blog/../about"), "/about");
    assert_eq!(normalize_path("../../x"), "/x");
    assert_eq!(normalize_path("/blog/.."), "/");
    assert_eq!(normalize_path("/blog/"), "/blog/");
}

#[test]
fn normalize_defaults_to_root() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("   "), "/");
    assert_eq!(normalize_path("?only=query"), "/");
    assert_eq!(normalize_path("#hash"), "/");
}

#[test]
fn derive_label_examples() {
    assert_eq!(derive_label("/blog/my-post"), "Blog / My Post");
    assert_eq!(derive_label("/"), "Home");
    assert_eq!(derive_label(""), "Home");
    assert_eq!(derive_label("/about"), "About");
    assert_eq!(derive_label("//"), "Home");
}

#[test]
fn explicit_label_wins_and_is_upper_cased() {
    assert_eq!(resolve_label(Some("Read more"), "/blog/my-post"), "READ MORE");
    assert_eq!(resolve_label(None, "/blog/my-post"), "BLOG / MY POST");
    assert_eq!(resolve_label(Some("   "), "/blog"), "BLOG");
    assert_eq!(resolve_label(None, "/"), "HOME");
}
