use chrono::TimeZone;

use super::*;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn reading_time_rounds_up_with_a_one_minute_floor() {
    assert_eq!(reading_time("", 200), "1 min read");
    assert_eq!(reading_time(&"word ".repeat(200), 200), "1 min read");
    assert_eq!(reading_time(&"word ".repeat(201), 200), "2 min read");
    assert_eq!(reading_time("a\n\tb  c", 1), "3 min read");
}

#[test]
fn dates_parse_in_several_shapes() {
    let now = fixed_now();
    assert_eq!(
        parse_post_date("2025-01-05", now),
        Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap()
    );
    assert_eq!(
        parse_post_date("2025-01-05T10:30:00+02:00", now),
        Utc.with_ymd_and_hms(2025, 1, 5, 8, 30, 0).unwrap()
    );
    assert_eq!(
        parse_post_date("2025-01-05T10:30:00", now),
        Utc.with_ymd_and_hms(2025, 1, 5, 10, 30, 0).unwrap()
    );
    assert_eq!(parse_post_date("next tuesday", now), now);
}

#[test]
fn date_labels() {
    let dt = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
    assert_eq!(short_date_label(&dt), "Jan 5");
    assert_eq!(full_date_label(&dt), "January 5, 2025");
}

#[test]
fn slugs_that_escape_the_root_are_rejected() {
    assert!(validate_slug("streaming-rsc").is_ok());
    for bad in ["", "../etc/passwd", "a/b", "a\\b", "..", "x\0y"] {
        assert!(validate_slug(bad).is_err(), "{bad:?}");
    }
}

#[test]
fn category_icons_map_known_ids() {
    assert_eq!(IconKey::for_category("next.js"), IconKey::FileCode);
    assert_eq!(IconKey::for_category("caching"), IconKey::Database);
    assert_eq!(IconKey::for_category("gardening"), IconKey::Newspaper);
    assert_eq!(
        serde_json::to_string(&IconKey::GitBranch).unwrap(),
        "\"gitBranch\""
    );
    assert!(IconKey::ALL.iter().all(|k| serde_json::to_string(k).unwrap() == format!("\"{}\"", k.as_str())));
}

#[test]
fn parse_builds_a_post() {
    let loader = ContentLoader::new(ContentConfig::default()).with_now(fixed_now());
    let src = "---\ntitle: Edge Caching\ndescription: TTLs\ndate: 2025-01-05\ncategory: Caching\n---\none two three\n";
    let post = loader.parse("edge-caching", src).unwrap();
    assert_eq!(post.href, "/blog/edge-caching");
    assert_eq!(post.date_label, "Jan 5");
    assert_eq!(post.full_date_label, "January 5, 2025");
    assert_eq!(post.reading_time, "1 min read");
    assert_eq!(post.authors, vec![Author::named("Editorial Team")]);
    assert_eq!(post.body, "one two three\n");
}

#[test]
fn categories_start_with_all_and_dedupe_case_insensitively() {
    let loader = ContentLoader::new(ContentConfig::default()).with_now(fixed_now());
    let mk = |slug: &str, cat: &str| {
        let src = format!("---\ntitle: {slug}\ndescription: d\ndate: 2025-01-05\ncategory: {cat}\n---\n");
        loader.parse(slug, &src).unwrap()
    };
    let posts = vec![mk("a", "RSC"), mk("b", "Security"), mk("c", "rsc"), mk("d", "Gardening")];
    let cats = categories_of(&posts);
    let ids: Vec<&str> = cats.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["all", "rsc", "security", "gardening"]);
    assert_eq!(cats[0].icon, IconKey::Menu);
    assert_eq!(cats[1].label, "RSC");
    assert_eq!(cats[1].icon, IconKey::Component);
    assert_eq!(cats[3].icon, IconKey::Newspaper);
}
