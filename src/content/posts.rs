use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{
    config::ContentConfig,
    content::frontmatter::{Frontmatter, split_frontmatter},
    foundation::error::{SegueError, SegueResult},
};

/// Icon shown next to a post or category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKey {
    #[default]
    Newspaper,
    GitBranch,
    Shield,
    Database,
    FileCode,
    Component,
    Menu,
    Cpu,
}

impl IconKey {
    pub const ALL: [IconKey; 8] = [
        IconKey::Newspaper,
        IconKey::GitBranch,
        IconKey::Shield,
        IconKey::Database,
        IconKey::FileCode,
        IconKey::Component,
        IconKey::Menu,
        IconKey::Cpu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newspaper => "newspaper",
            Self::GitBranch => "gitBranch",
            Self::Shield => "shield",
            Self::Database => "database",
            Self::FileCode => "fileCode",
            Self::Component => "component",
            Self::Menu => "menu",
            Self::Cpu => "cpu",
        }
    }

    /// Icon for a category id (lower-cased category name).
    pub fn for_category(id: &str) -> Self {
        match id {
            "all" => Self::Menu,
            "compute" => Self::Cpu,
            "migration" => Self::GitBranch,
            "security" => Self::Shield,
            "next.js" => Self::FileCode,
            "caching" => Self::Database,
            "rsc" => Self::Component,
            _ => Self::Newspaper,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Author {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// One loaded post, as listing and detail pages consume it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    /// `/blog/<slug>`.
    pub href: String,
    pub title: String,
    /// Description from the header.
    pub intro: String,
    pub date_time: DateTime<Utc>,
    /// `"Jan 5"`.
    pub date_label: String,
    /// `"January 5, 2025"`.
    pub full_date_label: String,
    pub authors: Vec<Author>,
    pub category: String,
    pub icon: IconKey,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    /// `"N min read"`.
    pub reading_time: String,
    /// Document body after the header.
    #[serde(skip)]
    pub body: String,
}

/// Entry of the category filter bar.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
    pub icon: IconKey,
}

/// `max(1, ceil(words / words_per_minute))` minutes.
pub fn reading_time(body: &str, words_per_minute: u32) -> String {
    let words = body.split_whitespace().count() as u64;
    let wpm = u64::from(words_per_minute.max(1));
    let minutes = words.div_ceil(wpm).max(1);
    format!("{minutes} min read")
}

/// RFC 3339, `YYYY-MM-DD` (midnight UTC) or `YYYY-MM-DDTHH:MM:SS` (UTC). Anything else is `now`.
pub fn parse_post_date(raw: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.and_utc();
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return dt.and_utc();
    }
    tracing::debug!(raw, "unparseable post date; using now");
    now
}

pub fn short_date_label(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d").to_string()
}

pub fn full_date_label(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// Reject slugs that could escape the content root.
pub fn validate_slug(slug: &str) -> SegueResult<()> {
    if slug.is_empty()
        || slug.contains(['/', '\\', '\0'])
        || slug.contains("..")
    {
        return Err(SegueError::validation(format!("invalid post slug {slug:?}")));
    }
    Ok(())
}

/// Reads posts from a directory of fenced-header documents.
#[derive(Clone, Debug)]
pub struct ContentLoader {
    config: ContentConfig,
    now: DateTime<Utc>,
    lenient: bool,
}

impl ContentLoader {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            config,
            now: Utc::now(),
            lenient: false,
        }
    }

    /// Fixed fallback for unparseable dates.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Skip (and log) posts that fail to load instead of failing the whole listing.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    fn path_for(&self, slug: &str) -> PathBuf {
        self.config
            .root
            .join(format!("{slug}.{}", self.config.extension))
    }

    fn file_name(&self, slug: &str) -> String {
        format!("{slug}.{}", self.config.extension)
    }

    /// Slugs of every file with the configured extension, sorted. A missing root is empty.
    fn collect_slugs(&self) -> SegueResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.config.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(root = %self.config.root.display(), error = %e, "content root unreadable");
                return Ok(Vec::new());
            }
        };
        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("read content dir '{}'", self.config.root.display())
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let ext_matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == self.config.extension);
            if !ext_matches {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    fn load(&self, slug: &str) -> SegueResult<BlogPost> {
        let path = self.path_for(slug);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("read post '{}'", path.display()))?;
        self.parse(slug, &source)
    }

    /// Build a post from document source.
    pub fn parse(&self, slug: &str, source: &str) -> SegueResult<BlogPost> {
        let (yaml, body) = split_frontmatter(source);
        let fm = Frontmatter::parse(yaml, &self.file_name(slug), &self.config.fallback_author)?;
        let date_time = parse_post_date(&fm.date, self.now);
        Ok(BlogPost {
            slug: slug.to_string(),
            href: format!("/blog/{slug}"),
            title: fm.title,
            intro: fm.description,
            date_time,
            date_label: short_date_label(&date_time),
            full_date_label: full_date_label(&date_time),
            authors: fm.authors,
            category: fm.category,
            icon: fm.icon,
            tags: fm.tags,
            hero_image: fm.hero_image,
            reading_time: reading_time(body, self.config.words_per_minute),
            body: body.to_string(),
        })
    }

    /// Every post, newest first.
    #[tracing::instrument(skip(self), fields(root = %self.config.root.display()))]
    pub fn list(&self) -> SegueResult<Vec<BlogPost>> {
        let mut posts = Vec::new();
        for slug in self.collect_slugs()? {
            match self.load(&slug) {
                Ok(post) => posts.push(post),
                Err(e) if self.lenient => {
                    tracing::warn!(%slug, error = %e, "skipping post");
                }
                Err(e) => return Err(e),
            }
        }
        posts.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        tracing::debug!(count = posts.len(), "posts loaded");
        Ok(posts)
    }

    /// One post, or `None` when no file exists for `slug`.
    #[tracing::instrument(skip(self))]
    pub fn post(&self, slug: &str) -> SegueResult<Option<BlogPost>> {
        validate_slug(slug)?;
        if !self.path_for(slug).is_file() {
            return Ok(None);
        }
        self.load(slug).map(Some)
    }

    /// Slugs of every listed post, newest first.
    pub fn slugs(&self) -> SegueResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|p| p.slug).collect())
    }

    /// `All` followed by each distinct category in listing order.
    pub fn categories(&self) -> SegueResult<Vec<CategoryOption>> {
        Ok(categories_of(&self.list()?))
    }
}

/// `All` followed by each distinct category (case-insensitive) in first-seen order.
pub fn categories_of(posts: &[BlogPost]) -> Vec<CategoryOption> {
    let mut out = vec![CategoryOption {
        id: "all".to_string(),
        label: "All".to_string(),
        icon: IconKey::Menu,
    }];
    for post in posts {
        let id = post.category.to_lowercase();
        if out.iter().any(|c| c.id == id) {
            continue;
        }
        out.push(CategoryOption {
            icon: IconKey::for_category(&id),
            id,
            label: post.category.clone(),
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/content/posts.rs"]
mod tests;
