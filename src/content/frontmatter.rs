use crate::{
    content::posts::{Author, IconKey},
    foundation::error::{SegueError, SegueResult},
};

/// Split a `---` fenced YAML header from the document body.
///
/// Returns `(None, source)` when the document does not open with a complete fence.
pub fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let s = source.strip_prefix('\u{feff}').unwrap_or(source);
    let Some(after_fence) = s.strip_prefix("---") else {
        return (None, s);
    };
    let Some(rest) = after_fence
        .strip_prefix("\r\n")
        .or_else(|| after_fence.strip_prefix('\n'))
    else {
        return (None, s);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, s)
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawAuthor {
    name: String,
    url: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawFrontmatter {
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    category: Option<String>,
    authors: Option<Vec<RawAuthor>>,
    icon: Option<IconKey>,
    tags: Option<Vec<String>>,
    #[serde(rename = "heroImage")]
    hero_image: Option<String>,
}

/// Normalized post header.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    /// Date as written; parsed later.
    pub date: String,
    pub category: String,
    /// Never empty: falls back to the configured author.
    pub authors: Vec<Author>,
    pub icon: IconKey,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

impl Frontmatter {
    /// Parse and normalize a YAML header. `file_name` is only used in error messages.
    pub fn parse(yaml: Option<&str>, file_name: &str, fallback_author: &str) -> SegueResult<Self> {
        let value: serde_yaml::Value = match yaml {
            Some(y) => serde_yaml::from_str(y).map_err(|e| {
                SegueError::content(format!("invalid frontmatter in {file_name}: {e}"))
            })?,
            None => serde_yaml::Value::Null,
        };
        let raw: RawFrontmatter = if value.is_null() {
            RawFrontmatter::default()
        } else {
            serde_yaml::from_value(value).map_err(|e| {
                SegueError::content(format!("invalid frontmatter in {file_name}: {e}"))
            })?
        };

        let title = required(raw.title, "title", file_name)?;
        let description = required(raw.description, "description", file_name)?;
        let date = required(raw.date, "date", file_name)?;
        let category = required(raw.category, "category", file_name)?;

        let authors: Vec<Author> = raw
            .authors
            .unwrap_or_default()
            .into_iter()
            .map(|a| Author {
                name: a.name,
                url: a.url,
            })
            .collect();
        let authors = if authors.is_empty() {
            vec![Author::named(fallback_author)]
        } else {
            authors
        };

        Ok(Self {
            title,
            description,
            date,
            category,
            authors,
            icon: raw.icon.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            hero_image: raw.hero_image,
        })
    }
}

fn required(value: Option<String>, field: &str, file_name: &str) -> SegueResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SegueError::content(format!(
            "missing required frontmatter field \"{field}\" in {file_name}"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/frontmatter.rs"]
mod tests;
