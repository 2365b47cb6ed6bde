use crate::content::posts::BlogPost;

/// Result of [`filter_articles`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FilteredArticles<'a> {
    /// Matching posts, capped by the limit.
    pub items: Vec<&'a BlogPost>,
    /// Number of matches before the cap.
    pub total: usize,
}

/// Filter by category (`"all"` matches everything) and a free-text query over title, intro,
/// category and author names. Both comparisons ignore case; the query is trimmed.
pub fn filter_articles<'a>(
    items: &'a [BlogPost],
    category: &str,
    query: &str,
    limit: Option<usize>,
) -> FilteredArticles<'a> {
    let category = category.to_lowercase();
    let query = query.trim().to_lowercase();

    let matched: Vec<&BlogPost> = items
        .iter()
        .filter(|post| category == "all" || post.category.to_lowercase() == category)
        .filter(|post| query.is_empty() || haystack(post).contains(&query))
        .collect();

    let total = matched.len();
    let items = match limit {
        Some(n) => matched.into_iter().take(n).collect(),
        None => matched,
    };
    FilteredArticles { items, total }
}

fn haystack(post: &BlogPost) -> String {
    let authors: Vec<&str> = post.authors.iter().map(|a| a.name.as_str()).collect();
    [
        post.title.as_str(),
        post.intro.as_str(),
        post.category.as_str(),
        authors.join(" ").as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
#[path = "../../tests/unit/content/filter.rs"]
mod tests;
