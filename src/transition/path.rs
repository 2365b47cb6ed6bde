//! Href normalization and transition-label derivation.

/// Reduce an href to its pathname.
///
/// Accepts absolute URLs (`https://host/a?b#c`), protocol-relative URLs (`//host/a`), rooted
/// paths and relative paths (resolved against `/`). Query and fragment are dropped, `.` and
/// `..` segments are resolved, and anything that yields no path becomes `/`. Never fails.
pub fn normalize_path(href: &str) -> String {
    let s = href.trim();
    if s.is_empty() {
        return "/".to_string();
    }
    let s = s.replace('\\', "/");

    let rest = match split_scheme(&s) {
        Some((_, after)) => after,
        None => s.as_str(),
    };
    let path_part = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let path_start = authority_and_path
                .find(['/', '?', '#'])
                .unwrap_or(authority_and_path.len());
            &authority_and_path[path_start..]
        }
        None => rest,
    };

    let end = path_part.find(['?', '#']).unwrap_or(path_part.len());
    resolve_dot_segments(&path_part[..end])
}

fn split_scheme(s: &str) -> Option<(&str, &str)> {
    let colon = s.find(':')?;
    let scheme = &s[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, &s[colon + 1..]))
}

fn resolve_dot_segments(raw: &str) -> String {
    let body = raw.strip_prefix('/').unwrap_or(raw);
    let parts: Vec<&str> = body.split('/').collect();
    let last = parts.len().saturating_sub(1);

    let mut out = Vec::<&str>::with_capacity(parts.len());
    for (i, part) in parts.iter().enumerate() {
        match *part {
            "." => {
                if i == last {
                    out.push("");
                }
            }
            ".." => {
                out.pop();
                if i == last {
                    out.push("");
                }
            }
            p => out.push(p),
        }
    }
    format!("/{}", out.join("/"))
}

/// Human label for a path: `"/"` is `"Home"`, `"/blog/my-post"` is `"Blog / My Post"`.
pub fn derive_label(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "Home".to_string();
    }
    let label = path
        .strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| title_case_words(&seg.replace('-', " ")))
        .collect::<Vec<_>>()
        .join(" / ");
    if label.is_empty() {
        "Home".to_string()
    } else {
        label
    }
}

fn title_case_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Display form of a label.
pub fn format_label(label: &str) -> String {
    label.to_uppercase()
}

/// Pick the caller's label when it has content, otherwise derive one from `normalized_path`.
pub fn resolve_label(label: Option<&str>, normalized_path: &str) -> String {
    match label.filter(|l| !l.trim().is_empty()) {
        Some(l) => format_label(l),
        None => format_label(&derive_label(normalized_path)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/path.rs"]
mod tests;
