use std::collections::HashMap;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::transition::events::{TransitionEvent, TransitionObserver};

pub const OUTLINE_SIDE_WIDTH: f64 = 240.0;
pub const OUTLINE_MIN_WIDTH: f64 = 190.0;
pub const OUTLINE_SIDE_GAP: f64 = 28.0;
pub const STICKY_TOP_OFFSET: f64 = 113.0;
/// Narrowest viewport that may place the outline beside the article.
pub const SIDE_MIN_VIEWPORT_WIDTH: f64 = 1200.0;
/// Look-ahead added to the scroll position when picking the active heading.
pub const ACTIVE_HEADING_OFFSET: f64 = 140.0;
const OVERLAY_MIN_WIDTH: f64 = 200.0;
const OVERLAY_MAX_WIDTH: f64 = 320.0;
const OVERLAY_VIEWPORT_MARGIN: f64 = 36.0;
const OVERLAY_RIGHT: f64 = 18.0;
const MOBILE_BAR_BOTTOM: f64 = 65.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OutlineItem {
    pub id: String,
    pub title: String,
    /// `2` or `3`.
    pub level: u8,
}

/// Lower-case, keep `[a-z0-9]`, whitespace and `-`, then collapse whitespace and dashes.
pub fn slugify_heading(value: &str) -> String {
    let kept: String = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();
    let mut out = String::with_capacity(kept.len());
    for word in kept.split_whitespace() {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(word);
    }
    let mut collapsed = String::with_capacity(out.len());
    for c in out.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// Level-2 and level-3 headings of a markdown document, with unique ids.
///
/// An explicit `{#id}` wins over the slugified title; blank titles read "Section"; repeated
/// ids get `-1`, `-2`, ... suffixes.
pub fn extract_outline(markdown: &str) -> Vec<OutlineItem> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES);

    let mut raw: Vec<(u8, Option<String>, String)> = Vec::new();
    let mut current: Option<(u8, Option<String>, String)> = None;
    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let level = match level {
                    HeadingLevel::H2 => 2,
                    HeadingLevel::H3 => 3,
                    _ => continue,
                };
                current = Some((level, id.map(|s| s.to_string()), String::new()));
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, _, text)) = current.as_mut() {
                    text.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, _, text)) = current.as_mut() {
                    text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(h) = current.take() {
                    raw.push(h);
                }
            }
            _ => {}
        }
    }

    let mut occurrences: HashMap<String, usize> = HashMap::new();
    raw.into_iter()
        .map(|(level, explicit_id, text)| {
            let title = match text.trim() {
                "" => "Section".to_string(),
                t => t.to_string(),
            };
            let base = explicit_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| slugify_heading(&title));
            let base = if base.is_empty() { "section".to_string() } else { base };
            let seen = occurrences.entry(base.clone()).or_insert(0);
            let id = if *seen == 0 { base } else { format!("{base}-{seen}") };
            *seen += 1;
            OutlineItem { id, title, level }
        })
        .collect()
}

/// A rendered heading's vertical position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadingOffset {
    pub id: String,
    pub offset_top: f64,
}

/// Last heading at or above `scroll_y + 140`, defaulting to the first heading.
pub fn active_heading(headings: &[HeadingOffset], scroll_y: f64) -> Option<&str> {
    let line = scroll_y + ACTIVE_HEADING_OFFSET;
    let mut current = headings.first()?;
    for h in headings {
        if h.offset_top <= line {
            current = h;
        } else {
            break;
        }
    }
    Some(current.id.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineMode {
    Side,
    Overlay,
}

/// Where the outline panel is anchored, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "anchor", rename_all = "snake_case")]
pub enum OutlinePosition {
    /// Beside the article's right edge.
    Side { top: f64, left: f64 },
    /// Floating at the right edge of the viewport.
    Overlay { top: f64, right: f64 },
    /// Above the mobile action bar, horizontally centred.
    MobileBar { bottom: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OutlineLayout {
    pub mode: OutlineMode,
    pub width: f64,
    pub position: OutlinePosition,
}

impl OutlineLayout {
    /// Place the outline for an article whose bounding box has the given `top` and `right`.
    pub fn place(
        article_top: f64,
        article_right: f64,
        viewport_width: f64,
        mobile_bar_active: bool,
    ) -> Self {
        let top = STICKY_TOP_OFFSET.max(article_top.round());
        let available = (viewport_width - article_right - OUTLINE_SIDE_GAP)
            .floor()
            .max(0.0);

        if viewport_width >= SIDE_MIN_VIEWPORT_WIDTH && available >= OUTLINE_MIN_WIDTH {
            return Self {
                mode: OutlineMode::Side,
                width: OUTLINE_SIDE_WIDTH.min(OUTLINE_MIN_WIDTH.max(available)),
                position: OutlinePosition::Side {
                    top,
                    left: (article_right + OUTLINE_SIDE_GAP).round(),
                },
            };
        }

        let width = OVERLAY_MAX_WIDTH
            .min(OVERLAY_MIN_WIDTH.max((viewport_width - OVERLAY_VIEWPORT_MARGIN).floor()));
        let position = if mobile_bar_active {
            OutlinePosition::MobileBar {
                bottom: MOBILE_BAR_BOTTOM,
            }
        } else {
            OutlinePosition::Overlay {
                top,
                right: OVERLAY_RIGHT,
            }
        };
        Self {
            mode: OutlineMode::Overlay,
            width,
            position,
        }
    }
}

/// Open/closed state of the outline panel.
///
/// Until the reader toggles it, the panel follows the layout: open beside the article, closed
/// as an overlay. Transitions always close it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutlinePanel {
    open: bool,
    user_toggled: bool,
    mode: Option<OutlineMode>,
}

impl OutlinePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply_layout(&mut self, layout: &OutlineLayout) {
        self.mode = Some(layout.mode);
        if !self.user_toggled {
            self.open = layout.mode == OutlineMode::Side;
        }
    }

    pub fn toggle(&mut self) {
        self.user_toggled = true;
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A heading link was followed; overlays get out of the way.
    pub fn on_navigate(&mut self) {
        if self.mode == Some(OutlineMode::Overlay) {
            self.open = false;
        }
    }

}

impl TransitionObserver for OutlinePanel {
    fn on_transition_event(&mut self, event: TransitionEvent) {
        if event == TransitionEvent::Start {
            self.close();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/outline.rs"]
mod tests;
