use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use crate::transition::{events::Navigator, path::normalize_path};

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingMount {
    href: String,
    frames_left: u32,
}

/// In-memory client router with a history stack and delayed route mounting.
///
/// Navigation updates the location immediately; the destination renders `mount_delay_frames`
/// frames later (on the following [`HeadlessRouter::tick_frame`] when the delay is zero).
/// Paths marked stalled never render.
#[derive(Clone, Debug)]
pub struct HeadlessRouter {
    entries: Vec<String>,
    cursor: usize,
    mount_delay_frames: u32,
    pending: Option<PendingMount>,
    stalled: BTreeSet<String>,
    rendered: Option<String>,
    pushes: Vec<String>,
}

impl HeadlessRouter {
    pub fn new(initial_href: &str, mount_delay_frames: u32) -> Self {
        Self {
            entries: vec![initial_href.to_string()],
            cursor: 0,
            mount_delay_frames,
            pending: Some(PendingMount {
                href: initial_href.to_string(),
                frames_left: 0,
            }),
            stalled: BTreeSet::new(),
            rendered: None,
            pushes: Vec::new(),
        }
    }

    /// Make `path` a route that never finishes rendering.
    pub fn stall(&mut self, path: &str) {
        self.stalled.insert(normalize_path(path));
    }

    /// Current location (href as navigated to).
    pub fn location(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or("/")
    }

    /// Href of the last route that rendered.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Programmatic navigations, in order.
    pub fn pushes(&self) -> &[String] {
        &self.pushes
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Push a new history entry, dropping any forward entries.
    pub fn navigate(&mut self, href: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(href.to_string());
        self.cursor = self.entries.len() - 1;
        self.pushes.push(href.to_string());
        self.schedule(href);
    }

    /// Step back in history. Returns the new location, as a popstate would report it.
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let href = self.location().to_string();
        self.schedule(&href);
        Some(href)
    }

    /// Step forward in history.
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        let href = self.location().to_string();
        self.schedule(&href);
        Some(href)
    }

    fn schedule(&mut self, href: &str) {
        tracing::trace!(%href, delay = self.mount_delay_frames, "route mount scheduled");
        self.pending = Some(PendingMount {
            href: href.to_string(),
            frames_left: self.mount_delay_frames,
        });
    }

    /// Advance one frame. Returns the href that rendered this frame, if any.
    pub fn tick_frame(&mut self) -> Option<String> {
        let pending = self.pending.as_mut()?;
        if pending.frames_left > 0 {
            pending.frames_left -= 1;
            return None;
        }
        let PendingMount { href, .. } = self.pending.take()?;
        if self.stalled.contains(&normalize_path(&href)) {
            tracing::debug!(%href, "route never renders");
            return None;
        }
        self.rendered = Some(href.clone());
        Some(href)
    }
}

/// Shared handle usable as the sequencer's [`Navigator`].
#[derive(Clone, Debug)]
pub struct RouterHandle(pub Rc<RefCell<HeadlessRouter>>);

impl Navigator for RouterHandle {
    fn push(&mut self, href: &str) {
        self.0.borrow_mut().navigate(href);
    }
}

/// Query string of `href` without `?`, fragment removed.
pub fn search_of(href: &str) -> &str {
    let before_fragment = href.split('#').next().unwrap_or("");
    match before_fragment.split_once('?') {
        Some((_, search)) => search,
        None => "",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/router.rs"]
mod tests;
