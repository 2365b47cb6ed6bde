use crate::transition::events::RouteReady;

/// Turns route renders into readiness signals delivered at the next paint boundary.
///
/// A render schedules a signal; [`RouteReadyAnnouncer::on_animation_frame`] hands it out once.
/// A newer render before that frame replaces the scheduled signal, and a render whose pathname
/// and query match the previous render schedules nothing.
#[derive(Clone, Debug, Default)]
pub struct RouteReadyAnnouncer {
    last_rendered: Option<RouteReady>,
    scheduled: Option<RouteReady>,
}

impl RouteReadyAnnouncer {
    /// Create an announcer that has seen no render yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A client-side route finished rendering. Returns `true` when a signal was scheduled.
    pub fn on_route_render(&mut self, pathname: &str, search: &str) -> bool {
        let search = search.strip_prefix('?').unwrap_or(search);
        let signal = RouteReady::new(pathname, search);
        if self.last_rendered.as_ref() == Some(&signal) {
            return false;
        }
        if let Some(replaced) = self.scheduled.replace(signal.clone()) {
            tracing::trace!(pathname = %replaced.pathname, "superseded readiness signal");
        }
        self.last_rendered = Some(signal);
        true
    }

    /// Next paint boundary: dispatch the scheduled signal, if any.
    pub fn on_animation_frame(&mut self) -> Option<RouteReady> {
        let signal = self.scheduled.take()?;
        tracing::debug!(pathname = %signal.pathname, search = %signal.search, "route ready");
        Some(signal)
    }

    /// Drop a scheduled signal without dispatching it.
    pub fn cancel(&mut self) {
        self.scheduled = None;
    }

    /// `true` while a signal waits for the next frame.
    pub fn has_scheduled(&self) -> bool {
        self.scheduled.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/announcer.rs"]
mod tests;
