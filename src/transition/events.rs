/// Process-wide lifecycle signals broadcast by the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TransitionEvent {
    /// A transition was accepted and the cover is about to play.
    Start,
    /// The overlay is hidden again, after a reveal or a page-cache abort.
    End,
}

/// Consumer of [`TransitionEvent`]s (custom cursor reset, mobile menu auto-close, ...).
pub trait TransitionObserver {
    /// Called synchronously for every event, in subscription order.
    fn on_transition_event(&mut self, event: TransitionEvent);
}

impl<F> TransitionObserver for F
where
    F: FnMut(TransitionEvent),
{
    fn on_transition_event(&mut self, event: TransitionEvent) {
        self(event)
    }
}

/// Handle returned by [`TransitionEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Explicit, enumerable registry of transition observers.
#[derive(Default)]
pub struct TransitionEvents {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn TransitionObserver>)>,
}

impl TransitionEvents {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: Box<dyn TransitionObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Registered observer ids, in notification order.
    pub fn ids(&self) -> Vec<ObserverId> {
        self.observers.iter().map(|(id, _)| *id).collect()
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// `true` when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn emit(&mut self, event: TransitionEvent) {
        tracing::trace!(?event, observers = self.observers.len(), "emit transition event");
        for (_, observer) in &mut self.observers {
            observer.on_transition_event(event);
        }
    }
}

impl std::fmt::Debug for TransitionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionEvents")
            .field("observers", &self.ids())
            .finish()
    }
}

/// Client-side router seam: issues the programmatic navigation.
pub trait Navigator {
    /// Navigate to `href` without a full page load.
    fn push(&mut self, href: &str);
}

/// Signal that a route finished its first client-side render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteReady {
    /// Rendered pathname.
    pub pathname: String,
    /// Query string without the leading `?` (may be empty).
    pub search: String,
}

impl RouteReady {
    /// Build a readiness signal.
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }
}

/// A navigation-with-animation request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionRequest {
    /// Destination href as written in the link.
    pub destination_path: String,
    /// Optional label shown on the overlay; derived from the path when absent.
    pub label: Option<String>,
}

impl TransitionRequest {
    /// Request without an explicit label.
    pub fn new(destination_path: impl Into<String>) -> Self {
        Self {
            destination_path: destination_path.into(),
            label: None,
        }
    }

    /// Attach an explicit overlay label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/events.rs"]
mod tests;
