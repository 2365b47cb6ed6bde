use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::foundation::math::clamp01;

/// Shared value driving scroll-linked effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphState {
    /// A producer is active on the current page.
    pub enabled: bool,
    /// Normalized progress in `[0, 1]`.
    pub progress: f64,
}

type Listener = Rc<RefCell<dyn FnMut(MorphState)>>;

#[derive(Default)]
struct Inner {
    state: MorphState,
    next_id: u64,
    // Bumped by every notify; an outer walk stops once a nested write supersedes it.
    generation: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Inner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Process-wide morph state with synchronous publish/subscribe.
///
/// Cloning yields another handle on the same store. Writes that do not change the value notify
/// nobody; every effective write notifies each current listener once with the new snapshot.
/// Notification walks a snapshot of the listener list, so listeners may subscribe, unsubscribe
/// or write from inside a callback. A listener is never re-entered: nested writes skip the
/// listener that is currently running, which is called again with the newer value once it
/// returns. Each listener's last delivery is always the current value.
#[derive(Clone, Default)]
pub struct MorphStore {
    inner: Rc<RefCell<Inner>>,
}

impl MorphStore {
    /// Fresh store at `{ enabled: false, progress: 0 }`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&self, enabled: bool) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.state.enabled != enabled;
            inner.state.enabled = enabled;
            changed
        };
        if changed {
            self.notify();
        }
    }

    /// Clamp into `[0, 1]` and store. NaN is ignored.
    pub fn set_progress(&self, progress: f64) {
        if progress.is_nan() {
            return;
        }
        let progress = clamp01(progress);
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.state.progress != progress;
            inner.state.progress = progress;
            changed
        };
        if changed {
            self.notify();
        }
    }

    /// Back to `{ false, 0 }`, notifying once if anything changed.
    pub fn reset(&self) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.state != MorphState::default();
            inner.state = MorphState::default();
            changed
        };
        if changed {
            self.notify();
        }
    }

    /// Register `listener` and call it immediately with the current snapshot.
    pub fn subscribe(&self, listener: impl FnMut(MorphState) + 'static) -> MorphSubscription {
        let listener: Listener = Rc::new(RefCell::new(listener));
        let (id, generation, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            (id, inner.generation, inner.state)
        };
        if let Ok(mut f) = listener.try_borrow_mut() {
            self.deliver(id, &mut *f, generation, snapshot);
        }
        MorphSubscription {
            store: Rc::downgrade(&self.inner),
            id,
            active: true,
        }
    }

    pub fn get_snapshot(&self) -> MorphState {
        self.inner.borrow().state
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        let (generation, snapshot, listeners) = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            let listeners: Vec<(u64, Listener)> = inner
                .listeners
                .iter()
                .map(|(id, l)| (*id, Rc::clone(l)))
                .collect();
            (inner.generation, inner.state, listeners)
        };
        tracing::trace!(?snapshot, listeners = listeners.len(), "morph notify");

        for (id, listener) in listeners {
            if !self.inner.borrow().is_subscribed(id) {
                continue;
            }
            let Ok(mut f) = listener.try_borrow_mut() else {
                continue;
            };
            if self.deliver(id, &mut *f, generation, snapshot) != generation {
                // The nested notify already reached every other listener with newer state.
                return;
            }
        }
    }

    /// Call `f` with `snapshot`, then again for as long as it keeps writing from inside the
    /// call. Returns the generation last delivered.
    fn deliver(
        &self,
        id: u64,
        f: &mut (dyn FnMut(MorphState) + 'static),
        mut generation: u64,
        mut snapshot: MorphState,
    ) -> u64 {
        loop {
            f(snapshot);
            let inner = self.inner.borrow();
            if inner.generation == generation || !inner.is_subscribed(id) {
                return generation;
            }
            // The nested notify skipped this listener while it was running.
            generation = inner.generation;
            snapshot = inner.state;
        }
    }

    fn unsubscribe(inner: &RefCell<Inner>, id: u64) {
        inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }
}

impl std::fmt::Debug for MorphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MorphStore")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Live registration on a [`MorphStore`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct MorphSubscription {
    store: Weak<RefCell<Inner>>,
    id: u64,
    active: bool,
}

impl MorphSubscription {
    /// Unsubscribe now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(inner) = self.store.upgrade() {
            MorphStore::unsubscribe(&inner, self.id);
        }
    }
}

impl Drop for MorphSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/store.rs"]
mod tests;
