use crate::{
    animation::{ease::Ease, tween::Lerp},
    foundation::{core::Seconds, math::clamp01},
    morph::store::MorphStore,
};

/// Scroll position of a page, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    /// `clamp(scroll_top / max(1, scroll_height - viewport_height), 0, 1)`.
    pub fn progress(&self) -> f64 {
        let scrollable = (self.scroll_height - self.viewport_height).max(1.0);
        let p = self.scroll_top / scrollable;
        if p.is_nan() { 0.0 } else { clamp01(p) }
    }
}

/// Blog post producer: progress follows how far the article has been read.
///
/// Mounting resets the store and enables it; dropping resets it again.
#[derive(Debug)]
pub struct ReadingProgressMorph {
    store: MorphStore,
}

impl ReadingProgressMorph {
    pub fn mount(store: MorphStore) -> Self {
        store.reset();
        store.set_enabled(true);
        Self { store }
    }

    pub fn on_scroll(&self, metrics: &ScrollMetrics) {
        self.store.set_progress(metrics.progress());
    }
}

impl Drop for ReadingProgressMorph {
    fn drop(&mut self) {
        self.store.reset();
    }
}

/// Where the scroll position sits relative to a pinned range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PinRegion {
    Before,
    Inside,
    After,
}

/// Section and digit transforms for the home page hand-off, at the current smoothed progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PinnedFrame {
    /// Smoothed, un-eased progress (what the store receives).
    pub progress: f64,
    /// Incoming section offset, `100` (below) to `0` (in place).
    pub section2_y_percent: f64,
    /// Outgoing section scale, `1` to `0.8`.
    pub section1_scale: f64,
    /// Navbar digit scale, `4` to `1`.
    pub digit_scale: f64,
}

/// Home page producer: a pinned scroll range whose progress is scrubbed toward the scroll
/// position and mirrored into the store.
///
/// Entering the range (from either side) enables the store; leaving it disables it. Mounting
/// and dropping reset the store.
#[derive(Debug)]
pub struct PinnedScrollMorph {
    store: MorphStore,
    start: f64,
    length: f64,
    scrub_secs: Seconds,
    region: PinRegion,
    target: f64,
    smoothed: f64,
}

impl PinnedScrollMorph {
    /// Catch-up time of the scrubbed progress.
    pub const DEFAULT_SCRUB_SECS: Seconds = 1.0;
    /// Curve shared by every transform in the pinned hand-off.
    pub const EASE: Ease = Ease::InOutCubic;
    // ln(100): 99% of the gap is closed after `scrub_secs`.
    const CATCH_UP: f64 = 4.6;

    /// Pin over scroll offsets `[start, start + length)`.
    pub fn mount(store: MorphStore, start: f64, length: f64) -> Self {
        store.reset();
        Self {
            store,
            start,
            length: length.max(1.0),
            scrub_secs: Self::DEFAULT_SCRUB_SECS,
            region: PinRegion::Before,
            target: 0.0,
            smoothed: 0.0,
        }
    }

    pub fn with_scrub_secs(mut self, secs: Seconds) -> Self {
        self.scrub_secs = secs.max(0.0);
        self
    }

    pub fn region(&self) -> PinRegion {
        self.region
    }

    /// Progress the scrub is moving toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    fn region_of(&self, scroll_y: f64) -> PinRegion {
        if scroll_y < self.start {
            PinRegion::Before
        } else if scroll_y >= self.start + self.length {
            PinRegion::After
        } else {
            PinRegion::Inside
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !scroll_y.is_finite() {
            return;
        }
        self.target = clamp01((scroll_y - self.start) / self.length);

        let next = self.region_of(scroll_y);
        if next == self.region {
            return;
        }
        tracing::trace!(from = ?self.region, to = ?next, "pinned range crossing");
        // Enter / enter-back enable, leave / leave-back disable. Jumping over the whole range
        // passes through it, which ends disabled.
        self.store.set_enabled(next == PinRegion::Inside);
        self.region = next;
    }

    /// Scrolling stopped. Inside the range, snap to the nearer end and return the scroll
    /// offset the host should animate to.
    pub fn settle(&mut self) -> Option<f64> {
        if self.region != PinRegion::Inside {
            return None;
        }
        let snapped = if self.target < 0.5 { 0.0 } else { 1.0 };
        self.target = snapped;
        Some(self.start + snapped * self.length)
    }

    /// Move the scrubbed progress toward the target and publish it.
    pub fn tick(&mut self, dt: Seconds) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if self.scrub_secs <= 0.0 {
            self.smoothed = self.target;
        } else {
            let alpha = 1.0 - (-dt * Self::CATCH_UP / self.scrub_secs).exp();
            self.smoothed += (self.target - self.smoothed) * alpha;
            if (self.target - self.smoothed).abs() < 1e-4 {
                self.smoothed = self.target;
            }
        }
        self.store.set_progress(self.smoothed);
    }

    pub fn frame(&self) -> PinnedFrame {
        let e = Self::EASE.apply(self.smoothed);
        PinnedFrame {
            progress: self.smoothed,
            section2_y_percent: <f64 as Lerp>::lerp(&100.0, &0.0, e),
            section1_scale: <f64 as Lerp>::lerp(&1.0, &0.8, e),
            digit_scale: <f64 as Lerp>::lerp(&4.0, &1.0, e),
        }
    }
}

impl Drop for PinnedScrollMorph {
    fn drop(&mut self) {
        self.store.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/scroll.rs"]
mod tests;
