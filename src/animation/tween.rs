use crate::{animation::ease::Ease, foundation::core::Seconds};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

/// A single eased interpolation over a fixed duration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T> {
    /// Value at local time `0`.
    pub from: T,
    /// Value at local time `duration` and after.
    pub to: T,
    /// Length in seconds; zero-length tweens jump straight to `to`.
    pub duration: Seconds,
    /// Curve applied to normalized progress.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Create a tween.
    pub fn new(from: T, to: T, duration: Seconds, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
        }
    }

    /// Normalized, un-eased progress at `local` seconds.
    pub fn progress(&self, local: Seconds) -> f64 {
        if self.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration).clamp(0.0, 1.0)
    }

    /// Sample the tween at `local` seconds since its start.
    pub fn sample(&self, local: Seconds) -> T {
        let p = self.progress(local);
        if p <= 0.0 {
            return self.from.clone();
        }
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    /// Sample at normalized progress `p` (used by scroll-scrubbed animations).
    pub fn sample_progress(&self, p: f64) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
