use crate::foundation::error::{SegueError, SegueResult};

/// Time in seconds, as fed to `tick(dt)` by the host's animation scheduler.
pub type Seconds = f64;

/// Absolute 0-based frame counter of a driven session.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SegueResult<Self> {
        if den == 0 {
            return Err(SegueError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SegueError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> Seconds {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to frame count, rounding up so the full span is covered.
    pub fn secs_to_frames_ceil(self, secs: Seconds) -> u64 {
        (secs * self.as_f64() - 1e-9).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
