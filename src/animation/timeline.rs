use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::Seconds,
};

#[derive(Clone, Debug)]
enum StepKind<K, C> {
    Tween { channel: K, tween: Tween<f64> },
    Set { channel: K, value: f64 },
    Cue(C),
    Hold,
}

#[derive(Clone, Debug)]
struct Step<K, C> {
    start: Seconds,
    duration: Seconds,
    kind: StepKind<K, C>,
    done: bool,
}

impl<K, C> Step<K, C> {
    fn end(&self) -> Seconds {
        self.start + self.duration
    }
}

/// Lifecycle of a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TimelineState {
    /// Still has unfinished steps.
    Running,
    /// Every step has been applied; completion was reported once.
    Completed,
    /// Stopped by [`Timeline::kill`]; nothing further is applied.
    Killed,
}

/// Output of one [`Timeline::advance`] call, in application order.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineTick<K, C> {
    /// Channel values written this tick. Later entries win for the same channel.
    pub values: Vec<(K, f64)>,
    /// Cues reached this tick.
    pub cues: Vec<C>,
    /// `true` exactly once, on the tick that finished the last step.
    pub completed: bool,
}

impl<K, C> TimelineTick<K, C> {
    fn empty() -> Self {
        Self {
            values: Vec::new(),
            cues: Vec::new(),
            completed: false,
        }
    }

    /// Last value written to `channel` this tick, if any.
    pub fn value(&self, channel: K) -> Option<f64>
    where
        K: PartialEq,
    {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| *k == channel)
            .map(|(_, v)| *v)
    }
}

/// A sequence of tweens, holds, sets and cues driven by frame deltas.
///
/// Steps are appended back to back; [`Timeline::tween_at`] places a tween at an absolute offset
/// without moving the append position, so it runs in parallel with whatever follows.
#[derive(Clone, Debug)]
pub struct Timeline<K, C> {
    steps: Vec<Step<K, C>>,
    cursor: Seconds,
    elapsed: Seconds,
    state: TimelineState,
}

impl<K, C> Default for Timeline<K, C> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            cursor: 0.0,
            elapsed: 0.0,
            state: TimelineState::Running,
        }
    }
}

impl<K, C> Timeline<K, C>
where
    K: Copy,
    C: Clone,
{
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, start: Seconds, duration: Seconds, kind: StepKind<K, C>) -> Self {
        self.steps.push(Step {
            start,
            duration: duration.max(0.0),
            kind,
            done: false,
        });
        self
    }

    /// Append a tween of `channel` from `from` to `to`.
    pub fn tween(self, channel: K, from: f64, to: f64, duration: Seconds, ease: Ease) -> Self {
        let start = self.cursor;
        let duration = duration.max(0.0);
        let mut tl = self.push(
            start,
            duration,
            StepKind::Tween {
                channel,
                tween: Tween::new(from, to, duration, ease),
            },
        );
        tl.cursor += duration;
        tl
    }

    /// Place a tween at absolute offset `at` without moving the append position.
    pub fn tween_at(
        self,
        at: Seconds,
        channel: K,
        from: f64,
        to: f64,
        duration: Seconds,
        ease: Ease,
    ) -> Self {
        let duration = duration.max(0.0);
        self.push(
            at.max(0.0),
            duration,
            StepKind::Tween {
                channel,
                tween: Tween::new(from, to, duration, ease),
            },
        )
    }

    /// Append an idle gap.
    pub fn hold(self, duration: Seconds) -> Self {
        let start = self.cursor;
        let duration = duration.max(0.0);
        let mut tl = self.push(start, duration, StepKind::Hold);
        tl.cursor += duration;
        tl
    }

    /// Append an instantaneous write of `value` to `channel`.
    pub fn set(self, channel: K, value: f64) -> Self {
        let start = self.cursor;
        self.push(start, 0.0, StepKind::Set { channel, value })
    }

    /// Append an instantaneous cue.
    pub fn cue(self, cue: C) -> Self {
        let start = self.cursor;
        self.push(start, 0.0, StepKind::Cue(cue))
    }

    /// Total length: the latest step end.
    pub fn duration(&self) -> Seconds {
        self.steps.iter().map(Step::end).fold(0.0, f64::max)
    }

    /// Seconds advanced so far.
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// `true` while steps are still pending.
    pub fn is_running(&self) -> bool {
        self.state == TimelineState::Running
    }

    /// Stop immediately. No further values, cues or completion are reported.
    pub fn kill(&mut self) {
        if self.state == TimelineState::Running {
            self.state = TimelineState::Killed;
        }
    }

    /// Move time forward by `dt` seconds and report what changed.
    ///
    /// `advance(0.0)` applies every step positioned at the current time, which is how a freshly
    /// built timeline applies its leading sets.
    pub fn advance(&mut self, dt: Seconds) -> TimelineTick<K, C> {
        let mut tick = TimelineTick::empty();
        if self.state != TimelineState::Running {
            return tick;
        }

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let now = self.elapsed;

        for step in self.steps.iter_mut().filter(|s| !s.done) {
            if now >= step.end() {
                match &step.kind {
                    StepKind::Tween { channel, tween } => tick.values.push((*channel, tween.to)),
                    StepKind::Set { channel, value } => tick.values.push((*channel, *value)),
                    StepKind::Cue(cue) => tick.cues.push(cue.clone()),
                    StepKind::Hold => {}
                }
                step.done = true;
            } else if now >= step.start {
                if let StepKind::Tween { channel, tween } = &step.kind {
                    tick.values.push((*channel, tween.sample(now - step.start)));
                }
            }
        }

        if self.steps.iter().all(|s| s.done) {
            self.state = TimelineState::Completed;
            tick.completed = true;
        }
        tick
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
