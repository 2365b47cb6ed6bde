use crate::{
    animation::{ease::Ease, scramble::Scrambler, timeline::Timeline, timeline::TimelineTick},
    config::TransitionConfig,
    foundation::core::Seconds,
    transition::{
        events::{Navigator, RouteReady, TransitionEvent, TransitionEvents, TransitionRequest},
        join::{JoinParty, JoinStatus, RevealJoin},
        path::{normalize_path, resolve_label},
    },
};

/// Panel offset (percent of its own height) when parked below the viewport.
pub const PANEL_PARKED: f64 = 100.0;
/// Panel offset when fully covering the viewport.
pub const PANEL_COVERING: f64 = 0.0;
/// Panel offset at the end of the reveal slide.
pub const PANEL_REVEALED: f64 = -100.0;

/// Explicit states of the transition machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Overlay hidden, nothing pending.
    #[default]
    Idle,
    /// Panel sliding in over the current page.
    Covering,
    /// Panel in place; label scrambling and/or waiting for the destination to render.
    AwaitingReveal,
    /// Hold, label fade and panel slide-out.
    Revealing,
}

/// State of the one accepted transition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct InternalTransitionState {
    /// Href as requested.
    pub destination_path: String,
    /// Pathname the readiness signal must match.
    pub normalized_path: String,
    /// Upper-cased overlay label.
    pub resolved_label: String,
}

/// Everything a renderer needs to draw the overlay this frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayFrame {
    /// Overlay shown at all.
    pub visible: bool,
    /// Overlay captures pointer input.
    pub interactive: bool,
    /// Panel vertical offset, percent of its height (`100` parked, `0` covering).
    pub panel_y_percent: f64,
    /// Label text as currently scrambled.
    pub label_text: String,
    /// Label opacity in `[0, 1]`.
    pub label_opacity: f64,
}

impl OverlayFrame {
    /// The resting overlay: hidden, parked panel, empty label.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            interactive: false,
            panel_y_percent: PANEL_PARKED,
            label_text: String::new(),
            label_opacity: 0.0,
        }
    }
}

impl Default for OverlayFrame {
    fn default() -> Self {
        Self::hidden()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    PanelY,
    LabelOpacity,
    ScrambleClock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cue {
    PanelInPlace,
}

type OverlayTimeline = Timeline<Channel, Cue>;

/// Cover / label / reveal state machine for in-app navigation.
///
/// Driven by discrete calls from the host (`start_transition`, `on_route_ready`,
/// `on_history_navigation`, `on_page_show`) and by `tick(dt)` once per animation frame. At most
/// one transition is in flight; requests made while one is active are dropped.
pub struct TransitionSequencer {
    config: TransitionConfig,
    navigator: Box<dyn Navigator>,
    events: TransitionEvents,

    phase: Phase,
    pending: Option<InternalTransitionState>,
    push_on_cover: bool,
    join: RevealJoin,

    cover: Option<OverlayTimeline>,
    scramble: Option<(OverlayTimeline, Scrambler)>,
    reveal: Option<OverlayTimeline>,

    overlay: OverlayFrame,
    last_known_path: String,
    clock: Seconds,
}

impl TransitionSequencer {
    /// Create an idle sequencer for a session currently showing `current_path`.
    pub fn new(
        config: TransitionConfig,
        navigator: Box<dyn Navigator>,
        current_path: &str,
    ) -> Self {
        Self {
            config,
            navigator,
            events: TransitionEvents::new(),
            phase: Phase::Idle,
            pending: None,
            push_on_cover: false,
            join: RevealJoin::new(),
            cover: None,
            scramble: None,
            reveal: None,
            overlay: OverlayFrame::hidden(),
            last_known_path: normalize_path(current_path),
            clock: 0.0,
        }
    }

    /// Request a navigation with animation. Fire-and-forget.
    ///
    /// Same-path requests become a plain navigation; requests made while a transition is active
    /// are dropped.
    #[tracing::instrument(skip(self, request), fields(href = %request.destination_path))]
    pub fn start_transition(&mut self, request: TransitionRequest) {
        self.begin(&request.destination_path, request.label.as_deref(), true);
    }

    /// Browser back/forward: play the same sequence without issuing a navigation.
    #[tracing::instrument(skip(self))]
    pub fn on_history_navigation(&mut self, location: &str) {
        self.begin(location, None, false);
    }

    /// Readiness signal from the route announcer.
    pub fn on_route_ready(&mut self, signal: &RouteReady) {
        let incoming = normalize_path(&signal.pathname);
        self.last_known_path = incoming.clone();

        let matches = self
            .pending
            .as_ref()
            .is_some_and(|p| p.normalized_path == incoming);
        if !matches {
            tracing::trace!(path = %incoming, "route ready (not pending)");
            return;
        }
        tracing::debug!(path = %incoming, "destination ready");
        self.arrive(JoinParty::PageReady);
    }

    /// Page shown again. When restored from a frozen cache, hard-abort everything.
    #[tracing::instrument(skip(self))]
    pub fn on_page_show(&mut self, persisted: bool, location: &str) {
        if !persisted {
            return;
        }
        let killed = self.kill_timelines();
        tracing::debug!(phase = ?self.phase, killed, "page restored from cache; aborting transition");
        self.pending = None;
        self.push_on_cover = false;
        self.join.reset();
        self.set_phase(Phase::Idle);
        self.last_known_path = normalize_path(location);
        self.overlay = OverlayFrame::hidden();
        self.events.emit(TransitionEvent::End);
    }

    /// Advance every running timeline by `dt` seconds.
    pub fn tick(&mut self, dt: Seconds) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.clock += dt;

        // Timelines started during this tick have already applied their first frame.
        let had_scramble = self.scramble.is_some();
        let had_reveal = self.reveal.is_some();
        self.step_cover(dt);
        if had_scramble {
            self.step_scramble(dt);
        }
        if had_reveal {
            self.step_reveal(dt);
        }
    }

    /// `true` from an accepted request until the overlay hides again.
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Current state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The accepted transition, if any.
    pub fn pending(&self) -> Option<&InternalTransitionState> {
        self.pending.as_ref()
    }

    /// Arrivals at the reveal join for the current transition.
    pub fn join(&self) -> RevealJoin {
        self.join
    }

    /// Overlay state for rendering.
    pub fn overlay(&self) -> &OverlayFrame {
        &self.overlay
    }

    /// Most recent path known to be displayed.
    pub fn last_known_path(&self) -> &str {
        &self.last_known_path
    }

    /// Total time ticked so far.
    pub fn clock(&self) -> Seconds {
        self.clock
    }

    /// Timings in use.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Lifecycle observers.
    pub fn events_mut(&mut self) -> &mut TransitionEvents {
        &mut self.events
    }

    fn begin(&mut self, href: &str, label: Option<&str>, should_push: bool) {
        if href.is_empty() {
            return;
        }
        let target = normalize_path(href);
        if target == self.last_known_path {
            tracing::debug!(path = %target, "already on destination; plain navigation");
            if should_push {
                self.navigator.push(href);
            }
            return;
        }
        if self.is_transitioning() {
            tracing::debug!(path = %target, phase = ?self.phase, "transition in flight; request dropped");
            return;
        }

        let resolved_label = resolve_label(label, &target);
        self.pending = Some(InternalTransitionState {
            destination_path: href.to_string(),
            normalized_path: target,
            resolved_label,
        });
        self.push_on_cover = should_push;
        self.join.reset();
        self.cover = None;
        self.scramble = None;
        self.reveal = None;

        self.set_phase(Phase::Covering);
        self.events.emit(TransitionEvent::Start);

        self.overlay = OverlayFrame {
            visible: true,
            interactive: true,
            ..OverlayFrame::hidden()
        };
        let cover = Timeline::new()
            .set(Channel::PanelY, PANEL_PARKED)
            .tween(
                Channel::PanelY,
                PANEL_PARKED,
                PANEL_COVERING,
                self.config.cover_secs,
                self.config.panel_ease,
            )
            .cue(Cue::PanelInPlace);
        self.cover = Some(cover);
        self.step_cover(0.0);
    }

    /// Kill and drop every timeline still running. Returns how many were running.
    fn kill_timelines(&mut self) -> usize {
        let cover = self.cover.take();
        let scramble = self.scramble.take().map(|(tl, _)| tl);
        let reveal = self.reveal.take();
        let mut killed = 0;
        for mut tl in [cover, scramble, reveal].into_iter().flatten() {
            if tl.is_running() {
                tl.kill();
                killed += 1;
            }
        }
        killed
    }

    fn on_panel_in_place(&mut self) {
        let Some(pending) = self.pending.as_ref() else {
            return;
        };
        let label = pending.resolved_label.clone();
        let href = pending.destination_path.clone();

        self.set_phase(Phase::AwaitingReveal);
        self.start_scramble(&label);
        if self.push_on_cover {
            tracing::debug!(%href, "navigating behind cover");
            self.navigator.push(&href);
        }
    }

    fn start_scramble(&mut self, label: &str) {
        let c = &self.config;
        let scrambler = Scrambler::new(
            label,
            &c.scramble_chars,
            c.scramble_secs,
            c.scramble_reveal_delay_secs,
            c.seed,
        );
        let tl = Timeline::new()
            .set(Channel::LabelOpacity, 1.0)
            .tween(
                Channel::ScrambleClock,
                0.0,
                c.scramble_secs,
                c.scramble_secs,
                Ease::Linear,
            );
        self.overlay.label_text.clear();
        self.scramble = Some((tl, scrambler));
        self.step_scramble(0.0);
    }

    fn try_reveal(&mut self) {
        if self.pending.is_none() || !self.join.is_complete() || self.reveal.is_some() {
            return;
        }
        self.set_phase(Phase::Revealing);

        let c = &self.config;
        let tl = Timeline::new()
            .hold(c.reveal_hold_secs)
            .tween_at(
                c.reveal_hold_secs,
                Channel::LabelOpacity,
                self.overlay.label_opacity,
                0.0,
                c.label_fade_secs,
                c.label_fade_ease,
            )
            .tween(
                Channel::PanelY,
                PANEL_COVERING,
                PANEL_REVEALED,
                c.reveal_secs,
                c.panel_ease,
            )
            .set(Channel::PanelY, PANEL_PARKED);
        self.reveal = Some(tl);
        self.step_reveal(0.0);
    }

    fn finish(&mut self) {
        self.reveal = None;
        self.pending = None;
        self.push_on_cover = false;
        self.join.reset();
        self.set_phase(Phase::Idle);
        self.overlay = OverlayFrame::hidden();
        self.events.emit(TransitionEvent::End);
    }

    fn arrive(&mut self, party: JoinParty) {
        let status = self.join.arrive(party);
        tracing::trace!(?party, ?status, "reveal join arrival");
        if status == JoinStatus::Complete {
            self.try_reveal();
        }
    }

    fn step_cover(&mut self, dt: Seconds) {
        let Some(tl) = self.cover.as_mut() else {
            return;
        };
        let tick = tl.advance(dt);
        self.apply(&tick);
        if tick.completed {
            self.cover = None;
        }
        if tick.cues.contains(&Cue::PanelInPlace) {
            self.on_panel_in_place();
        }
    }

    fn step_scramble(&mut self, dt: Seconds) {
        let Some((tl, scrambler)) = self.scramble.as_mut() else {
            return;
        };
        let tick = tl.advance(dt);
        let text = tick.value(Channel::ScrambleClock).map(|t| scrambler.render(t));
        self.apply(&tick);
        if let Some(text) = text {
            self.overlay.label_text = text;
        }
        if tick.completed {
            self.scramble = None;
            self.arrive(JoinParty::ScrambleDone);
        }
    }

    fn step_reveal(&mut self, dt: Seconds) {
        let Some(tl) = self.reveal.as_mut() else {
            return;
        };
        let tick = tl.advance(dt);
        self.apply(&tick);
        if tick.completed {
            self.finish();
        }
    }

    fn apply(&mut self, tick: &TimelineTick<Channel, Cue>) {
        for &(channel, value) in &tick.values {
            match channel {
                Channel::PanelY => self.overlay.panel_y_percent = value,
                Channel::LabelOpacity => self.overlay.label_opacity = value.clamp(0.0, 1.0),
                Channel::ScrambleClock => {}
            }
        }
    }

    fn set_phase(&mut self, next: Phase) {
        if self.phase != next {
            tracing::debug!(from = ?self.phase, to = ?next, t = self.clock, "phase");
            self.phase = next;
        }
    }
}

impl std::fmt::Debug for TransitionSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionSequencer")
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .field("join", &self.join)
            .field("overlay", &self.overlay)
            .field("last_known_path", &self.last_known_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/sequencer.rs"]
mod tests;
