use std::{cell::RefCell, rc::Rc};

use crate::{
    config::TransitionConfig,
    foundation::core::{Fps, FrameIndex, Seconds},
    morph::{
        gate::{MorphEnvironment, MorphGate, MorphRoute},
        scroll::{PinnedScrollMorph, ReadingProgressMorph, ScrollMetrics},
        store::{MorphState, MorphStore},
    },
    session::router::{HeadlessRouter, RouterHandle, search_of},
    transition::{
        announcer::RouteReadyAnnouncer,
        events::{RouteReady, TransitionEvent, TransitionRequest},
        link::{ActivationEvent, LinkActivation, TransitionLink},
        path::normalize_path,
        sequencer::{OverlayFrame, Phase, TransitionSequencer},
    },
};

/// Viewport used when the host does not provide one.
pub const DEFAULT_VIEWPORT: (f64, f64) = (1440.0, 900.0);

/// Everything observable after one [`AppSession::step`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SessionFrame {
    pub frame: FrameIndex,
    pub time: Seconds,
    /// Browser location (href).
    pub location: String,
    pub phase: Phase,
    pub transitioning: bool,
    pub overlay: OverlayFrame,
    pub morph: MorphState,
    pub morph_active: bool,
    /// Readiness signal dispatched during this frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<RouteReady>,
    /// Lifecycle events emitted during this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TransitionEvent>,
}

#[derive(Debug)]
enum MorphProducer {
    Reading(ReadingProgressMorph),
    Pinned(PinnedScrollMorph),
}

/// Headless application: one router, one announcer, one sequencer and the session-wide morph
/// store, stepped frame by frame.
pub struct AppSession {
    sequencer: TransitionSequencer,
    announcer: RouteReadyAnnouncer,
    router: Rc<RefCell<HeadlessRouter>>,
    morph: MorphStore,
    producer: Option<MorphProducer>,
    environment: MorphEnvironment,
    viewport: (f64, f64),
    fps: Fps,
    frame: FrameIndex,
    time: Seconds,
    emitted: Rc<RefCell<Vec<TransitionEvent>>>,
}

impl AppSession {
    /// Start a session showing `initial_href`. Routes render `mount_delay_frames` frames
    /// after they are navigated to.
    pub fn new(config: TransitionConfig, initial_href: &str, mount_delay_frames: u32) -> Self {
        let router = Rc::new(RefCell::new(HeadlessRouter::new(
            initial_href,
            mount_delay_frames,
        )));
        let mut sequencer = TransitionSequencer::new(
            config,
            Box::new(RouterHandle(Rc::clone(&router))),
            initial_href,
        );
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        sequencer
            .events_mut()
            .subscribe(Box::new(move |e: TransitionEvent| sink.borrow_mut().push(e)));

        Self {
            sequencer,
            announcer: RouteReadyAnnouncer::new(),
            router,
            morph: MorphStore::new(),
            producer: None,
            environment: MorphEnvironment::default(),
            viewport: DEFAULT_VIEWPORT,
            fps: Fps::default(),
            frame: FrameIndex(0),
            time: 0.0,
            emitted,
        }
    }

    pub fn with_fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_environment(mut self, environment: MorphEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Viewport `(width, height)` in CSS pixels.
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn sequencer(&self) -> &TransitionSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut TransitionSequencer {
        &mut self.sequencer
    }

    /// The session-wide morph store.
    pub fn morph(&self) -> &MorphStore {
        &self.morph
    }

    pub fn router(&self) -> std::cell::Ref<'_, HeadlessRouter> {
        self.router.borrow()
    }

    /// Mark a path as never rendering.
    pub fn stall(&self, path: &str) {
        self.router.borrow_mut().stall(path);
    }

    pub fn location(&self) -> String {
        self.router.borrow().location().to_string()
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// User activates a link.
    pub fn click(&mut self, link: &TransitionLink, event: &ActivationEvent) -> LinkActivation {
        link.activate(event, &mut self.sequencer)
    }

    /// Programmatic request (e.g. a "back to blog" button).
    pub fn navigate(&mut self, request: TransitionRequest) {
        self.sequencer.start_transition(request);
    }

    /// Browser back button. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        let popped = self.router.borrow_mut().back();
        match popped {
            Some(location) => {
                self.sequencer.on_history_navigation(&location);
                true
            }
            None => false,
        }
    }

    /// The page was shown again from a frozen cache.
    pub fn restore_from_cache(&mut self) {
        let location = self.location();
        self.announcer.cancel();
        self.sequencer.on_page_show(true, &location);
    }

    /// Feed the current page's scroll position to its morph producer.
    pub fn scroll(&mut self, scroll_top: f64, scroll_height: f64) {
        let metrics = ScrollMetrics::new(scroll_top, scroll_height, self.viewport.1);
        match self.producer.as_mut() {
            Some(MorphProducer::Reading(r)) => r.on_scroll(&metrics),
            Some(MorphProducer::Pinned(p)) => p.on_scroll(metrics.scroll_top),
            None => {}
        }
    }

    fn mount_producer(&mut self, pathname: &str) {
        // Old producer resets the store before the new one mounts.
        self.producer = None;
        self.producer = match MorphRoute::from_path(pathname) {
            MorphRoute::Home => Some(MorphProducer::Pinned(PinnedScrollMorph::mount(
                self.morph.clone(),
                0.0,
                self.viewport.1,
            ))),
            MorphRoute::BlogPost => Some(MorphProducer::Reading(ReadingProgressMorph::mount(
                self.morph.clone(),
            ))),
            MorphRoute::Other => None,
        };
    }

    /// Advance one frame at the session frame rate.
    pub fn step_frame(&mut self) -> SessionFrame {
        self.step(self.fps.frame_duration_secs())
    }

    /// Advance one frame of `dt` seconds: route render, readiness dispatch, then timelines.
    pub fn step(&mut self, dt: Seconds) -> SessionFrame {
        let rendered = self.router.borrow_mut().tick_frame();
        if let Some(href) = rendered {
            let pathname = normalize_path(&href);
            self.mount_producer(&pathname);
            self.announcer.on_route_render(&pathname, search_of(&href));
        }

        let ready = self.announcer.on_animation_frame();
        if let Some(signal) = &ready {
            self.sequencer.on_route_ready(signal);
        }

        self.sequencer.tick(dt);
        if let Some(MorphProducer::Pinned(p)) = self.producer.as_mut() {
            p.tick(dt);
        }

        self.time += if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let frame = self.frame;
        self.frame = FrameIndex(frame.0 + 1);
        self.snapshot(frame, ready)
    }

    fn snapshot(&self, frame: FrameIndex, ready: Option<RouteReady>) -> SessionFrame {
        let location = self.location();
        let morph = self.morph.get_snapshot();
        let gate = MorphGate::new(MorphRoute::from_path(&normalize_path(&location)), self.environment);
        SessionFrame {
            frame,
            time: self.time,
            location,
            phase: self.sequencer.phase(),
            transitioning: self.sequencer.is_transitioning(),
            overlay: self.sequencer.overlay().clone(),
            morph,
            morph_active: gate.is_active(&morph),
            ready,
            events: std::mem::take(&mut *self.emitted.borrow_mut()),
        }
    }

    /// Step until the sequencer is idle again, at most `max_frames` frames.
    pub fn run_until_idle(&mut self, max_frames: u64) -> Vec<SessionFrame> {
        let mut frames = Vec::new();
        for _ in 0..max_frames {
            let f = self.step_frame();
            let done = !f.transitioning;
            frames.push(f);
            if done {
                break;
            }
        }
        frames
    }

    /// [`AppSession::run_until_idle`] with a budget in seconds of session time.
    pub fn run_until_idle_for(&mut self, max_secs: Seconds) -> Vec<SessionFrame> {
        let max_frames = self.fps.secs_to_frames_ceil(max_secs.max(0.0));
        self.run_until_idle(max_frames)
    }
}

impl std::fmt::Debug for AppSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSession")
            .field("frame", &self.frame)
            .field("location", &self.location())
            .field("sequencer", &self.sequencer)
            .field("morph", &self.morph)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/app_session.rs"]
mod tests;
