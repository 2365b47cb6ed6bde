//! Segue is a headless page-transition and scroll-morph engine for client-routed sites.
//!
//! The host owns rendering and input. It feeds discrete events (link activations, route renders,
//! history navigation, page-cache restores, scroll positions) as method calls and drives time
//! with `tick(dt)` once per animation frame. In return it reads plain values:
//!
//! - [`TransitionSequencer`]: cover, label scramble and reveal around each navigation, gated on
//!   both the scramble finishing and the destination announcing readiness
//! - [`MorphStore`]: the session-wide `{ enabled, progress }` value for scroll-linked effects
//! - [`ContentLoader`]: blog posts read from fenced-header markdown files
//! - [`AppSession`]: all of the above wired to an in-memory router, stepped frame by frame
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// Configuration loaded from JSON.
pub mod config;
pub(crate) mod content;
pub(crate) mod morph;
pub(crate) mod session;
pub(crate) mod transition;

pub use crate::foundation::core::{Fps, FrameIndex, Seconds};
pub use crate::foundation::error::{SegueError, SegueResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::scramble::{ScrambleChars, Scrambler};
pub use crate::animation::timeline::{Timeline, TimelineState, TimelineTick};
pub use crate::animation::tween::{Lerp, Tween};

pub use crate::config::{ContentConfig, SegueConfig, TransitionConfig};

pub use crate::transition::announcer::RouteReadyAnnouncer;
pub use crate::transition::events::{
    Navigator, ObserverId, RouteReady, TransitionEvent, TransitionEvents, TransitionObserver,
    TransitionRequest,
};
pub use crate::transition::join::{JoinParty, JoinStatus, RevealJoin};
pub use crate::transition::link::{
    ActivationEvent, LinkActivation, Modifiers, PRIMARY_BUTTON, TransitionLink,
};
pub use crate::transition::path::{derive_label, format_label, normalize_path, resolve_label};
pub use crate::transition::sequencer::{
    InternalTransitionState, OverlayFrame, PANEL_COVERING, PANEL_PARKED, PANEL_REVEALED, Phase,
    TransitionSequencer,
};

pub use crate::morph::gate::{
    DigitMode, MorphEnvironment, MorphGate, MorphRoute, SMALL_SCREEN_MAX_WIDTH, detect_webkit,
};
pub use crate::morph::scroll::{
    PinRegion, PinnedFrame, PinnedScrollMorph, ReadingProgressMorph, ScrollMetrics,
};
pub use crate::morph::store::{MorphState, MorphStore, MorphSubscription};

pub use crate::content::filter::{FilteredArticles, filter_articles};
pub use crate::content::frontmatter::{Frontmatter, split_frontmatter};
pub use crate::content::outline::{
    HeadingOffset, OutlineItem, OutlineLayout, OutlineMode, OutlinePanel, OutlinePosition,
    active_heading, extract_outline, slugify_heading,
};
pub use crate::content::posts::{
    Author, BlogPost, CategoryOption, ContentLoader, IconKey, categories_of, full_date_label,
    parse_post_date, reading_time, short_date_label, validate_slug,
};

pub use crate::session::app_session::{AppSession, DEFAULT_VIEWPORT, SessionFrame};
pub use crate::session::router::{HeadlessRouter, RouterHandle, search_of};
