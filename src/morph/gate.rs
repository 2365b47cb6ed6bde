use crate::morph::store::MorphState;

/// Widest viewport treated as a small screen, in CSS pixels.
pub const SMALL_SCREEN_MAX_WIDTH: f64 = 768.0;

/// Which kind of page is showing, as far as morphing cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum MorphRoute {
    Home,
    BlogPost,
    Other,
}

impl MorphRoute {
    pub fn from_path(pathname: &str) -> Self {
        if pathname == "/" {
            Self::Home
        } else if pathname.starts_with("/blog/") {
            Self::BlogPost
        } else {
            Self::Other
        }
    }
}

/// Client capabilities that gate the home page morph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphEnvironment {
    pub is_webkit: bool,
    pub is_small_screen: bool,
}

impl MorphEnvironment {
    pub fn detect(user_agent: &str, max_touch_points: u32, viewport_width: f64) -> Self {
        Self {
            is_webkit: detect_webkit(user_agent, max_touch_points),
            is_small_screen: viewport_width <= SMALL_SCREEN_MAX_WIDTH,
        }
    }

    /// Neither WebKit nor a small screen.
    pub fn is_supported(&self) -> bool {
        !self.is_webkit && !self.is_small_screen
    }
}

/// Safari and every iOS browser (all WebKit), including iPads reporting a desktop user agent.
pub fn detect_webkit(user_agent: &str, max_touch_points: u32) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    let is_ios = ["ipad", "iphone", "ipod"].iter().any(|d| ua.contains(d));
    let is_mac_touch = ua.contains("macintosh") && max_touch_points > 1;
    let is_safari = ua.contains("safari")
        && !["chrome", "crios", "chromium", "edg", "opr"]
            .iter()
            .any(|b| ua.contains(b));
    is_ios || is_mac_touch || is_safari
}

/// How a navbar digit renders this frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DigitMode {
    /// Intro flicker of the label letters.
    Flicker,
    /// Label morphing into the digit.
    Morph { progress: f64 },
    /// Plain digit.
    Static,
}

/// Decides whether morphing is active for a route and environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MorphGate {
    pub route: MorphRoute,
    pub env: MorphEnvironment,
}

impl MorphGate {
    pub fn new(route: MorphRoute, env: MorphEnvironment) -> Self {
        Self { route, env }
    }

    /// Blog posts always morph when enabled; the home page only in a supported environment.
    pub fn is_active(&self, state: &MorphState) -> bool {
        let on_morph_route = matches!(self.route, MorphRoute::Home | MorphRoute::BlogPost);
        on_morph_route
            && state.enabled
            && (self.route == MorphRoute::BlogPost || self.env.is_supported())
    }

    pub fn digit_mode(&self, state: &MorphState, flicker_phase: bool) -> DigitMode {
        if flicker_phase {
            DigitMode::Flicker
        } else if self.is_active(state) {
            DigitMode::Morph {
                progress: state.progress,
            }
        } else {
            DigitMode::Static
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/gate.rs"]
mod tests;
