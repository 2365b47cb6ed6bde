use crate::transition::{events::TransitionRequest, sequencer::TransitionSequencer};

/// Primary mouse button.
pub const PRIMARY_BUTTON: u8 = 0;

/// Modifier keys held during an activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Modifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// `true` when any modifier is held.
    pub fn any(self) -> bool {
        self.meta || self.ctrl || self.shift || self.alt
    }
}

/// A click (or keyboard activation) on a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivationEvent {
    /// Mouse button index; `0` is primary.
    pub button: u8,
    pub modifiers: Modifiers,
    /// Another handler already cancelled the default action.
    pub default_prevented: bool,
}

impl ActivationEvent {
    /// Plain primary-button click.
    pub fn primary() -> Self {
        Self::default()
    }
}

/// What the host should do with the activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkActivation {
    /// Let the browser navigate normally.
    BrowserDefault,
    /// Default navigation prevented; the sequencer owns the navigation (or ignored a repeat).
    Intercepted,
}

/// Hyperlink that routes internal navigation through the transition sequencer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionLink {
    pub href: String,
    /// Overlay label; derived from `href` when absent.
    pub label: Option<String>,
    /// Browsing context, e.g. `_blank`.
    pub target: Option<String>,
}

impl TransitionLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: None,
            target: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Internal absolute path: starts with a single `/`.
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/') && !self.href.starts_with("//")
    }

    /// Decide whether to intercept `event`, and start the transition when appropriate.
    pub fn activate(
        &self,
        event: &ActivationEvent,
        sequencer: &mut TransitionSequencer,
    ) -> LinkActivation {
        if event.default_prevented
            || event.modifiers.any()
            || event.button != PRIMARY_BUTTON
            || self.target.as_deref() == Some("_blank")
            || !self.is_internal()
        {
            return LinkActivation::BrowserDefault;
        }

        if sequencer.is_transitioning() {
            tracing::trace!(href = %self.href, "activation ignored while transitioning");
            return LinkActivation::Intercepted;
        }
        let mut request = TransitionRequest::new(self.href.as_str());
        request.label = self.label.clone();
        sequencer.start_transition(request);
        LinkActivation::Intercepted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/link.rs"]
mod tests;
