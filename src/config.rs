use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context as _;

use crate::{
    animation::{ease::Ease, scramble::ScrambleChars},
    foundation::{
        core::Seconds,
        error::{SegueError, SegueResult},
    },
};

/// Top-level configuration, loadable from JSON. Missing sections and fields take defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SegueConfig {
    /// Page-transition timings and curves.
    pub transition: TransitionConfig,
    /// Blog content loading.
    pub content: ContentConfig,
}

impl SegueConfig {
    /// Read and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> SegueResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| SegueError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every section.
    pub fn validate(&self) -> SegueResult<()> {
        self.transition.validate()?;
        self.content.validate()
    }
}

/// Timings and curves of the cover / label / reveal sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Panel slide from off-screen to fully covering.
    pub cover_secs: Seconds,
    /// Curve of both panel slides.
    pub panel_ease: Ease,
    /// Label scramble length.
    pub scramble_secs: Seconds,
    /// Time before scrambled characters start resolving.
    pub scramble_reveal_delay_secs: Seconds,
    /// Character pool of the label scramble.
    pub scramble_chars: ScrambleChars,
    /// Pause with the full label visible before revealing.
    pub reveal_hold_secs: Seconds,
    /// Label fade-out length.
    pub label_fade_secs: Seconds,
    /// Label fade-out curve.
    pub label_fade_ease: Ease,
    /// Panel slide from covering to off-screen.
    pub reveal_secs: Seconds,
    /// Seed mixed into scramble randomness.
    pub seed: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            cover_secs: 0.65,
            panel_ease: Ease::InOutQuint,
            scramble_secs: 0.7,
            scramble_reveal_delay_secs: 0.15,
            scramble_chars: ScrambleChars::UpperCase,
            reveal_hold_secs: 0.15,
            label_fade_secs: 0.2,
            label_fade_ease: Ease::OutCubic,
            reveal_secs: 0.65,
            seed: 0,
        }
    }
}

impl TransitionConfig {
    /// Reject negative or non-finite durations and an empty custom character pool.
    pub fn validate(&self) -> SegueResult<()> {
        for (name, v) in [
            ("cover_secs", self.cover_secs),
            ("scramble_secs", self.scramble_secs),
            ("scramble_reveal_delay_secs", self.scramble_reveal_delay_secs),
            ("reveal_hold_secs", self.reveal_hold_secs),
            ("label_fade_secs", self.label_fade_secs),
            ("reveal_secs", self.reveal_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SegueError::config(format!(
                    "transition.{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if let ScrambleChars::Custom(s) = &self.scramble_chars {
            if s.is_empty() {
                return Err(SegueError::config(
                    "transition.scramble_chars custom pool must be non-empty",
                ));
            }
        }
        Ok(())
    }
}

/// Where and how blog posts are read.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding one file per post.
    pub root: PathBuf,
    /// Post file extension, without the dot.
    pub extension: String,
    /// Reading speed used for reading-time labels.
    pub words_per_minute: u32,
    /// Author credited when a post lists none.
    pub fallback_author: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content").join("blog"),
            extension: "mdx".to_string(),
            words_per_minute: 200,
            fallback_author: "Editorial Team".to_string(),
        }
    }
}

impl ContentConfig {
    /// Reject a zero reading speed and an empty extension.
    pub fn validate(&self) -> SegueResult<()> {
        if self.words_per_minute == 0 {
            return Err(SegueError::config("content.words_per_minute must be > 0"));
        }
        if self.extension.trim().is_empty() {
            return Err(SegueError::config("content.extension must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
