use crate::foundation::{
    core::Seconds,
    math::{SplitMix64, stable_hash64},
};

const UPPER_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SYMBOLS: &str = "!<>-_\\/[]{}—=+*^?#________";

/// How often the unrevealed characters are re-rolled.
const CHURN_SECS: Seconds = 1.0 / 30.0;

/// Character pool used for the unresolved part of a scramble.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrambleChars {
    /// `A`..`Z`.
    #[default]
    #[serde(alias = "upperCase")]
    UpperCase,
    /// Punctuation-heavy pool used by hover scrambles.
    Symbols,
    /// Caller-provided pool.
    Custom(String),
}

impl ScrambleChars {
    /// The characters in this pool.
    pub fn chars(&self) -> Vec<char> {
        match self {
            Self::UpperCase => UPPER_CASE.chars().collect(),
            Self::Symbols => SYMBOLS.chars().collect(),
            Self::Custom(s) => s.chars().collect(),
        }
    }
}

/// Deterministic text scramble resolving toward a target string.
///
/// The visible length grows over the whole duration; after `reveal_delay` the target resolves
/// left to right so the full text is shown exactly at `duration`. Whitespace in the target is
/// never scrambled.
#[derive(Clone, Debug)]
pub struct Scrambler {
    target: Vec<char>,
    pool: Vec<char>,
    duration: Seconds,
    reveal_delay: Seconds,
    seed: u64,
}

impl Scrambler {
    /// Build a scrambler for `text`. An empty pool falls back to upper-case letters.
    pub fn new(
        text: &str,
        chars: &ScrambleChars,
        duration: Seconds,
        reveal_delay: Seconds,
        seed: u64,
    ) -> Self {
        let mut pool = chars.chars();
        if pool.is_empty() {
            pool = ScrambleChars::UpperCase.chars();
        }
        let duration = duration.max(0.0);
        Self {
            target: text.chars().collect(),
            pool,
            duration,
            reveal_delay: reveal_delay.clamp(0.0, duration),
            seed: stable_hash64(seed, text),
        }
    }

    /// The text being resolved.
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Scramble length in seconds.
    pub fn duration(&self) -> Seconds {
        self.duration
    }

    /// `true` once `elapsed` reaches the full duration.
    pub fn is_done(&self, elapsed: Seconds) -> bool {
        elapsed >= self.duration
    }

    /// Number of leading target characters shown verbatim at `elapsed`.
    pub fn revealed_len(&self, elapsed: Seconds) -> usize {
        let n = self.target.len();
        if self.is_done(elapsed) {
            return n;
        }
        if elapsed < self.reveal_delay {
            return 0;
        }
        let window = self.duration - self.reveal_delay;
        if window <= 0.0 {
            return n;
        }
        let frac = (elapsed - self.reveal_delay) / window;
        ((n as f64) * frac).floor().clamp(0.0, n as f64) as usize
    }

    fn visible_len(&self, elapsed: Seconds) -> usize {
        let n = self.target.len();
        if self.is_done(elapsed) || self.duration <= 0.0 {
            return n;
        }
        let frac = (elapsed / self.duration).clamp(0.0, 1.0);
        (((n as f64) * frac).ceil() as usize)
            .max(self.revealed_len(elapsed))
            .min(n)
    }

    /// Render the label at `elapsed` seconds since the scramble began.
    pub fn render(&self, elapsed: Seconds) -> String {
        if self.is_done(elapsed) {
            return self.target();
        }
        let revealed = self.revealed_len(elapsed);
        let visible = self.visible_len(elapsed);
        let churn = (elapsed.max(0.0) / CHURN_SECS).floor() as u64;

        let mut out = String::with_capacity(visible);
        for (i, &c) in self.target.iter().enumerate().take(visible) {
            if i < revealed || c.is_whitespace() {
                out.push(c);
                continue;
            }
            let mut rng = SplitMix64::new(self.seed ^ churn.wrapping_mul(0x9E37_79B9) ^ i as u64);
            out.push(self.pool[rng.next_index(self.pool.len())]);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scramble.rs"]
mod tests;
