/// Easing functions used to map normalized animation progress.
///
/// GSAP-style names are accepted when deserializing (`"power4.inOut"` is [`Ease::InOutQuint`],
/// `"power2.out"` is [`Ease::OutCubic`], `"none"` is [`Ease::Linear`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[serde(alias = "none", alias = "linear")]
    Linear,
    /// Quadratic ease-in.
    #[serde(alias = "power1.in")]
    InQuad,
    /// Quadratic ease-out.
    #[serde(alias = "power1.out")]
    OutQuad,
    /// Quadratic ease-in/out.
    #[serde(alias = "power1.inOut")]
    InOutQuad,
    /// Cubic ease-in.
    #[serde(alias = "power2.in")]
    InCubic,
    /// Cubic ease-out.
    #[serde(alias = "power2.out")]
    OutCubic,
    /// Cubic ease-in/out.
    #[serde(alias = "power2.inOut")]
    InOutCubic,
    /// Quintic ease-in.
    #[serde(alias = "power4.in")]
    InQuint,
    /// Quintic ease-out.
    #[serde(alias = "power4.out")]
    OutQuint,
    /// Quintic ease-in/out.
    #[serde(alias = "power4.inOut")]
    InOutQuint,
}

impl Ease {
    /// Every easing variant, in declaration order.
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
    ];

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
