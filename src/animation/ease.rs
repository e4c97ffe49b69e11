use serde::{Deserialize, Serialize};

/// Timing curve applied to the progress of a color or scale step.
///
/// All curves are symmetric and keep `0 -> 0`, `1 -> 1`, so every step still starts and ends
/// on its exact attribute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Hermite `3t² - 2t³`.
    Smoothstep,
    /// Quadratic acceleration then deceleration.
    InOutQuad,
    /// Cubic acceleration then deceleration.
    InOutCubic,
}

impl Ease {
    /// Reshape step progress `t`; values outside `[0, 1]` are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
            Self::InOutQuad => mirrored_power(t, 2),
            Self::InOutCubic => mirrored_power(t, 3),
        }
    }
}

// `t^k` on the first half, its point reflection on the second.
fn mirrored_power(t: f64, k: i32) -> f64 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(k)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(k)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
