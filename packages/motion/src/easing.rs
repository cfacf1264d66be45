use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve applied to the overall progress of a playback.
///
/// Every curve maps `0.0 → 0.0` and `1.0 → 1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    SinIn,
    SinOut,
    SinInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Map linear progress `t` (clamped to `[0, 1]`) onto the curve.
    pub fn ease(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SinIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SinOut => (t * PI / 2.0).sin(),
            Easing::SinInOut => -(PI * t).cos() / 2.0 + 0.5,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => (t - 1.0).powi(3) + 1.0,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
        }
    }
}
