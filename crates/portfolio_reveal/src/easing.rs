// SPDX-License-Identifier: MIT OR Apache-2.0
//! Easing curves for reveal animations.

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// No easing
    Linear,
    /// Cubic ease-in-out
    #[default]
    EaseInOut,
    /// Cubic ease-out (fast start, slow finish)
    EaseOutCubic,
    /// Overshoots slightly before settling
    BackOut,
}

impl Easing {
    /// Map linear progress `t` to eased progress.
    ///
    /// `t` is clamped to `0.0..=1.0`; the result is exactly 0 and 1 at the ends.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Linear interpolation between two floats
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
