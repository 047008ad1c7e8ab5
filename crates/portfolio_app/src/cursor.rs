// SPDX-License-Identifier: MIT OR Apache-2.0
//! Custom animated cursor.
//!
//! Replaces the system pointer with a spinning, glowing bolt that tracks
//! the mouse and grows while it hovers something clickable.

use crate::theme::{with_opacity, ThemeColors};
use egui::{Color32, Pos2, Shape, Stroke, Vec2};
use std::f32::consts::TAU;

/// Time constant of the position follow (seconds)
const FOLLOW_TWEEN: f32 = 0.02;
/// Time constant of the hover scale change (seconds)
const SCALE_TWEEN: f32 = 0.08;
/// Seconds per full spin
const SPIN_PERIOD: f32 = 4.0;
/// Seconds per pulse
const PULSE_PERIOD: f32 = 2.0;
/// Base radius of the cursor glyph
const BASE_RADIUS: f32 = 12.0;

/// Cursor display variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    /// Over plain content
    #[default]
    Default,
    /// Over an interactive widget
    Hover,
}

impl CursorVariant {
    /// Target scale for this variant
    pub fn scale(&self) -> f32 {
        match self {
            CursorVariant::Default => 1.0,
            CursorVariant::Hover => 1.3,
        }
    }
}

/// Animated cursor state
#[derive(Debug, Clone, Default)]
pub struct CustomCursor {
    position: Option<Pos2>,
    scale: f32,
    variant: CursorVariant,
    time: f32,
}

impl CustomCursor {
    /// Create a hidden cursor
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            ..Default::default()
        }
    }

    /// Advance by `dt` seconds toward the latest pointer state
    pub fn update(&mut self, dt: f32, pointer: Option<Pos2>, over_interactive: bool) {
        self.time += dt;
        self.variant = if over_interactive {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        };

        self.position = match (self.position, pointer) {
            (Some(current), Some(target)) => Some(current.lerp(target, approach(dt, FOLLOW_TWEEN))),
            (None, target) => target,
            (current, None) => current,
        };

        let target_scale = self.variant().scale();
        self.scale += (target_scale - self.scale) * approach(dt, SCALE_TWEEN);
    }

    /// Current position, once the pointer has been seen
    pub fn position(&self) -> Option<Pos2> {
        self.position
    }

    /// Current variant
    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    /// Current smoothed scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Paint on the topmost layer
    pub fn paint(&self, ctx: &egui::Context, colors: &ThemeColors) {
        let Some(center) = self.position() else {
            return;
        };

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("custom_cursor"),
        ));

        let pulse = pulse(self.time, PULSE_PERIOD);
        let radius = BASE_RADIUS * self.scale();

        // Glow
        painter.circle_filled(
            center,
            radius * (1.0 + 0.5 * pulse),
            with_opacity(colors.cyber_blue, 0.15 + 0.15 * pulse),
        );

        let angle = (self.time / SPIN_PERIOD).fract() * TAU;
        let glyph_scale = radius * (1.0 + 0.2 * pulse);
        let points = bolt_points(center, glyph_scale, angle);
        painter.add(Shape::line(points, Stroke::new(2.5, Color32::from_rgb(255, 220, 60))));
    }
}

/// Fraction of the remaining distance covered in `dt` by an exponential follow
fn approach(dt: f32, tween: f32) -> f32 {
    if tween <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt.max(0.0) / tween).exp()
}

/// Smooth 0..1 pulse with the given period
fn pulse(time: f32, period: f32) -> f32 {
    0.5 - 0.5 * (time / period * TAU).cos()
}

/// Zigzag bolt outline around `center`, rotated by `angle`
fn bolt_points(center: Pos2, size: f32, angle: f32) -> Vec<Pos2> {
    const SHAPE: [[f32; 2]; 6] = [
        [0.25, -1.0],
        [-0.45, 0.1],
        [0.05, 0.1],
        [-0.25, 1.0],
        [0.45, -0.15],
        [-0.05, -0.15],
    ];
    let (sin, cos) = angle.sin_cos();
    SHAPE
        .iter()
        .map(|[x, y]| {
            let v = Vec2::new(x * cos - y * sin, x * sin + y * cos) * size;
            center + v
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sighting_snaps() {
        let mut cursor = CustomCursor::new();
        assert_eq!(cursor.position(), None);
        cursor.update(0.016, Some(Pos2::new(100.0, 50.0)), false);
        assert_eq!(cursor.position(), Some(Pos2::new(100.0, 50.0)));
    }

    #[test]
    fn test_follows_pointer() {
        let mut cursor = CustomCursor::new();
        cursor.update(0.016, Some(Pos2::ZERO), false);
        cursor.update(0.005, Some(Pos2::new(100.0, 0.0)), false);
        let x = cursor.position().unwrap().x;
        assert!(x > 0.0 && x < 100.0);

        cursor.update(1.0, Some(Pos2::new(100.0, 0.0)), false);
        assert!((cursor.position().unwrap().x - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_keeps_position_when_pointer_leaves() {
        let mut cursor = CustomCursor::new();
        cursor.update(0.016, Some(Pos2::new(5.0, 5.0)), false);
        cursor.update(0.016, None, false);
        assert_eq!(cursor.position(), Some(Pos2::new(5.0, 5.0)));
    }

    #[test]
    fn test_hover_grows() {
        let mut cursor = CustomCursor::new();
        cursor.update(1.0, Some(Pos2::ZERO), true);
        assert_eq!(cursor.variant(), CursorVariant::Hover);
        assert!((cursor.scale() - 1.3).abs() < 0.01);

        cursor.update(1.0, Some(Pos2::ZERO), false);
        assert!((cursor.scale() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_bolt_is_centered() {
        let points = bolt_points(Pos2::new(10.0, 10.0), 8.0, 1.0);
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|p| (*p - Pos2::new(10.0, 10.0)).length() <= 8.0 * 1.1));
    }
}
