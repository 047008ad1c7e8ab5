// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading intro shown on the first run of a session.

use super::scatter;
use crate::theme::{paint_grid, with_opacity, PortfolioTheme};
use egui::{Align2, FontId, Pos2, Rect, Shape, Stroke};
use portfolio_reveal::{lerp, Easing};
use std::f32::consts::TAU;

const PARTICLE_COUNT: usize = 20;
const BAR_WIDTH: f32 = 320.0;
const BAR_HEIGHT: f32 = 8.0;
/// Seconds for the progress bar to fill
const BAR_DURATION: f32 = 2.0;

/// Loading intro view
#[derive(Debug, Clone, Default)]
pub struct LoadingScreen {
    elapsed: f32,
}

impl LoadingScreen {
    /// Create a loading screen at its first frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the intro animations by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Progress bar fill, 0 to 1
    pub fn bar_progress(&self) -> f32 {
        Easing::EaseInOut.apply(self.elapsed / BAR_DURATION)
    }

    /// Render the intro
    pub fn show(&self, ctx: &egui::Context, theme: &PortfolioTheme) {
        let colors = &theme.colors;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                paint_grid(painter, rect, colors, 48.0);
                self.paint_particles(painter, rect, theme);

                let center = rect.center() - egui::vec2(0.0, 60.0);
                self.paint_logo(painter, center, theme);

                // Caption
                let caption_t = Easing::EaseOutCubic.apply((self.elapsed - 0.5) / 0.8);
                painter.text(
                    center + egui::vec2(0.0, 110.0 + 20.0 * (1.0 - caption_t)),
                    Align2::CENTER_CENTER,
                    "Loading Portfolio",
                    FontId::proportional(26.0),
                    with_opacity(colors.text_primary, caption_t),
                );

                // Progress bar
                let bar_rect = Rect::from_center_size(
                    center + egui::vec2(0.0, 160.0),
                    egui::vec2(BAR_WIDTH, BAR_HEIGHT),
                );
                painter.rect_filled(bar_rect, BAR_HEIGHT / 2.0, colors.border);
                let progress = self.bar_progress();
                if progress > 0.0 {
                    let mut fill = bar_rect;
                    fill.set_width(BAR_WIDTH * progress);
                    painter.rect_filled(fill, BAR_HEIGHT / 2.0, colors.cyber_blue);
                    let mut glow = fill;
                    glow.set_left(fill.left() + fill.width() * 0.5);
                    painter.rect_filled(glow, BAR_HEIGHT / 2.0, with_opacity(colors.cyber_green, 0.6));
                }

                // Percentage
                let percent_t = ((self.elapsed - 0.8) / 0.3).clamp(0.0, 1.0);
                painter.text(
                    bar_rect.center_bottom() + egui::vec2(0.0, 22.0),
                    Align2::CENTER_CENTER,
                    format!("{}%", (progress * 100.0).round() as u32),
                    FontId::monospace(18.0),
                    with_opacity(colors.cyber_blue, percent_t),
                );
            });
    }

    fn paint_logo(&self, painter: &egui::Painter, center: Pos2, theme: &PortfolioTheme) {
        let colors = &theme.colors;
        let t = self.elapsed;
        let scale = Easing::BackOut.apply(t);
        if scale <= 0.0 {
            return;
        }
        let radius = 64.0 * scale;

        // Pulsing glow
        let pulse = 0.5 - 0.5 * (t / 2.0 * TAU).cos();
        painter.circle_filled(
            center,
            radius * (1.0 + 0.5 * pulse),
            with_opacity(colors.cyber_blue, 0.08 + 0.12 * pulse),
        );

        // Counter-rotating rings
        painter.add(ring(center, radius, t / 3.0 * TAU, Stroke::new(2.0, with_opacity(colors.cyber_blue, 0.6))));
        painter.add(ring(
            center,
            radius - 8.0 * scale,
            -t / 4.0 * TAU,
            Stroke::new(1.0, with_opacity(colors.cyber_green, 0.4)),
        ));

        // The mark, shifting between blue and green
        let shade = 0.5 - 0.5 * (t / 2.0 * TAU).cos();
        let color = lerp_color(colors.cyber_blue, colors.cyber_green, shade);
        painter.text(center, Align2::CENTER_CENTER, "A", FontId::proportional(88.0 * scale), color);
    }

    fn paint_particles(&self, painter: &egui::Painter, rect: Rect, theme: &PortfolioTheme) {
        for i in 0..PARTICLE_COUNT {
            let duration = 3.0 + 2.0 * scatter(i, 3);
            let delay = 2.0 * scatter(i, 4);
            let local = self.elapsed - delay;
            if local < 0.0 {
                continue;
            }
            let phase = (local / duration).fract();
            // Rise and fall back, fading and growing in the middle
            let wave = (phase * std::f32::consts::PI).sin();
            let pos = Pos2::new(
                rect.left() + rect.width() * scatter(i, 1),
                rect.top() + rect.height() * scatter(i, 2) - 100.0 * wave,
            );
            painter.circle_filled(pos, 2.0 * wave, with_opacity(theme.colors.cyber_blue, wave));
        }
    }
}

/// Open ring (three quarters of a circle) starting at `angle`
fn ring(center: Pos2, radius: f32, angle: f32, stroke: Stroke) -> Shape {
    const SEGMENTS: usize = 48;
    let sweep = 0.75 * TAU;
    let points = (0..=SEGMENTS)
        .map(|i| {
            let a = angle + sweep * i as f32 / SEGMENTS as f32;
            center + egui::vec2(a.cos(), a.sin()) * radius
        })
        .collect();
    Shape::line(points, stroke)
}

fn lerp_color(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let channel = |x: u8, y: u8| lerp(x as f32, y as f32, t).round() as u8;
    egui::Color32::from_rgb(channel(a.r(), b.r()), channel(a.g(), b.g()), channel(a.b(), b.b()))
}
