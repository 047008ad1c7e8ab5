// SPDX-License-Identifier: MIT OR Apache-2.0
//! Curtain view between the loading intro and the content.

use crate::theme::{with_opacity, PortfolioTheme};
use egui::{Rect, Stroke};
use portfolio_reveal::CurtainAnimation;

/// Vertical pleat lines per curtain half
const PLEATS: usize = 10;
/// Width of the glowing inner edge
const EDGE_WIDTH: f32 = 4.0;

/// Curtain view wrapping the opening animation
#[derive(Debug, Clone, Default)]
pub struct CurtainView {
    animation: CurtainAnimation,
}

impl CurtainView {
    /// Create a closed curtain
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the animation with the sequencer's `open` prop.
    ///
    /// Returns true on the frame the opening completes, which the caller
    /// forwards as the completion callback.
    pub fn update(&mut self, dt: f32, open: bool) -> bool {
        self.animation.set_open(open);
        self.animation.update(dt)
    }

    /// Render both halves at the current offset
    pub fn show(&self, ctx: &egui::Context, theme: &PortfolioTheme) {
        let colors = &theme.colors;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.background))
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let half = screen.width() / 2.0;
                let travel = half * self.animation.offset();
                let painter = ui.painter();

                let (left, right) = half_rects(screen, travel);
                for (rect, inner_edge_x) in [(left, left.right()), (right, right.left())] {
                    if !rect.intersects(screen) {
                        continue;
                    }
                    painter.rect_filled(rect, 0.0, colors.curtain);

                    // Darker toward the outer side
                    let shade_w = rect.width() / 3.0;
                    let shade = if inner_edge_x > rect.center().x {
                        Rect::from_min_size(rect.min, egui::vec2(shade_w, rect.height()))
                    } else {
                        Rect::from_min_size(rect.right_top() - egui::vec2(shade_w, 0.0), egui::vec2(shade_w, rect.height()))
                    };
                    painter.rect_filled(shade, 0.0, with_opacity(egui::Color32::BLACK, 0.25));

                    for i in 1..=PLEATS {
                        let x = rect.left() + rect.width() * i as f32 / (PLEATS as f32 + 1.0);
                        painter.line_segment(
                            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                            Stroke::new(1.0, colors.curtain_pleat),
                        );
                    }

                    let edge = Rect::from_center_size(
                        egui::pos2(inner_edge_x, rect.center().y),
                        egui::vec2(EDGE_WIDTH, rect.height()),
                    );
                    painter.rect_filled(edge.expand2(egui::vec2(6.0, 0.0)), 0.0, with_opacity(colors.cyber_blue, 0.15));
                    painter.rect_filled(edge, 0.0, colors.cyber_blue);
                }
            });
    }
}

/// Left and right halves of `screen`, each pushed outward by `travel`
fn half_rects(screen: Rect, travel: f32) -> (Rect, Rect) {
    let half = screen.width() / 2.0;
    let size = egui::vec2(half, screen.height());
    let left = Rect::from_min_size(screen.min - egui::vec2(travel, 0.0), size);
    let right = Rect::from_min_size(screen.min + egui::vec2(half + travel, 0.0), size);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_halves_cover_screen() {
        let screen = Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let (left, right) = half_rects(screen, 0.0);
        assert_eq!(left.right(), right.left());
        assert_eq!(left.left(), 0.0);
        assert_eq!(right.right(), 800.0);
    }

    #[test]
    fn test_open_halves_leave_screen() {
        let screen = Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let (left, right) = half_rects(screen, 400.0);
        assert!(left.right() <= screen.left());
        assert!(right.left() >= screen.right());
    }

    #[test]
    fn test_update_reports_completion_once() {
        let mut view = CurtainView::new();
        assert!(!view.update(5.0, false));
        assert!(!view.update(0.1, true));
        assert!(view.update(5.0, true));
        assert!(!view.update(5.0, true));
        assert!(view.animation.is_complete());
    }
}
