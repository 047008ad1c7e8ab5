// SPDX-License-Identifier: MIT OR Apache-2.0
//! Full-screen views selected by the reveal sequencer.

mod content;
mod curtain;
mod loading;

pub use content::ContentView;
pub use curtain::CurtainView;
pub use loading::LoadingScreen;

use crate::theme::with_opacity;
use egui::Color32;

/// Lay out `add_contents` faded to `progress` and risen by up to `rise` points.
///
/// The total height is independent of `progress`, so animating one item
/// never shifts its neighbours.
fn reveal<R>(
    ui: &mut egui::Ui,
    progress: f32,
    rise: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let progress = progress.clamp(0.0, 1.0);
    ui.scope(|ui| {
        ui.set_opacity(progress);
        ui.add_space(rise * (1.0 - progress));
        let inner = add_contents(ui);
        ui.add_space(rise * progress);
        inner
    })
    .inner
}

/// Small pill label
fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .fill(with_opacity(color, 0.1))
        .stroke(egui::Stroke::new(1.0, with_opacity(color, 0.35)))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(color));
        });
}

/// Deterministic pseudo-random value in 0..1 for decorative scatter
fn scatter(index: usize, salt: u32) -> f32 {
    let mut x = (index as u32).wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    (x as f32) / (u32::MAX as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_range_and_determinism() {
        for i in 0..200 {
            let v = scatter(i, 7);
            assert!((0.0..=1.0).contains(&v));
            assert_eq!(v, scatter(i, 7));
        }
        assert_ne!(scatter(1, 1), scatter(1, 2));
    }
}
