// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cyber theme for the portfolio viewer.
//!
//! A dark base with neon blue, green and purple accents, applied to egui
//! and shared by the hand-painted views.

use egui::{Color32, Rounding, Stroke, Style, Visuals};

/// Named accent colors used by content entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    /// Neon blue (default)
    #[default]
    Blue,
    /// Neon green
    Green,
    /// Purple
    Purple,
    /// Warning red
    Red,
}

impl Accent {
    /// Resolve to a concrete color in `colors`
    pub fn color(&self, colors: &ThemeColors) -> Color32 {
        match self {
            Accent::Blue => colors.cyber_blue,
            Accent::Green => colors.cyber_green,
            Accent::Purple => colors.cyber_purple,
            Accent::Red => colors.destructive,
        }
    }
}

/// Theme colors for the viewer
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Page background
    pub background: Color32,
    /// Card background
    pub card: Color32,
    /// Curtain panel base
    pub curtain: Color32,
    /// Curtain pleat lines
    pub curtain_pleat: Color32,

    /// Primary text color
    pub text_primary: Color32,
    /// Secondary text (body copy)
    pub text_secondary: Color32,
    /// Muted text (labels, captions)
    pub text_muted: Color32,

    /// Neon blue accent
    pub cyber_blue: Color32,
    /// Neon green accent
    pub cyber_green: Color32,
    /// Purple accent
    pub cyber_purple: Color32,
    /// Warning red
    pub destructive: Color32,

    /// Card border
    pub border: Color32,
    /// Background grid lines
    pub grid: Color32,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::cyber()
    }
}

impl ThemeColors {
    /// The cyber palette
    pub fn cyber() -> Self {
        Self {
            background: Color32::from_rgb(8, 10, 16),
            card: Color32::from_rgb(18, 22, 32),
            curtain: Color32::from_rgb(17, 24, 39),
            curtain_pleat: Color32::from_rgba_unmultiplied(75, 85, 99, 77),

            text_primary: Color32::from_rgb(236, 240, 245),
            text_secondary: Color32::from_rgb(209, 213, 219),
            text_muted: Color32::from_rgb(148, 156, 170),

            cyber_blue: Color32::from_rgb(0, 212, 255),
            cyber_green: Color32::from_rgb(0, 255, 136),
            cyber_purple: Color32::from_rgb(168, 85, 247),
            destructive: Color32::from_rgb(239, 68, 68),

            border: Color32::from_rgb(55, 65, 81),
            grid: Color32::from_rgba_unmultiplied(0, 212, 255, 14),
        }
    }
}

/// Complete viewer theme
#[derive(Debug, Clone)]
pub struct PortfolioTheme {
    /// Theme colors
    pub colors: ThemeColors,
    /// Card rounding
    pub card_rounding: f32,
    /// Widget rounding
    pub widget_rounding: f32,
    /// Border width
    pub border_width: f32,
    /// Item spacing
    pub item_spacing: f32,
}

impl Default for PortfolioTheme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::cyber(),
            card_rounding: 10.0,
            widget_rounding: 8.0,
            border_width: 1.0,
            item_spacing: 10.0,
        }
    }
}

impl PortfolioTheme {
    /// Convert to egui Style
    pub fn to_egui_style(&self) -> Style {
        let mut style = Style::default();
        style.visuals = self.to_egui_visuals();
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style
    }

    /// Convert to egui Visuals
    pub fn to_egui_visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.window_fill = colors.card;
        visuals.window_stroke = Stroke::new(self.border_width, colors.border);
        visuals.window_rounding = Rounding::same(self.card_rounding);
        visuals.panel_fill = colors.background;

        visuals.widgets.noninteractive.bg_fill = colors.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(self.border_width, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text_secondary);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.widget_rounding);

        visuals.widgets.inactive.bg_fill = colors.card;
        visuals.widgets.inactive.weak_bg_fill = colors.card;
        visuals.widgets.inactive.bg_stroke = Stroke::new(self.border_width, colors.cyber_blue.gamma_multiply(0.6));
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text_primary);
        visuals.widgets.inactive.rounding = Rounding::same(self.widget_rounding);

        visuals.widgets.hovered.bg_fill = colors.cyber_blue.gamma_multiply(0.25);
        visuals.widgets.hovered.weak_bg_fill = colors.cyber_blue.gamma_multiply(0.25);
        visuals.widgets.hovered.bg_stroke = Stroke::new(self.border_width + 0.5, colors.cyber_blue);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors.cyber_blue);
        visuals.widgets.hovered.rounding = Rounding::same(self.widget_rounding);

        visuals.widgets.active.bg_fill = colors.cyber_blue.gamma_multiply(0.4);
        visuals.widgets.active.weak_bg_fill = colors.cyber_blue.gamma_multiply(0.4);
        visuals.widgets.active.bg_stroke = Stroke::new(self.border_width + 0.5, colors.cyber_green);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors.text_primary);
        visuals.widgets.active.rounding = Rounding::same(self.widget_rounding);

        visuals.selection.bg_fill = colors.cyber_blue.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, colors.cyber_blue);

        visuals.override_text_color = Some(colors.text_primary);
        visuals.hyperlink_color = colors.cyber_blue;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.card;

        visuals
    }

    /// Apply this theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.to_egui_style());
    }
}

/// Paint the faint background grid used behind every view
pub fn paint_grid(painter: &egui::Painter, rect: egui::Rect, colors: &ThemeColors, spacing: f32) {
    let stroke = Stroke::new(1.0, colors.grid);
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        x += spacing;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        y += spacing;
    }
}

/// Scale a color's alpha by `opacity`
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_resolves_against_palette() {
        let colors = ThemeColors::cyber();
        assert_eq!(Accent::Blue.color(&colors), colors.cyber_blue);
        assert_eq!(Accent::Purple.color(&colors), colors.cyber_purple);
    }

    #[test]
    fn test_visuals_are_dark() {
        let visuals = PortfolioTheme::default().to_egui_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, ThemeColors::cyber().background);
    }

    #[test]
    fn test_with_opacity_clamps() {
        let c = Color32::from_rgb(200, 100, 50);
        assert_eq!(with_opacity(c, 2.0), c);
        assert_eq!(with_opacity(c, -1.0).a(), 0);
    }
}
