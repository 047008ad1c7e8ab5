// SPDX-License-Identifier: MIT OR Apache-2.0
//! Main portfolio content: hero header and scroll-revealed sections.

use super::{badge, reveal};
use crate::content::{
    Project, ABOUT_INTRO, ACHIEVEMENTS, CONTACTS, HERO, PROJECTS, SKILLS, SOCIALS,
};
use crate::theme::{paint_grid, with_opacity, PortfolioTheme};
use egui::{Align, Color32, CursorIcon, RichText, Sense};
use portfolio_reveal::{visible_fraction, Easing, EntranceTrigger, Stagger};

/// Maximum width of the content column
const COLUMN_WIDTH: f32 = 960.0;
/// Distance items rise while fading in
const RISE: f32 = 30.0;
/// Hero items enter one after another once the content mounts
const HERO_STAGGER: Stagger = Stagger {
    delay_children: 0.5,
    stagger_children: 0.3,
    item_duration: 1.0,
    easing: Easing::EaseOutCubic,
};
/// Section children
const ITEM_STAGGER: Stagger = Stagger {
    delay_children: 0.3,
    stagger_children: 0.2,
    item_duration: 0.6,
    easing: Easing::EaseOutCubic,
};
/// Skill bars fill after their cards appear
const BAR_STAGGER: Stagger = Stagger {
    delay_children: 0.3,
    stagger_children: 0.1,
    item_duration: 1.2,
    easing: Easing::EaseOutCubic,
};

/// Scroll-revealed content sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Intro and achievements
    About,
    /// Skill bars
    Skills,
    /// Project cards
    Projects,
    /// Contact methods
    Contact,
    /// Social profiles
    Social,
}

impl SectionKind {
    /// All sections in page order
    pub const ALL: [SectionKind; 5] = [
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Contact,
        SectionKind::Social,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Heading text
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::About => "About Me",
            SectionKind::Skills => "Skills & Expertise",
            SectionKind::Projects => "Featured Projects",
            SectionKind::Contact => "Get In Touch",
            SectionKind::Social => "Connect With Me",
        }
    }

    /// Navigation label
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionKind::About => "About",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Contact => "Contact",
            SectionKind::Social => "Social",
        }
    }

    /// Visible share that starts the entrance
    pub fn threshold(self) -> f32 {
        match self {
            SectionKind::Skills => 0.2,
            _ => EntranceTrigger::DEFAULT_THRESHOLD,
        }
    }
}

/// Main content view
#[derive(Debug, Clone)]
pub struct ContentView {
    hero: EntranceTrigger,
    sections: [EntranceTrigger; 5],
    scroll_to: Option<SectionKind>,
    time: f32,
}

impl ContentView {
    /// Create the view.
    ///
    /// With `observe` off every section starts latched and shows at once.
    pub fn new(observe: bool) -> Self {
        let sections = SectionKind::ALL.map(|kind| {
            if observe {
                EntranceTrigger::new(kind.threshold())
            } else {
                EntranceTrigger::without_observer()
            }
        });
        Self {
            // The hero is on screen as soon as the content mounts
            hero: EntranceTrigger::without_observer(),
            sections,
            scroll_to: None,
            time: 0.0,
        }
    }

    /// Advance entrance animations by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.hero.update(dt);
        for trigger in &mut self.sections {
            trigger.update(dt);
        }
    }

    /// Entrance state of `kind`
    pub fn trigger(&self, kind: SectionKind) -> &EntranceTrigger {
        &self.sections[kind.index()]
    }

    /// Report the visible share of `kind`; true when this latches it
    pub fn observe_section(&mut self, kind: SectionKind, fraction: f32) -> bool {
        let latched = self.sections[kind.index()].observe(fraction);
        if latched {
            tracing::debug!("Section {:?} entered view", kind);
        }
        latched
    }

    /// Scroll `kind` into view on the next frame
    pub fn request_scroll(&mut self, kind: SectionKind) {
        self.scroll_to = Some(kind);
    }

    /// Pending scroll target
    pub fn scroll_target(&self) -> Option<SectionKind> {
        self.scroll_to
    }

    /// Render the page
    pub fn show(&mut self, ctx: &egui::Context, theme: &PortfolioTheme) {
        let colors = &theme.colors;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.background))
            .show(ctx, |ui| {
                paint_grid(ui.painter(), ui.max_rect(), colors, 48.0);
                let viewport_height = ui.available_height();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(COLUMN_WIDTH);

                            if let Some(kind) = hero(ui, &self.hero, theme, self.time, viewport_height) {
                                self.request_scroll(kind);
                            }

                            for kind in SectionKind::ALL {
                                self.section(ui, kind, theme, viewport_height);
                            }
                        });
                    });
            });
    }

    fn section(&mut self, ui: &mut egui::Ui, kind: SectionKind, theme: &PortfolioTheme, min_height: f32) {
        let trigger = self.trigger(kind);
        let rect = ui
            .vertical_centered(|ui| {
                ui.set_min_height(min_height);
                ui.add_space(64.0);
                reveal(ui, trigger.item_progress(&ITEM_STAGGER, 0), RISE, |ui| {
                    heading(ui, kind.title(), theme);
                });
                ui.add_space(32.0);
                match kind {
                    SectionKind::About => about(ui, trigger, theme),
                    SectionKind::Skills => skills(ui, trigger, theme),
                    SectionKind::Projects => projects(ui, trigger, theme),
                    SectionKind::Contact => contact(ui, trigger, theme),
                    SectionKind::Social => social(ui, trigger, theme),
                }
                ui.add_space(64.0);
            })
            .response
            .rect;

        let clip = ui.clip_rect();
        self.observe_section(kind, visible_fraction(rect.top(), rect.bottom(), clip.top(), clip.bottom()));

        if self.scroll_target() == Some(kind) {
            ui.scroll_to_rect(rect, Some(Align::TOP));
            self.scroll_to = None;
        }
    }
}

/// Hero header; returns the section a navigation control asked for
fn hero(
    ui: &mut egui::Ui,
    trigger: &EntranceTrigger,
    theme: &PortfolioTheme,
    time: f32,
    min_height: f32,
) -> Option<SectionKind> {
    let colors = &theme.colors;
    let progress = |index| trigger.item_progress(&HERO_STAGGER, index);
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.set_min_height(min_height);
        ui.add_space(min_height * 0.2);

        reveal(ui, progress(0), RISE, |ui| {
            ui.label(RichText::new("Hello, I'm").size(20.0).color(colors.text_muted));
        });
        reveal(ui, progress(1), RISE, |ui| {
            ui.label(RichText::new(HERO.first_name).size(84.0).strong().color(colors.cyber_blue));
            ui.label(RichText::new(HERO.last_name).size(84.0).strong().color(colors.text_primary));
        });
        ui.add_space(16.0);
        reveal(ui, progress(2), RISE, |ui| {
            for (role, accent) in HERO.roles {
                ui.label(RichText::new(*role).size(22.0).color(accent.color(colors)));
            }
        });
        ui.add_space(24.0);
        reveal(ui, progress(3), RISE, |ui| {
            ui.horizontal(|ui| {
                // Center the row inside the column
                let row_width = SectionKind::ALL.len() as f32 * 96.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                for kind in SectionKind::ALL {
                    let button = egui::Button::new(RichText::new(kind.nav_label()).color(colors.text_secondary))
                        .frame(false)
                        .min_size(egui::vec2(88.0, 32.0));
                    if ui.add(button).on_hover_cursor(CursorIcon::PointingHand).clicked() {
                        target = Some(kind);
                    }
                }
            });
        });
        ui.add_space(32.0);
        reveal(ui, progress(4), RISE, |ui| {
            let cta = egui::Button::new(RichText::new(HERO.cta).size(18.0).strong().color(colors.background))
                .fill(colors.cyber_blue)
                .min_size(egui::vec2(200.0, 48.0));
            if ui.add(cta).on_hover_cursor(CursorIcon::PointingHand).clicked() {
                target = Some(SectionKind::About);
            }
        });

        // Bobbing scroll hint
        ui.add_space(48.0);
        let hint = progress(5);
        if hint > 0.0 {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 40.0), Sense::hover());
            let bob = 6.0 * (time * std::f32::consts::TAU / 2.0).sin();
            let stroke = egui::Stroke::new(2.0, with_opacity(colors.cyber_blue, hint));
            ui.painter().rect_stroke(rect, 12.0, stroke);
            ui.painter().circle_filled(
                rect.center_top() + egui::vec2(0.0, 12.0 + bob),
                3.0,
                with_opacity(colors.cyber_blue, hint),
            );
        }
    });

    target
}

fn heading(ui: &mut egui::Ui, title: &str, theme: &PortfolioTheme) {
    let colors = &theme.colors;
    ui.label(RichText::new(title).size(40.0).strong().color(colors.text_primary));
    let (rect, _) = ui.allocate_exact_size(egui::vec2(96.0, 4.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, colors.cyber_blue);
}

/// Bordered card of fixed width
fn card<R>(
    ui: &mut egui::Ui,
    theme: &PortfolioTheme,
    accent: Color32,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(theme.colors.card)
        .stroke(egui::Stroke::new(theme.border_width, with_opacity(accent, 0.3)))
        .rounding(theme.card_rounding)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
}

/// Width of one card when `columns` share the current row
fn column_width(ui: &egui::Ui, columns: usize, theme: &PortfolioTheme) -> f32 {
    let gaps = theme.item_spacing * (columns.saturating_sub(1)) as f32;
    // Inner margin on both sides of every card
    let margins = 40.0 * columns as f32;
    ((ui.available_width() - gaps - margins) / columns as f32).max(120.0)
}

fn about(ui: &mut egui::Ui, trigger: &EntranceTrigger, theme: &PortfolioTheme) {
    let colors = &theme.colors;
    reveal(ui, trigger.item_progress(&ITEM_STAGGER, 1), RISE, |ui| {
        ui.label(RichText::new(ABOUT_INTRO).size(18.0).color(colors.text_secondary));
    });
    ui.add_space(32.0);

    let width = column_width(ui, 2, theme);
    ui.horizontal_wrapped(|ui| {
        for (i, achievement) in ACHIEVEMENTS.iter().enumerate() {
            let accent = achievement.accent.color(colors);
            reveal(ui, trigger.item_progress(&ITEM_STAGGER, i + 2), RISE, |ui| {
                card(ui, theme, accent, width, |ui| {
                    ui.label(RichText::new(achievement.icon).size(28.0).color(accent));
                    ui.label(RichText::new(achievement.title).size(18.0).strong().color(colors.text_primary));
                    ui.label(RichText::new(achievement.description).color(colors.text_muted));
                });
            });
        }
    });
}

fn skills(ui: &mut egui::Ui, trigger: &EntranceTrigger, theme: &PortfolioTheme) {
    let colors = &theme.colors;
    let width = column_width(ui, 2, theme);
    ui.horizontal_wrapped(|ui| {
        for (i, skill) in SKILLS.iter().enumerate() {
            let accent = skill.accent.color(colors);
            let fill = trigger.item_progress(&BAR_STAGGER, i) * f32::from(skill.level) / 100.0;
            reveal(ui, trigger.item_progress(&ITEM_STAGGER, i + 1), RISE, |ui| {
                card(ui, theme, accent, width, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(skill.icon).size(22.0).color(accent));
                        ui.label(RichText::new(skill.name).size(17.0).strong().color(colors.text_primary));
                        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                            ui.label(RichText::new(format!("{}%", skill.level)).monospace().color(accent));
                        });
                    });
                    ui.add_space(8.0);
                    let (track, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 8.0), Sense::hover());
                    ui.painter().rect_filled(track, 4.0, colors.border);
                    if fill > 0.0 {
                        let mut bar = track;
                        bar.set_width(track.width() * fill);
                        ui.painter().rect_filled(bar, 4.0, accent);
                    }
                });
            });
        }
    });
}

fn projects(ui: &mut egui::Ui, trigger: &EntranceTrigger, theme: &PortfolioTheme) {
    let width = column_width(ui, 2, theme);
    ui.horizontal_wrapped(|ui| {
        for (i, project) in PROJECTS.iter().enumerate() {
            reveal(ui, trigger.item_progress(&ITEM_STAGGER, i + 1), RISE, |ui| {
                project_card(ui, project, theme, width);
            });
        }
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project, theme: &PortfolioTheme, width: f32) {
    let colors = &theme.colors;
    let accent = project.accent.color(colors);
    card(ui, theme, accent, width, |ui| {
        ui.label(RichText::new(project.title).size(19.0).strong().color(colors.text_primary));
        ui.add_space(4.0);
        ui.label(RichText::new(project.description).color(colors.text_muted));
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for tech in project.technologies {
                badge(ui, tech, accent);
            }
        });
        if let Some(url) = project.source_url {
            ui.add_space(12.0);
            ui.hyperlink_to(RichText::new("View Source").color(accent), url);
        }
    });
}

fn contact(ui: &mut egui::Ui, trigger: &EntranceTrigger, theme: &PortfolioTheme) {
    let colors = &theme.colors;
    reveal(ui, trigger.item_progress(&ITEM_STAGGER, 1), RISE, |ui| {
        ui.label(
            RichText::new("Open to remote work, freelance projects and security collaborations.")
                .size(18.0)
                .color(colors.text_secondary),
        );
    });
    ui.add_space(24.0);

    let width = column_width(ui, 1, theme).min(560.0);
    for (i, method) in CONTACTS.iter().enumerate() {
        let accent = method.accent.color(colors);
        reveal(ui, trigger.item_progress(&ITEM_STAGGER, i + 2), RISE, |ui| {
            card(ui, theme, accent, width, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(method.icon).size(24.0).color(accent));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(method.label).small().color(colors.text_muted));
                        match method.href {
                            Some(href) => {
                                ui.hyperlink_to(RichText::new(method.value).color(colors.text_primary), href);
                            }
                            None => {
                                ui.label(RichText::new(method.value).color(colors.text_primary));
                            }
                        }
                    });
                });
            });
        });
        ui.add_space(theme.item_spacing);
    }
}

fn social(ui: &mut egui::Ui, trigger: &EntranceTrigger, theme: &PortfolioTheme) {
    let colors = &theme.colors;
    let width = column_width(ui, SOCIALS.len(), theme);
    ui.horizontal_wrapped(|ui| {
        for (i, link) in SOCIALS.iter().enumerate() {
            let accent = link.accent.color(colors);
            reveal(ui, trigger.item_progress(&ITEM_STAGGER, i + 1), RISE, |ui| {
                card(ui, theme, accent, width, |ui| {
                    ui.hyperlink_to(RichText::new(link.name).size(20.0).strong().color(accent), link.url);
                    ui.label(RichText::new(link.description).color(colors.text_muted));
                });
            });
        }
    });

    ui.add_space(48.0);
    ui.label(RichText::new("© Arbaab Hussain").small().color(colors.text_muted));
}
