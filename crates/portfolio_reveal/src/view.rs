// SPDX-License-Identifier: MIT OR Apache-2.0
//! What the presentation layer should show for a given reveal state.

use crate::phase::RevealPhase;

/// The one full-screen view active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// Loading intro
    Loading,
    /// Curtain, drawn or opening
    Curtain {
        /// Whether the curtain should be opening
        open: bool,
    },
    /// Portfolio content
    Content,
}

/// Render instructions derived from the reveal phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSelection {
    /// Active full-screen view
    pub view: ActiveView,
    /// Gate for the main content renderer
    pub content_visible: bool,
}

impl RenderSelection {
    /// Derive render instructions for a phase
    pub fn for_phase(phase: RevealPhase) -> Self {
        let view = match phase {
            RevealPhase::Loading => ActiveView::Loading,
            RevealPhase::CurtainClosed => ActiveView::Curtain { open: false },
            RevealPhase::CurtainOpening => ActiveView::Curtain { open: true },
            RevealPhase::ContentVisible => ActiveView::Content,
        };
        Self {
            view,
            content_visible: phase == RevealPhase::ContentVisible,
        }
    }

    /// Whether the loading intro is shown
    pub fn shows_loading(&self) -> bool {
        self.view == ActiveView::Loading
    }

    /// Curtain `open` prop, or `None` when the curtain is not shown
    pub fn curtain(&self) -> Option<bool> {
        match self.view {
            ActiveView::Curtain { open } => Some(open),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_view_per_phase() {
        for phase in RevealPhase::all() {
            let selection = RenderSelection::for_phase(*phase);
            let shown = [
                selection.shows_loading(),
                selection.curtain().is_some(),
                selection.content_visible,
            ];
            assert_eq!(shown.iter().filter(|s| **s).count(), 1, "{phase}");
        }
    }

    #[test]
    fn test_curtain_open_prop() {
        assert_eq!(RenderSelection::for_phase(RevealPhase::CurtainClosed).curtain(), Some(false));
        assert_eq!(RenderSelection::for_phase(RevealPhase::CurtainOpening).curtain(), Some(true));
        assert_eq!(RenderSelection::for_phase(RevealPhase::Loading).curtain(), None);
    }
}
