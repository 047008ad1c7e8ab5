// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reveal phases and the events that move between them.

use serde::{Deserialize, Serialize};

/// Phase of the reveal sequence.
///
/// Variants are declared in sequence order, so `Ord` matches the only
/// direction a session may move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum RevealPhase {
    /// Loading intro is on screen
    #[default]
    Loading,
    /// Curtain is drawn, waiting to open
    CurtainClosed,
    /// Curtain has been told to open
    CurtainOpening,
    /// Portfolio content is visible
    ContentVisible,
}

impl RevealPhase {
    /// Get all phases in sequence order
    pub fn all() -> &'static [RevealPhase] {
        &[
            RevealPhase::Loading,
            RevealPhase::CurtainClosed,
            RevealPhase::CurtainOpening,
            RevealPhase::ContentVisible,
        ]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            RevealPhase::Loading => "Loading",
            RevealPhase::CurtainClosed => "Curtain Closed",
            RevealPhase::CurtainOpening => "Curtain Opening",
            RevealPhase::ContentVisible => "Content Visible",
        }
    }

    /// `ContentVisible` ends the sequence for the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RevealPhase::ContentVisible)
    }

    /// Whether the curtain view is on screen in this phase
    pub fn shows_curtain(&self) -> bool {
        matches!(self, RevealPhase::CurtainClosed | RevealPhase::CurtainOpening)
    }

    /// Resolve the phase reached from `self` on `event`.
    ///
    /// Returns `None` when the event has no meaning in this phase.
    pub fn on_event(self, event: RevealEvent) -> Option<RevealPhase> {
        match (self, event) {
            (RevealPhase::Loading, RevealEvent::LoadingElapsed) => Some(RevealPhase::CurtainClosed),
            (RevealPhase::CurtainClosed, RevealEvent::CurtainOpenElapsed) => {
                Some(RevealPhase::CurtainOpening)
            }
            (
                RevealPhase::CurtainOpening,
                RevealEvent::CurtainAnimationComplete | RevealEvent::CurtainFallbackElapsed,
            ) => Some(RevealPhase::ContentVisible),
            _ => None,
        }
    }
}

impl std::fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Event delivered to the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealEvent {
    /// Loading delay ran out
    LoadingElapsed,
    /// Delay between drawing and opening the curtain ran out
    CurtainOpenElapsed,
    /// Curtain view finished its opening animation
    CurtainAnimationComplete,
    /// Safety timer for a lost completion signal ran out
    CurtainFallbackElapsed,
}

impl RevealEvent {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            RevealEvent::LoadingElapsed => "Loading Elapsed",
            RevealEvent::CurtainOpenElapsed => "Curtain Open Elapsed",
            RevealEvent::CurtainAnimationComplete => "Curtain Animation Complete",
            RevealEvent::CurtainFallbackElapsed => "Curtain Fallback Elapsed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_is_sequence_order() {
        let phases = RevealPhase::all();
        for pair in phases.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(RevealPhase::ContentVisible.is_terminal());
        assert!(!RevealPhase::CurtainOpening.is_terminal());
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut phase = RevealPhase::Loading;
        for event in [
            RevealEvent::LoadingElapsed,
            RevealEvent::CurtainOpenElapsed,
            RevealEvent::CurtainAnimationComplete,
        ] {
            let next = phase.on_event(event).unwrap();
            assert!(next > phase);
            phase = next;
        }
        assert_eq!(phase, RevealPhase::ContentVisible);
    }

    #[test]
    fn test_out_of_order_events_rejected() {
        assert_eq!(RevealPhase::Loading.on_event(RevealEvent::CurtainOpenElapsed), None);
        assert_eq!(RevealPhase::Loading.on_event(RevealEvent::CurtainAnimationComplete), None);
        assert_eq!(RevealPhase::CurtainClosed.on_event(RevealEvent::CurtainAnimationComplete), None);
        assert_eq!(RevealPhase::CurtainClosed.on_event(RevealEvent::CurtainFallbackElapsed), None);
        for event in [
            RevealEvent::LoadingElapsed,
            RevealEvent::CurtainOpenElapsed,
            RevealEvent::CurtainAnimationComplete,
            RevealEvent::CurtainFallbackElapsed,
        ] {
            assert_eq!(RevealPhase::ContentVisible.on_event(event), None);
        }
    }

    #[test]
    fn test_curtain_phases() {
        let shown: Vec<_> = RevealPhase::all().iter().copied().filter(|p| p.shows_curtain()).collect();
        assert_eq!(shown, vec![RevealPhase::CurtainClosed, RevealPhase::CurtainOpening]);
    }

    #[test]
    fn test_fallback_completes_opening() {
        assert_eq!(
            RevealPhase::CurtainOpening.on_event(RevealEvent::CurtainFallbackElapsed),
            Some(RevealPhase::ContentVisible)
        );
    }
}
