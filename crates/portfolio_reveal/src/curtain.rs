// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timing model for the curtain that separates the intro from the content.

use crate::easing::Easing;

/// Curtain opening animation.
///
/// Stays closed until told to open, waits `open_delay`, then slides both
/// halves out over `duration`. Completion is reported once per opening.
#[derive(Debug, Clone)]
pub struct CurtainAnimation {
    /// Wait after opening is requested before the halves move (seconds)
    pub open_delay: f32,
    /// Slide duration (seconds)
    pub duration: f32,
    /// Slide easing
    pub easing: Easing,
    open: bool,
    elapsed: f32,
    completed: bool,
}

impl CurtainAnimation {
    /// Create a closed curtain with default timing
    pub fn new() -> Self {
        Self {
            open_delay: 0.5,
            duration: 1.5,
            easing: Easing::EaseInOut,
            open: false,
            elapsed: 0.0,
            completed: false,
        }
    }

    /// Set the `open` prop. Re-opening after a close starts a new lifecycle.
    pub fn set_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;
        self.elapsed = 0.0;
        self.completed = false;
    }

    /// Advance by `dt` seconds. Returns true on the frame the opening finishes.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.open || self.completed {
            return false;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.open_delay + self.duration {
            self.completed = true;
            return true;
        }
        false
    }

    /// Linear slide progress, 0 closed to 1 fully open
    pub fn progress(&self) -> f32 {
        if !self.open {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return if self.elapsed >= self.open_delay { 1.0 } else { 0.0 };
        }
        ((self.elapsed - self.open_delay) / self.duration).clamp(0.0, 1.0)
    }

    /// Eased slide offset as a fraction of each half's width
    pub fn offset(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    /// Whether opening has been requested
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the current opening has finished
    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

impl Default for CurtainAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_curtain_never_completes() {
        let mut curtain = CurtainAnimation::new();
        for _ in 0..100 {
            assert!(!curtain.update(0.1));
        }
        assert_eq!(curtain.offset(), 0.0);
    }

    #[test]
    fn test_opening_completes_once() {
        let mut curtain = CurtainAnimation::new();
        assert!(!curtain.is_open());
        curtain.set_open(true);
        assert!(curtain.is_open());

        assert!(!curtain.update(0.4));
        assert_eq!(curtain.progress(), 0.0);

        assert!(!curtain.update(0.85));
        assert!(curtain.progress() > 0.4 && curtain.progress() < 0.6);

        assert!(curtain.update(1.0));
        assert!(curtain.is_complete());
        assert_eq!(curtain.offset(), 1.0);

        assert!(!curtain.update(1.0));
        curtain.set_open(true);
        assert!(!curtain.update(1.0));
    }

    #[test]
    fn test_reopen_starts_new_lifecycle() {
        let mut curtain = CurtainAnimation::new();
        curtain.set_open(true);
        assert!(curtain.update(5.0));

        curtain.set_open(false);
        assert_eq!(curtain.offset(), 0.0);
        curtain.set_open(true);
        assert!(curtain.update(5.0));
    }
}
