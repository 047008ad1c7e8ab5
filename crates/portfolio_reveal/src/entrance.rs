// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scroll-triggered entrance animations for content sections.
//!
//! Each section owns an [`EntranceTrigger`]. The first time enough of the
//! section is on screen the trigger latches, and it stays latched for as
//! long as the section exists. [`Stagger`] then spreads the entrance of the
//! section's children over time.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};

/// Fire-once visibility latch
#[derive(Debug, Clone)]
pub struct EntranceTrigger {
    threshold: f32,
    animated: bool,
    elapsed: f32,
}

impl EntranceTrigger {
    /// Default share of the section that must be visible
    pub const DEFAULT_THRESHOLD: f32 = 0.3;

    /// Create an unlatched trigger firing at `threshold` (clamped to 0..=1)
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            animated: false,
            elapsed: 0.0,
        }
    }

    /// Trigger for environments without visibility observation.
    ///
    /// Starts latched so content is never stuck hidden.
    pub fn without_observer() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            animated: true,
            elapsed: 0.0,
        }
    }

    /// Report the currently visible share of the section.
    ///
    /// Returns true only on the call that latches the trigger.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if self.animated {
            return false;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.animated = true;
            self.elapsed = 0.0;
            tracing::trace!("Entrance latched at {:.0}% visible", visible_fraction * 100.0);
            return true;
        }
        false
    }

    /// Advance the time since latching by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.animated {
            self.elapsed += dt.max(0.0);
        }
    }

    /// Whether the entrance has been triggered
    pub fn has_animated(&self) -> bool {
        self.animated
    }

    /// Seconds since the trigger latched
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Visibility threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Eased entrance progress of child `index` under `stagger`
    pub fn item_progress(&self, stagger: &Stagger, index: usize) -> f32 {
        if !self.animated {
            return 0.0;
        }
        stagger.item_progress(index, self.elapsed)
    }
}

impl Default for EntranceTrigger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

/// Share of an item's vertical extent inside the viewport (0..=1)
pub fn visible_fraction(item_top: f32, item_bottom: f32, viewport_top: f32, viewport_bottom: f32) -> f32 {
    let height = item_bottom - item_top;
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = item_bottom.min(viewport_bottom) - item_top.max(viewport_top);
    (overlap / height).clamp(0.0, 1.0)
}

/// Staggered entrance timing for a group of children
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    /// Delay before the first child starts (seconds)
    pub delay_children: f32,
    /// Offset between consecutive children (seconds)
    pub stagger_children: f32,
    /// Duration of one child's entrance (seconds)
    pub item_duration: f32,
    /// Easing of each child's entrance
    pub easing: Easing,
}

impl Stagger {
    /// Create a stagger with the given delays and default item timing
    pub fn new(delay_children: f32, stagger_children: f32) -> Self {
        Self {
            delay_children,
            stagger_children,
            ..Self::default()
        }
    }

    /// Set the per-child duration
    pub fn with_item_duration(mut self, item_duration: f32) -> Self {
        self.item_duration = item_duration;
        self
    }

    /// Eased progress of child `index` at `elapsed` seconds after the trigger
    pub fn item_progress(&self, index: usize, elapsed: f32) -> f32 {
        let start = self.delay_children + self.stagger_children * index as f32;
        let local = elapsed - start;
        if self.item_duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        self.easing.apply(local / self.item_duration)
    }

    /// Time until the last of `count` children has finished
    pub fn total_duration(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        self.delay_children + self.stagger_children * (count - 1) as f32 + self.item_duration
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay_children: 0.3,
            stagger_children: 0.2,
            item_duration: 0.6,
            easing: Easing::EaseOutCubic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_scenario() {
        let mut trigger = EntranceTrigger::new(0.3);

        assert!(!trigger.observe(0.1));
        assert!(!trigger.has_animated());

        assert!(trigger.observe(0.4));
        assert!(trigger.has_animated());

        assert!(!trigger.observe(0.0));
        assert!(trigger.has_animated());

        // Scrolling back in does not replay
        assert!(!trigger.observe(1.0));
        assert!(trigger.has_animated());
    }

    #[test]
    fn test_exact_threshold_latches() {
        let mut trigger = EntranceTrigger::new(0.2);
        assert!(trigger.observe(0.2));
    }

    #[test]
    fn test_zero_threshold_needs_some_visibility() {
        let mut trigger = EntranceTrigger::new(0.0);
        assert!(!trigger.observe(0.0));
        assert!(trigger.observe(0.01));
    }

    #[test]
    fn test_without_observer_is_animated() {
        let trigger = EntranceTrigger::without_observer();
        assert!(trigger.has_animated());
        assert_eq!(trigger.item_progress(&Stagger::new(0.0, 0.0).with_item_duration(0.0), 0), 1.0);
    }

    #[test]
    fn test_elapsed_only_after_latch() {
        let mut trigger = EntranceTrigger::default();
        trigger.update(1.0);
        assert_eq!(trigger.elapsed(), 0.0);
        assert_eq!(trigger.item_progress(&Stagger::default(), 0), 0.0);

        trigger.observe(0.5);
        trigger.update(0.5);
        assert_eq!(trigger.elapsed(), 0.5);
    }

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(0.0, 100.0, 0.0, 800.0), 1.0);
        assert_eq!(visible_fraction(700.0, 900.0, 0.0, 800.0), 0.5);
        assert_eq!(visible_fraction(900.0, 1000.0, 0.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-50.0, 50.0, 0.0, 800.0), 0.5);
        assert_eq!(visible_fraction(10.0, 10.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_stagger_orders_children() {
        let stagger = Stagger::new(0.3, 0.2).with_item_duration(0.5);

        assert_eq!(stagger.item_progress(0, 0.3), 0.0);
        let first = stagger.item_progress(0, 0.6);
        let second = stagger.item_progress(1, 0.6);
        assert!(first > second);
        assert!(second > 0.0);

        assert_eq!(stagger.item_progress(3, stagger.total_duration(4)), 1.0);
        assert_eq!(stagger.total_duration(0), 0.0);
    }
}
