// SPDX-License-Identifier: MIT OR Apache-2.0
//! The reveal sequencer.
//!
//! Decides, once per startup, whether the viewer plays the loading intro and
//! curtain or goes straight to content, then walks the phases in order:
//!
//! ```text
//! [start] --(flag absent)--> Loading --(loading delay)--> CurtainClosed
//!     --(open delay)--> CurtainOpening --(curtain complete)--> ContentVisible
//! [start] --(flag present)--> ContentVisible
//! ```

use crate::config::RevealConfig;
use crate::phase::{RevealEvent, RevealPhase};
use crate::scheduler::{ManualClock, Scheduler, TimerId};
use crate::session::SessionStore;
use crate::view::RenderSelection;
use std::time::Duration;

/// Value written under the session flag key
const FLAG_VALUE: &str = "true";

/// Observable state of one reveal run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    /// Current phase
    pub phase: RevealPhase,
    /// Whether the session flag was present at startup
    pub has_run_before: bool,
}

/// Record of a completed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    /// Phase left
    pub from: RevealPhase,
    /// Phase entered
    pub to: RevealPhase,
    /// Event that caused the change
    pub event: RevealEvent,
    /// Scheduler time of the change
    pub at: Duration,
}

/// Phase machine for the startup reveal
pub struct RevealSequencer<St, Sc = ManualClock<RevealEvent>> {
    state: RevealState,
    config: RevealConfig,
    store: St,
    scheduler: Sc,
    /// Timer driving the next step of the chain
    chain_timer: Option<TimerId>,
    /// Safety timer armed while the curtain opens
    fallback_timer: Option<TimerId>,
    flag_written: bool,
    mounted: bool,
    changes: Vec<PhaseChange>,
}

impl<St: SessionStore, Sc: Scheduler<RevealEvent>> RevealSequencer<St, Sc> {
    /// Read the session flag and pick the starting phase.
    ///
    /// Never fails: an unreadable store counts as "flag absent".
    pub fn initialize(config: RevealConfig, store: St, mut scheduler: Sc) -> Self {
        let has_run_before = read_flag(&store, &config.session_key);

        let (phase, chain_timer) = if has_run_before {
            tracing::info!("Intro already played this session, showing content");
            (RevealPhase::ContentVisible, None)
        } else {
            tracing::info!("Starting reveal sequence");
            let timer = scheduler.after(config.loading_delay(), RevealEvent::LoadingElapsed);
            tracing::debug!("Loading timer armed for {:?}", config.loading_delay());
            (RevealPhase::Loading, Some(timer))
        };

        Self {
            state: RevealState {
                phase,
                has_run_before,
            },
            config,
            store,
            scheduler,
            chain_timer,
            fallback_timer: None,
            flag_written: false,
            mounted: true,
            changes: Vec::new(),
        }
    }

    /// Apply an event. Returns the phase entered, or `None` if nothing changed.
    pub fn transition(&mut self, event: RevealEvent) -> Option<RevealPhase> {
        if !self.mounted {
            tracing::debug!("Ignoring {} after unmount", event.name());
            return None;
        }

        let from = self.state.phase;
        let Some(to) = from.on_event(event) else {
            tracing::debug!("Ignoring {} in phase {}", event.name(), from);
            return None;
        };

        if let Some(id) = self.chain_timer.take() {
            self.scheduler.cancel(id);
        }

        self.state.phase = to;
        let at = self.scheduler.now();
        self.changes.push(PhaseChange { from, to, event, at });
        tracing::info!("Reveal phase {from} -> {to} at {at:?}");

        match to {
            RevealPhase::CurtainClosed => {
                self.write_flag();
                let delay = self.config.curtain_open_delay();
                self.chain_timer = Some(self.scheduler.after(delay, RevealEvent::CurtainOpenElapsed));
                tracing::debug!("Curtain open timer armed for {delay:?}");
            }
            RevealPhase::CurtainOpening => {
                if let Some(fallback) = self.config.curtain_fallback() {
                    self.fallback_timer =
                        Some(self.scheduler.after(fallback, RevealEvent::CurtainFallbackElapsed));
                    tracing::debug!("Curtain fallback armed for {fallback:?}");
                }
            }
            RevealPhase::ContentVisible => {
                if let Some(id) = self.fallback_timer.take() {
                    self.scheduler.cancel(id);
                }
                if event == RevealEvent::CurtainFallbackElapsed {
                    tracing::warn!("Curtain never reported completion, revealing content anyway");
                }
            }
            RevealPhase::Loading => {}
        }

        Some(to)
    }

    /// Advance time by `delta`, firing every timer that comes due in order
    pub fn update(&mut self, delta: Duration) {
        if !self.mounted {
            return;
        }

        let until = self.scheduler.now() + delta;
        while let Some(event) = self.scheduler.poll_due(until) {
            self.transition(event);
        }
        self.scheduler.settle(until);
    }

    /// Completion callback for the curtain view
    pub fn on_curtain_animation_complete(&mut self) -> Option<RevealPhase> {
        self.transition(RevealEvent::CurtainAnimationComplete)
    }

    /// Tear down: cancel pending timers and ignore everything afterwards
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for id in [self.chain_timer.take(), self.fallback_timer.take()].into_iter().flatten() {
            self.scheduler.cancel(id);
        }
        tracing::debug!("Reveal sequencer unmounted in phase {}", self.state.phase);
    }

    /// Drain the transitions recorded since the last call
    pub fn take_changes(&mut self) -> Vec<PhaseChange> {
        std::mem::take(&mut self.changes)
    }

    /// What the presentation layer should render now
    pub fn render_selection(&self) -> RenderSelection {
        RenderSelection::for_phase(self.state.phase)
    }

    fn write_flag(&mut self) {
        if self.flag_written {
            return;
        }
        self.flag_written = true;
        match self.store.set(&self.config.session_key, FLAG_VALUE) {
            Ok(()) => tracing::debug!("Session flag '{}' set", self.config.session_key),
            Err(e) => tracing::warn!("Could not persist session flag, ignoring: {e}"),
        }
    }
}

impl<St, Sc> RevealSequencer<St, Sc> {
    /// Current state
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Current phase
    pub fn phase(&self) -> RevealPhase {
        self.state.phase
    }

    /// Whether the intro had already played when this run started
    pub fn has_run_before(&self) -> bool {
        self.state.has_run_before
    }

    /// Gate for the main content renderer
    pub fn content_visible(&self) -> bool {
        self.state.phase == RevealPhase::ContentVisible
    }

    /// Whether the owning view is still alive
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Active configuration
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Injected session store
    pub fn store(&self) -> &St {
        &self.store
    }

    /// Injected scheduler
    pub fn scheduler(&self) -> &Sc {
        &self.scheduler
    }

    /// Give the session store back, e.g. to hand it to the next run
    pub fn into_store(self) -> St {
        self.store
    }
}

fn read_flag<St: SessionStore>(store: &St, key: &str) -> bool {
    match store.get(key) {
        Ok(Some(value)) => !value.is_empty(),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!("Session storage unreadable, treating flag as absent: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, SessionError, SESSION_FLAG_KEY};

    type TestSequencer<St = MemorySessionStore> = RevealSequencer<St, ManualClock<RevealEvent>>;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn fresh() -> TestSequencer {
        RevealSequencer::initialize(RevealConfig::default(), MemorySessionStore::new(), ManualClock::new())
    }

    fn flag_set(sequencer: &TestSequencer) -> bool {
        sequencer.store().get(SESSION_FLAG_KEY).unwrap().is_some()
    }

    /// Store whose every operation fails
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
            Err(SessionError::Unavailable("disabled".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), SessionError> {
            Err(SessionError::Unavailable("disabled".into()))
        }
    }

    /// Store counting writes
    #[derive(Default)]
    struct CountingStore {
        inner: MemorySessionStore,
        writes: usize,
    }

    impl SessionStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
            self.writes += 1;
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_fresh_session_full_chain() {
        let mut seq = fresh();
        assert_eq!(
            seq.state(),
            RevealState {
                phase: RevealPhase::Loading,
                has_run_before: false,
            }
        );
        assert!(!flag_set(&seq));
        assert_eq!(seq.scheduler().pending(), 1);

        seq.update(ms(2999));
        assert_eq!(seq.phase(), RevealPhase::Loading);

        seq.update(ms(1));
        assert_eq!(seq.phase(), RevealPhase::CurtainClosed);
        assert!(flag_set(&seq));

        seq.update(ms(499));
        assert_eq!(seq.phase(), RevealPhase::CurtainClosed);
        seq.update(ms(1));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);

        // Opening alone never reaches content
        seq.update(ms(60_000));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
        assert!(!seq.content_visible());

        assert_eq!(seq.on_curtain_animation_complete(), Some(RevealPhase::ContentVisible));
        assert!(seq.content_visible());
        assert_eq!(seq.scheduler().pending(), 0);
    }

    #[test]
    fn test_flag_present_skips_intro() {
        let store = MemorySessionStore::with_entries([(SESSION_FLAG_KEY, "true")]);
        let seq: TestSequencer =
            RevealSequencer::initialize(RevealConfig::default(), store, ManualClock::new());

        assert_eq!(
            seq.state(),
            RevealState {
                phase: RevealPhase::ContentVisible,
                has_run_before: true,
            }
        );
        assert!(seq.content_visible());
        assert_eq!(seq.scheduler().pending(), 0);
    }

    #[test]
    fn test_empty_flag_counts_as_absent() {
        let store = MemorySessionStore::with_entries([(SESSION_FLAG_KEY, "")]);
        let seq: TestSequencer =
            RevealSequencer::initialize(RevealConfig::default(), store, ManualClock::new());
        assert_eq!(seq.phase(), RevealPhase::Loading);
    }

    #[test]
    fn test_reloads_in_same_session_skip_intro() {
        let mut first = fresh();
        first.update(ms(3000));
        assert_eq!(first.phase(), RevealPhase::CurtainClosed);

        // Reload mid-animation
        let mut store = first.into_store();
        for _ in 0..3 {
            let seq: TestSequencer =
                RevealSequencer::initialize(RevealConfig::default(), store, ManualClock::new());
            assert_eq!(seq.phase(), RevealPhase::ContentVisible);
            assert!(seq.has_run_before());
            store = seq.into_store();
        }
    }

    #[test]
    fn test_unmount_before_loading_elapses() {
        let mut seq = fresh();
        seq.unmount();
        assert!(!seq.is_mounted());
        assert_eq!(seq.scheduler().pending(), 0);

        seq.update(ms(10_000));
        assert_eq!(seq.phase(), RevealPhase::Loading);
        assert!(!flag_set(&seq));
        assert_eq!(seq.transition(RevealEvent::LoadingElapsed), None);
        assert_eq!(seq.on_curtain_animation_complete(), None);
        assert!(seq.take_changes().is_empty());
    }

    #[test]
    fn test_unmount_cancels_fallback() {
        let config = RevealConfig::default().with_curtain_fallback(ms(4000));
        let mut seq: TestSequencer =
            RevealSequencer::initialize(config, MemorySessionStore::new(), ManualClock::new());
        seq.update(ms(3500));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
        assert_eq!(seq.scheduler().pending(), 1);

        seq.unmount();
        assert_eq!(seq.scheduler().pending(), 0);

        seq.update(ms(60_000));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
        assert!(seq.take_changes().iter().all(|c| c.event != RevealEvent::CurtainFallbackElapsed));
    }

    #[test]
    fn test_unmount_during_curtain_delay() {
        let mut seq = fresh();
        seq.update(ms(3200));
        seq.unmount();
        seq.update(ms(1000));
        assert_eq!(seq.phase(), RevealPhase::CurtainClosed);
    }

    #[test]
    fn test_phases_are_monotonic_and_never_skipped() {
        let mut seq = fresh();
        seq.update(ms(10_000));
        seq.on_curtain_animation_complete();

        let changes = seq.take_changes();
        let path: Vec<_> = changes.iter().map(|c| (c.from, c.to)).collect();
        assert_eq!(
            path,
            vec![
                (RevealPhase::Loading, RevealPhase::CurtainClosed),
                (RevealPhase::CurtainClosed, RevealPhase::CurtainOpening),
                (RevealPhase::CurtainOpening, RevealPhase::ContentVisible),
            ]
        );
        assert!(changes.iter().all(|c| c.to > c.from));
        assert!(changes.windows(2).all(|w| w[0].at <= w[1].at));
    }

    #[test]
    fn test_single_large_step_keeps_timer_spacing() {
        let mut seq = fresh();
        seq.update(ms(5000));

        let changes = seq.take_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].at, ms(3000));
        assert_eq!(changes[1].at, ms(3500));
        assert_eq!(seq.scheduler().now(), ms(5000));
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        let mut seq = fresh();
        assert_eq!(seq.on_curtain_animation_complete(), None);
        assert_eq!(seq.transition(RevealEvent::CurtainOpenElapsed), None);
        assert_eq!(seq.phase(), RevealPhase::Loading);

        seq.update(ms(3000));
        assert_eq!(seq.on_curtain_animation_complete(), None);
        assert_eq!(seq.phase(), RevealPhase::CurtainClosed);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut seq = fresh();
        seq.update(ms(3500));
        assert_eq!(seq.on_curtain_animation_complete(), Some(RevealPhase::ContentVisible));
        assert_eq!(seq.on_curtain_animation_complete(), None);
        assert_eq!(seq.take_changes().len(), 3);
    }

    #[test]
    fn test_manual_transition_disarms_stale_timer() {
        let mut seq = fresh();
        assert_eq!(seq.transition(RevealEvent::LoadingElapsed), Some(RevealPhase::CurtainClosed));
        // Only the curtain-open timer remains
        assert_eq!(seq.scheduler().pending(), 1);
        seq.update(ms(500));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
    }

    #[test]
    fn test_broken_store_falls_back_to_intro() {
        let mut seq: TestSequencer<BrokenStore> =
            RevealSequencer::initialize(RevealConfig::default(), BrokenStore, ManualClock::new());
        assert_eq!(seq.phase(), RevealPhase::Loading);

        seq.update(ms(3500));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
        seq.on_curtain_animation_complete();
        assert!(seq.content_visible());
    }

    #[test]
    fn test_flag_written_once() {
        let mut seq: TestSequencer<CountingStore> =
            RevealSequencer::initialize(RevealConfig::default(), CountingStore::default(), ManualClock::new());
        seq.update(ms(10_000));
        seq.on_curtain_animation_complete();
        assert_eq!(seq.store().writes, 1);
    }

    #[test]
    fn test_fallback_reveals_content() {
        let config = RevealConfig::default().with_curtain_fallback(ms(4000));
        let mut seq: TestSequencer =
            RevealSequencer::initialize(config, MemorySessionStore::new(), ManualClock::new());
        assert_eq!(seq.config().curtain_fallback(), Some(ms(4000)));

        seq.update(ms(3500));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
        assert_eq!(seq.scheduler().pending(), 1);

        seq.update(ms(3999));
        assert_eq!(seq.phase(), RevealPhase::CurtainOpening);
        seq.update(ms(1));
        assert_eq!(seq.phase(), RevealPhase::ContentVisible);

        let last = seq.take_changes().pop().unwrap();
        assert_eq!(last.event, RevealEvent::CurtainFallbackElapsed);
    }

    #[test]
    fn test_completion_cancels_fallback() {
        let config = RevealConfig::default().with_curtain_fallback(ms(4000));
        let mut seq: TestSequencer =
            RevealSequencer::initialize(config, MemorySessionStore::new(), ManualClock::new());

        seq.update(ms(3500));
        seq.on_curtain_animation_complete();
        assert_eq!(seq.scheduler().pending(), 0);

        seq.update(ms(10_000));
        assert_eq!(seq.take_changes().len(), 3);
    }

    #[test]
    fn test_render_selection_follows_phase() {
        let mut seq = fresh();
        assert!(seq.render_selection().shows_loading());

        seq.update(ms(3000));
        assert_eq!(seq.render_selection().curtain(), Some(false));

        seq.update(ms(500));
        assert_eq!(seq.render_selection().curtain(), Some(true));

        seq.on_curtain_animation_complete();
        assert!(seq.render_selection().content_visible);
    }
}
