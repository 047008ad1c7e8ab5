// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reveal sequencing for the portfolio viewer.
//!
//! This crate decides what the viewer shows after startup:
//! - Loading intro on the first run of a session
//! - Curtain opening between the intro and the content
//! - Straight-to-content when the intro already played
//! - Fire-once entrance animations for content sections
//!
//! ## Architecture
//!
//! The sequencer is built on:
//! - An explicit phase machine driven by [`RevealEvent`]s
//! - An injected [`Scheduler`] so time can be advanced deterministically
//! - An injected [`SessionStore`] holding the "already shown" flag
//! - Presentation-neutral timing models for the curtain and sections

pub mod config;
pub mod curtain;
pub mod easing;
pub mod entrance;
pub mod phase;
pub mod scheduler;
pub mod sequencer;
pub mod session;
pub mod view;

pub use config::{ConfigError, RevealConfig};
pub use curtain::CurtainAnimation;
pub use easing::{lerp, Easing};
pub use entrance::{visible_fraction, EntranceTrigger, Stagger};
pub use phase::{RevealEvent, RevealPhase};
pub use scheduler::{ManualClock, Scheduler, TimerId};
pub use sequencer::{PhaseChange, RevealSequencer, RevealState};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore, SESSION_FLAG_KEY};
pub use view::{ActiveView, RenderSelection};
