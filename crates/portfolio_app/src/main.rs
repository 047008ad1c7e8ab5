// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animated portfolio viewer.
//!
//! A single-window portfolio featuring:
//! - Loading intro on the first run of a session
//! - Curtain reveal between the intro and the content
//! - Hero, about, skills, projects, contact and social sections
//! - Scroll-triggered entrance animations
//! - Custom animated cursor
//!
//! ## Architecture
//!
//! All sequencing decisions live in `portfolio_reveal`. This binary owns the
//! window and GPU surface, feeds frame time into the reveal sequencer and
//! renders whichever view it selects with egui.

mod app;
mod config;
mod content;
mod cursor;
mod theme;
mod views;

use app::PortfolioApp;
use config::AppConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Config file looked up in the working directory
const CONFIG_FILE: &str = "portfolio.ron";

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("portfolio_app=debug".parse().expect("valid directive"))
        .add_directive("portfolio_reveal=debug".parse().expect("valid directive"))
        .add_directive("wgpu=warn".parse().expect("valid directive"))
        .add_directive("naga=warn".parse().expect("valid directive"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(std::path::Path::new(CONFIG_FILE));

    if let Err(e) = PortfolioApp::run(config) {
        tracing::error!("Portfolio crashed: {e}");
        std::process::exit(1);
    }
}
