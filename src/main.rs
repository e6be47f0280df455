#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use eventpage_core::EventConfig;

/// Event config resolved at startup
static EVENT_CONFIG: OnceLock<EventConfig> = OnceLock::new();

/// Get the event config (loaded from command line or defaults)
pub fn get_event_config() -> EventConfig {
    EVENT_CONFIG.get().cloned().unwrap_or_default()
}

/// Event Page - countdown, gallery and gift details
#[derive(Parser, Debug)]
#[command(name = "eventpage-desktop")]
#[command(about = "Event Page - countdown, gallery and gift details")]
struct Args {
    /// Event config file (default: <config dir>/eventpage/event.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target date/time (overrides the config)
    #[arg(short, long)]
    target: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = EventConfig::load_or_default(args.config.as_deref());
    if let Some(target) = args.target {
        config = config.with_date_iso(target);
    }

    tracing::info!("Starting '{}' counting down to {}", config.title, config.date_iso);

    let title = format!("{} - Event Page", config.title);
    let _ = EVENT_CONFIG.set(config);

    // Phone-shaped window; the page is laid out for narrow screens
    let window_width = 480.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}
