//! Event Page Core Library
//!
//! Interaction logic for a static event invitation page, independent of any
//! UI toolkit.
//!
//! ## Overview
//!
//! - **Countdown**: counts down to the event and paints a days/hours/minutes/
//!   seconds breakdown every second until the target passes
//! - **Reveal**: one-shot scroll reveal for gallery items
//! - **Lightbox**: full-screen image viewer state
//! - **Music**: background audio with autoplay fallback
//! - **Gift**: copy the bank account and toggle its QR code
//!
//! ## Quick Start
//!
//! ```ignore
//! use eventpage_core::countdown::{ticker, CountdownEngine, CountdownFrame, SystemClock};
//! use eventpage_core::EventConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = EventConfig::load_or_default(None);
//!     let frames: Vec<CountdownFrame> = Vec::new();
//!
//!     if let Some(engine) = CountdownEngine::init(&config, Some(frames), SystemClock) {
//!         let finished = ticker::run(engine).await;
//!         println!("{}", finished.surface().last().unwrap());
//!     }
//! }
//! ```

pub mod config;
pub mod countdown;
pub mod error;
pub mod gift;
pub mod lightbox;
pub mod music;
pub mod reveal;

// Re-exports
pub use config::{default_config_path, BankConfig, EventConfig};
pub use countdown::{
    Clock, CountdownEngine, CountdownFrame, DisplaySurface, ManualClock, Phase, RemainingDuration,
    SystemClock, TargetMoment,
};
pub use error::{PageError, PageResult};
pub use gift::{ClipboardWriter, CopyOutcome, QrToggle};
pub use lightbox::Lightbox;
pub use music::{MediaPlayer, MusicAutoplay, PlaybackState};
pub use reveal::RevealTracker;
