//! Countdown to the event.
//!
//! ## Lifecycle
//!
//! ```text
//! init ──► RUNNING ──(remaining <= 0)──► FINISHED
//!            │  ▲                           │
//!            └──┘ tick every 1s             └─ ticker dropped, display frozen at 00
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use eventpage_core::countdown::{ticker, CountdownEngine, SystemClock};
//!
//! let config = EventConfig::load_or_default(None);
//! if let Some(engine) = CountdownEngine::init(&config, Some(surface), SystemClock) {
//!     ticker::run(engine).await;
//! }
//! ```

pub mod clock;
pub mod engine;
pub mod frame;
pub mod remaining;
pub mod target;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{CountdownEngine, DisplaySurface, Phase};
pub use frame::{CountItem, CountdownFrame, EntranceAnimation, ANIMATION_STEP, LABELS, POP_IN_CLASS};
pub use remaining::RemainingDuration;
pub use target::{TargetMoment, TargetSource};
pub use ticker::TICK_PERIOD;
