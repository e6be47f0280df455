//! Shared page state for the event page.
//!
//! The event config, the lightbox and the autoplay state live in context so
//! that the page root (scroll lock, Escape key, first interaction) and the
//! sections that own them see the same signals.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_page_context(get_event_config());
//!
//! // In child components
//! let config = use_event_config();
//! let mut lightbox = use_lightbox();
//! ```

use dioxus::prelude::*;
use eventpage_core::{EventConfig, Lightbox, MusicAutoplay};

/// Get the event config resolved at startup.
pub fn get_event_config() -> EventConfig {
    crate::get_event_config()
}

/// Provide the page-wide signals. Call once, from the root component.
pub fn provide_page_context(config: EventConfig) {
    use_context_provider(|| Signal::new(config));
    use_context_provider(|| Signal::new(Lightbox::new()));
    use_context_provider(|| Signal::new(MusicAutoplay::new()));
}

/// Hook to access the event config from context.
pub fn use_event_config() -> Signal<EventConfig> {
    use_context::<Signal<EventConfig>>()
}

/// Hook to access the shared lightbox.
pub fn use_lightbox() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}

/// Hook to access the background music autoplay state.
pub fn use_music_autoplay() -> Signal<MusicAutoplay> {
    use_context::<Signal<MusicAutoplay>>()
}
