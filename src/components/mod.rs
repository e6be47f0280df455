//! UI components for the event page.

mod countdown;
mod gallery;
mod gift_panel;
mod lightbox;
pub mod music;

pub use countdown::Countdown;
pub use gallery::Gallery;
pub use gift_panel::GiftPanel;
pub use lightbox::LightboxOverlay;
pub use music::BackgroundMusic;
