//! Visual theme for the event page.

mod styles;

pub use styles::GLOBAL_STYLES;
