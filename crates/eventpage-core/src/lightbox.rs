//! Full-screen image viewer for the gallery.

/// Key that dismisses the lightbox.
pub const ESCAPE_KEY: &str = "Escape";

/// Lightbox open/close state.
///
/// While open, page scrolling is locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    src: Option<String>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `src`. Empty sources are ignored.
    ///
    /// Returns whether the lightbox opened.
    pub fn open(&mut self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        self.src = Some(src.to_string());
        true
    }

    /// Hide the lightbox and clear the image so it stops loading.
    pub fn close(&mut self) {
        self.src = None;
    }

    /// Click on the overlay. Only closes when the backdrop itself was hit,
    /// not the image inside it.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }

    /// Keyboard input. Escape closes, but only while open.
    ///
    /// Returns whether the key was handled.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.src.is_some()
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Whether the page behind should stop scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Value for the overlay's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut lb = Lightbox::new();
        assert_eq!(lb.aria_hidden(), "true");

        assert!(lb.open("img/01.jpg"));
        assert_eq!(lb.src(), Some("img/01.jpg"));
        assert!(lb.scroll_locked());
        assert_eq!(lb.aria_hidden(), "false");

        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.src(), None);
        assert!(!lb.scroll_locked());
    }

    #[test]
    fn test_empty_src_ignored() {
        let mut lb = Lightbox::new();
        assert!(!lb.open(""));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_backdrop_click() {
        let mut lb = Lightbox::new();
        lb.open("a.jpg");

        lb.on_backdrop_click(false);
        assert!(lb.is_open());

        lb.on_backdrop_click(true);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_escape_only_when_open() {
        let mut lb = Lightbox::new();
        assert!(!lb.on_key("Escape"));

        lb.open("a.jpg");
        assert!(!lb.on_key("Enter"));
        assert!(lb.on_key("Escape"));
        assert!(!lb.is_open());
    }
}
