//! One-shot scroll reveal for gallery elements.
//!
//! An element is revealed the first time it becomes visible enough, then it
//! stops being observed.

use std::collections::HashSet;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.18;

/// Tracks which elements are still waiting to be revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    observed: HashSet<String>,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing an element. Already-revealed elements are ignored.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.revealed.contains(&id) {
            self.observed.insert(id);
        }
    }

    /// Feed a visibility signal.
    ///
    /// Returns `true` exactly once per element: the first time it intersects
    /// with at least [`REVEAL_THRESHOLD`] of its area visible.
    pub fn on_visibility(&mut self, id: &str, ratio: f64, intersecting: bool) -> bool {
        if !intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        if !self.observed.remove(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        tracing::trace!("Revealed {}", id);
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Number of elements still being observed.
    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
