//! Background music with graceful autoplay fallback.
//!
//! Browsers and webviews often refuse to start audio before the user has
//! interacted with the page. Playback is attempted on load and again on the
//! first click/touch; if it is refused a fallback button is shown so the
//! user can start it explicitly.

use std::future::Future;

use crate::error::PageResult;

/// Playback volume applied before the first attempt.
pub const VOLUME: f64 = 0.6;

/// Shown when even the explicit fallback button cannot start playback.
pub const BLOCKED_MESSAGE: &str = "Browser memblokir pemutaran otomatis. Mohon izinkan suara.";

/// Something that can play the background track.
pub trait MediaPlayer {
    fn set_volume(&mut self, volume: f64);

    /// Start playback. An error means the platform refused.
    fn play(&mut self) -> impl Future<Output = PageResult<()>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing attempted yet
    #[default]
    Idle,
    Playing,
    /// Last attempt was refused; the fallback button is visible
    Blocked,
}

/// Autoplay state for one audio element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MusicAutoplay {
    state: PlaybackState,
    interaction_seen: bool,
}

impl MusicAutoplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the volume; call once when the audio element is available.
    pub fn prepare<P: MediaPlayer>(&self, player: &mut P) {
        player.set_volume(VOLUME);
    }

    /// Attempt playback and record the outcome.
    pub async fn try_play<P: MediaPlayer>(&mut self, player: &mut P) -> PlaybackState {
        let result = player.play().await;
        self.record_attempt(result)
    }

    /// Record the outcome of a playback attempt made elsewhere.
    pub fn record_attempt(&mut self, result: PageResult<()>) -> PlaybackState {
        self.state = match result {
            Ok(()) => PlaybackState::Playing,
            Err(e) => {
                tracing::debug!("Autoplay refused: {}", e);
                PlaybackState::Blocked
            }
        };
        self.state
    }

    /// First user interaction (click or touch).
    ///
    /// Returns whether playback should be attempted: only for the first
    /// interaction, and only if nothing is playing yet.
    pub fn on_interaction(&mut self) -> bool {
        if self.interaction_seen {
            return false;
        }
        self.interaction_seen = true;
        self.state != PlaybackState::Playing
    }

    /// Outcome of the fallback button.
    ///
    /// Returns the message to show the user when playback is still refused.
    pub fn on_fallback_result(&mut self, result: PageResult<()>) -> Option<&'static str> {
        match self.record_attempt(result) {
            PlaybackState::Playing => None,
            _ => Some(BLOCKED_MESSAGE),
        }
    }

    /// Press the fallback button against a player.
    pub async fn press_fallback<P: MediaPlayer>(&mut self, player: &mut P) -> Option<&'static str> {
        let result = player.play().await;
        self.on_fallback_result(result)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn fallback_visible(&self) -> bool {
        self.state == PlaybackState::Blocked
    }
}
