//! Background music.
//!
//! Playback goes through the webview's `<audio id="bg-music">` element, so it
//! is subject to the webview's autoplay policy. Attempts are made on mount and
//! on the first click/touch anywhere on the page; if both are refused a
//! fallback button lets the user start the music explicitly.

use dioxus::prelude::*;
use eventpage_core::{MediaPlayer, MusicAutoplay, PageError, PageResult};

use crate::context::use_music_autoplay;

const AUDIO_ELEMENT_ID: &str = "bg-music";

/// The page's audio element, driven through script evaluation.
struct WebviewAudio;

impl MediaPlayer for WebviewAudio {
    fn set_volume(&mut self, volume: f64) {
        let _ = document::eval(&format!(
            "const audio = document.getElementById('{}'); if (audio) {{ audio.volume = {}; }}",
            AUDIO_ELEMENT_ID, volume
        ));
    }

    async fn play(&mut self) -> PageResult<()> {
        let script = format!(
            r#"
            const audio = document.getElementById('{}');
            if (!audio) {{ return "missing"; }}
            try {{
                await audio.play();
                return "playing";
            }} catch (e) {{
                return String(e);
            }}
            "#,
            AUDIO_ELEMENT_ID
        );

        let outcome = document::eval(&script)
            .await
            .map_err(|e| PageError::Playback(e.to_string()))?;

        match outcome.as_str() {
            Some("playing") => Ok(()),
            Some(reason) => Err(PageError::Playback(reason.to_string())),
            None => Err(PageError::Playback(outcome.to_string())),
        }
    }
}

/// Retry playback on the first page interaction, if it is still needed.
pub fn on_page_interaction(mut autoplay: Signal<MusicAutoplay>) {
    if !autoplay.write().on_interaction() {
        return;
    }

    spawn(async move {
        let result = WebviewAudio.play().await;
        autoplay.write().record_attempt(result);
    });
}

#[component]
pub fn BackgroundMusic(
    /// Audio source
    src: String,
) -> Element {
    let mut autoplay = use_music_autoplay();
    let mut notice: Signal<Option<&'static str>> = use_signal(|| None);

    // Attempt autoplay once the element is mounted
    use_effect(move || {
        spawn(async move {
            let mut player = WebviewAudio;
            autoplay.peek().prepare(&mut player);
            let result = player.play().await;
            let state = autoplay.write().record_attempt(result);
            tracing::info!("Background music autoplay: {:?}", state);
        });
    });

    let press_fallback = move |evt: MouseEvent| {
        // The page-level interaction handler must not race this attempt
        evt.stop_propagation();
        spawn(async move {
            let result = WebviewAudio.play().await;
            let message = autoplay.write().on_fallback_result(result);
            notice.set(message);
            if message.is_some() {
                tokio::time::sleep(std::time::Duration::from_secs(4)).await;
                notice.set(None);
            }
        });
    };

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            src: "{src}",
            preload: "auto",
            "loop": "true",
        }

        if autoplay.read().fallback_visible() {
            button {
                id: "play-fallback",
                class: "play-fallback",
                onclick: press_fallback,
                "\u{25B6} Putar Musik"
            }
        }

        if let Some(message) = notice() {
            div { class: "toast", role: "alert", "{message}" }
        }
    }
}
