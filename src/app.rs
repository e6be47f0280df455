use chrono::Local;
use dioxus::prelude::*;
use eventpage_core::TargetMoment;

use crate::components::{music, BackgroundMusic, Countdown, Gallery, GiftPanel, LightboxOverlay};
use crate::context::{get_event_config, provide_page_context, use_event_config, use_lightbox, use_music_autoplay};
use crate::theme::GLOBAL_STYLES;

/// Date line under the title, in the viewer's local time.
fn event_date_label(date_iso: &str) -> String {
    let target = TargetMoment::from_config(date_iso);
    target
        .instant()
        .with_timezone(&Local)
        .format("%d.%m.%Y \u{00B7} %H:%M")
        .to_string()
}

/// Root application component.
///
/// Provides global styles and page context, and wires the page-level
/// listeners: scroll lock and Escape for the lightbox, first interaction
/// for the background music.
#[component]
pub fn App() -> Element {
    provide_page_context(get_event_config());

    let config = use_event_config();
    let mut lightbox = use_lightbox();
    let autoplay = use_music_autoplay();

    let page_style = if lightbox.read().scroll_locked() {
        "overflow: hidden; height: 100vh;"
    } else {
        ""
    };

    let (title, date_label, gallery, account, music_src) = {
        let config = config.read();
        (
            config.title.clone(),
            event_date_label(&config.date_iso),
            config.gallery.clone(),
            config.bank.account.clone(),
            config.music.clone(),
        )
    };

    rsx! {
        style { {GLOBAL_STYLES} }

        div {
            class: "page",
            style: "{page_style}",
            tabindex: "0",
            onclick: move |_| music::on_page_interaction(autoplay),
            ontouchstart: move |_| music::on_page_interaction(autoplay),
            onkeydown: move |evt| {
                if lightbox.read().is_open() {
                    lightbox.write().on_key(&evt.key().to_string());
                }
            },

            header { class: "hero",
                p { class: "hero-kicker", "The Wedding of" }
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-date", "{date_label}" }
            }

            section { class: "section countdown-section",
                h2 { class: "section-header", "Menuju Hari Bahagia" }
                Countdown {}
            }

            if !gallery.is_empty() {
                section { class: "section gallery-section",
                    h2 { class: "section-header", "Galeri" }
                    Gallery { photos: gallery }
                }
            }

            section { class: "section gift-section",
                h2 { class: "section-header", "Tanda Kasih" }
                GiftPanel { account }
            }

            if let Some(src) = music_src {
                BackgroundMusic { src }
            }

            LightboxOverlay {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_date_label_shape() {
        let label = event_date_label("2026-01-11T09:00:00");
        assert_eq!(label, "11.01.2026 \u{00B7} 09:00");
    }

    #[test]
    fn test_event_date_label_invalid_uses_fallback() {
        assert_eq!(event_date_label("not-a-date"), event_date_label("2026-01-11T09:00:00"));
    }
}
