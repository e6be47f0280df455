//! Full-screen image overlay backed by the shared [`Lightbox`] state.
//!
//! [`Lightbox`]: eventpage_core::Lightbox

use dioxus::prelude::*;

use crate::context::use_lightbox;

/// Overlay shown while the lightbox holds an image.
///
/// Clicking the backdrop or the close button hides it; clicks on the image
/// itself are stopped before they reach the backdrop.
#[component]
pub fn LightboxOverlay() -> Element {
    let mut lightbox = use_lightbox();

    let (open, aria_hidden, src) = {
        let state = lightbox.read();
        (state.is_open(), state.aria_hidden(), state.src().map(str::to_string))
    };

    rsx! {
        div {
            id: "lightbox",
            class: if open { "lightbox open" } else { "lightbox" },
            "aria-hidden": aria_hidden,
            onclick: move |_| lightbox.write().on_backdrop_click(true),
            onkeydown: move |evt| {
                lightbox.write().on_key(&evt.key().to_string());
            },

            if let Some(src) = src {
                img {
                    id: "lb-img",
                    src: "{src}",
                    alt: "",
                    onclick: move |evt| evt.stop_propagation(),
                }
            }

            button {
                id: "lb-close",
                class: "close-btn",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().close();
                },
                "\u{00D7}"
            }
        }
    }
}
