//! Photo gallery with one-shot scroll reveal.
//!
//! Each photo starts hidden and gets the `show` class the first time enough of
//! it scrolls into view. Clicking a photo opens it in the lightbox.

use dioxus::prelude::*;
use eventpage_core::RevealTracker;

use crate::context::use_lightbox;

fn photo_id(index: usize) -> String {
    format!("gallery-{}", index)
}

#[component]
pub fn Gallery(
    /// Image sources, in display order
    photos: Vec<String>,
) -> Element {
    let count = photos.len();
    let mut tracker = use_signal(move || {
        let mut tracker = RevealTracker::new();
        for index in 0..count {
            tracker.observe(photo_id(index));
        }
        tracker
    });
    let mut lightbox = use_lightbox();

    rsx! {
        div { class: "gallery",
            for (index, src) in photos.into_iter().enumerate() {
                {
                    let id = photo_id(index);
                    let element_id = id.clone();
                    let revealed = tracker.read().is_revealed(&id);
                    let open_src = src.clone();
                    let number = index + 1;

                    rsx! {
                        div {
                            key: "{element_id}",
                            id: "{element_id}",
                            class: if revealed { "gallery-item animate show" } else { "gallery-item animate" },
                            onvisible: move |evt| {
                                if tracker.peek().is_revealed(&id) {
                                    return;
                                }
                                let data = evt.data();
                                let ratio = data.get_intersection_ratio().unwrap_or(0.0);
                                let intersecting = data.is_intersecting().unwrap_or(false);
                                if tracker.write().on_visibility(&id, ratio, intersecting) {
                                    tracing::debug!("Gallery photo {} revealed", id);
                                }
                            },
                            img {
                                src: "{src}",
                                alt: "Foto {number}",
                                loading: "lazy",
                                onclick: move |_| {
                                    lightbox.write().open(&open_src);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
