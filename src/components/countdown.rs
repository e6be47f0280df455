//! Countdown display.
//!
//! The engine paints into a signal; the component renders whatever frame the
//! signal holds. The ticker runs inside a component future, so it stops when
//! the component unmounts.

use dioxus::prelude::*;
use eventpage_core::countdown::{ticker, CountdownEngine, CountdownFrame, DisplaySurface, SystemClock};

use crate::context::use_event_config;

/// Display surface backed by a component signal.
#[derive(Clone, Copy)]
struct SignalSurface {
    frame: Signal<Option<CountdownFrame>>,
}

impl DisplaySurface for SignalSurface {
    fn is_attached(&self) -> bool {
        // The signal is dropped together with its scope
        self.frame.try_peek().is_ok()
    }

    fn replace(&mut self, frame: &CountdownFrame) {
        self.frame.set(Some(frame.clone()));
    }
}

/// Live countdown to the configured event date.
#[component]
pub fn Countdown() -> Element {
    let config = use_event_config();
    let frame: Signal<Option<CountdownFrame>> = use_signal(|| None);

    use_future(move || async move {
        let surface = SignalSurface { frame };
        let engine = CountdownEngine::init(&config.peek(), Some(surface), SystemClock);
        if let Some(engine) = engine {
            let engine = ticker::run(engine).await;
            tracing::info!("Countdown reached {}", engine.target().instant());
        }
    });

    rsx! {
        div { id: "countdown-display", class: "countdown",
            if let Some(frame) = frame() {
                for (index, item) in frame.items.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: match item.animation {
                            Some(animation) => format!("count-item {}", animation.class),
                            None => "count-item".to_string(),
                        },
                        style: match item.animation {
                            Some(animation) => format!("animation-delay: {}", animation.delay_css()),
                            None => String::new(),
                        },
                        span { "{item.value}" }
                        p { "{item.label}" }
                    }
                }
            }
        }
    }
}
