//! Gift section: bank account with copy button and a QR toggle.

use std::time::Duration;

use dioxus::prelude::*;
use eventpage_core::gift::{self, ClipboardWriter, QrToggle};
use eventpage_core::{PageError, PageResult};

use crate::context::use_event_config;

/// How long the copy feedback stays visible.
const FEEDBACK_DURATION: Duration = Duration::from_secs(3);

/// Rendering quality of the QR code; CSS controls the display size.
const QR_SIZE: u32 = 220;

/// System clipboard via arboard.
struct DesktopClipboard(arboard::Clipboard);

impl DesktopClipboard {
    fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self(clipboard)),
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
                None
            }
        }
    }
}

impl ClipboardWriter for DesktopClipboard {
    fn write_text(&mut self, text: &str) -> PageResult<()> {
        self.0
            .set_text(text)
            .map_err(|e| PageError::Clipboard(e.to_string()))
    }
}

#[component]
pub fn GiftPanel(
    /// Account number as shown on the page
    account: String,
) -> Element {
    let config = use_event_config();
    let mut qr = use_signal(QrToggle::new);
    let mut feedback: Signal<Option<String>> = use_signal(|| None);

    let qr_account = account.clone();
    let qr_svg = use_memo(move || match gift::account_qr_svg(&qr_account, QR_SIZE) {
        Ok(svg) => svg,
        Err(e) => {
            tracing::error!("Failed to generate QR code: {}", e);
            String::new()
        }
    });

    let displayed = account.clone();
    let copy_account = move |_| {
        let account = gift::resolve_account(Some(displayed.as_str()), &config.peek().bank.account);
        let mut clipboard = DesktopClipboard::open();
        let outcome = gift::copy_account(clipboard.as_mut(), account);

        feedback.set(Some(outcome.message()));
        spawn(async move {
            tokio::time::sleep(FEEDBACK_DURATION).await;
            feedback.set(None);
        });
    };

    let toggle = *qr.read();
    let qr_label = toggle.label();

    rsx! {
        div { class: "gift-card",
            p { class: "gift-label", "Nomor Rekening" }
            p { id: "bankAccount", class: "gift-account", "{account}" }

            div { class: "gift-actions",
                button {
                    id: "copyBtn",
                    class: "btn",
                    onclick: copy_account,
                    "Salin"
                }
                button {
                    id: "showQR",
                    class: "btn btn-outline",
                    onclick: move |_| {
                        qr.write().toggle();
                    },
                    "{qr_label}"
                }
            }

            if let Some(message) = feedback() {
                div { class: "toast", role: "status", "{message}" }
            }

            div {
                id: "bankQR",
                class: if toggle.is_hidden() { "gift-qr hidden" } else { "gift-qr" },
                if qr_svg().is_empty() {
                    div { class: "qr-error", "QR tidak tersedia" }
                } else {
                    div { class: "qr-code", dangerous_inner_html: "{qr_svg()}" }
                }
            }
        }
    }
}
