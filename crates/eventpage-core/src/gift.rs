//! Gift section: copy the bank account and toggle its QR code.

use qrcode::render::{svg, unicode};
use qrcode::QrCode;

use crate::error::{PageError, PageResult};

pub const MISSING_ACCOUNT_MESSAGE: &str = "Nomor rekening belum tersedia.";
pub const COPY_FAILED_MESSAGE: &str = "Gagal menyalin. Silakan salin secara manual.";
pub const MANUAL_COPY_PROMPT: &str = "Salin nomor rekening berikut:";

pub const SHOW_QR_LABEL: &str = "Tampilkan QR";
pub const HIDE_QR_LABEL: &str = "Sembunyikan QR";

/// Write access to the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> PageResult<()>;
}

/// Pick the account to copy.
///
/// When the page shows an account element its trimmed text wins, even if
/// blank; otherwise the configured account is used. Blank means none.
pub fn resolve_account(displayed: Option<&str>, configured: &str) -> Option<String> {
    let account = match displayed {
        Some(text) => text.trim(),
        None => configured.trim(),
    };
    if account.is_empty() {
        None
    } else {
        Some(account.to_string())
    }
}

/// Result of pressing the copy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(String),
    /// No clipboard available; the user has to copy the value by hand
    Manual(String),
    /// There is no account to copy
    Missing,
    Failed,
}

impl CopyOutcome {
    /// Text to show the user.
    pub fn message(&self) -> String {
        match self {
            CopyOutcome::Copied(account) => format!("Nomor rekening disalin: {}", account),
            CopyOutcome::Manual(account) => format!("{} {}", MANUAL_COPY_PROMPT, account),
            CopyOutcome::Missing => MISSING_ACCOUNT_MESSAGE.to_string(),
            CopyOutcome::Failed => COPY_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Copy `account` using `clipboard` when one is available.
pub fn copy_account<W: ClipboardWriter>(clipboard: Option<&mut W>, account: Option<String>) -> CopyOutcome {
    let Some(account) = account else {
        return CopyOutcome::Missing;
    };

    let Some(clipboard) = clipboard else {
        return CopyOutcome::Manual(account);
    };

    match clipboard.write_text(&account) {
        Ok(()) => CopyOutcome::Copied(account),
        Err(e) => {
            tracing::warn!("Copy account failed: {}", e);
            CopyOutcome::Failed
        }
    }
}

/// Show/hide state of the payment QR image. Hidden by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrToggle {
    hidden: bool,
}

impl Default for QrToggle {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl QrToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip visibility; returns whether the QR is now hidden.
    pub fn toggle(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Button label for the current state.
    pub fn label(&self) -> &'static str {
        if self.hidden {
            SHOW_QR_LABEL
        } else {
            HIDE_QR_LABEL
        }
    }
}

/// Render `account` as an SVG QR code.
///
/// Width/height attributes are stripped so CSS controls the display size;
/// the viewBox keeps it scaling cleanly.
pub fn account_qr_svg(account: &str, size: u32) -> PageResult<String> {
    let code = qr_for(account)?;
    let svg_string = code
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#3b2f2f"))
        .light_color(svg::Color("#fffaf3"))
        .build();

    Ok(strip_dimensions(&svg_string))
}

/// Drop the first `width`/`height` attributes, i.e. those of the `<svg>` tag.
fn strip_dimensions(svg: &str) -> String {
    let mut out = svg.to_string();
    for attr in ["width", "height"] {
        let needle = format!(" {}=\"", attr);
        if let Some(start) = out.find(&needle) {
            if let Some(len) = out[start + needle.len()..].find('"') {
                out.replace_range(start..start + needle.len() + len + 1, "");
            }
        }
    }
    out
}

/// Render `account` as a QR code made of Unicode half blocks, for terminals.
pub fn account_qr_text(account: &str) -> PageResult<String> {
    let code = qr_for(account)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

fn qr_for(account: &str) -> PageResult<QrCode> {
    let account = account.trim();
    if account.is_empty() {
        return Err(PageError::Config(MISSING_ACCOUNT_MESSAGE.to_string()));
    }
    Ok(QrCode::new(account.as_bytes())?)
}
