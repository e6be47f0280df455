//! Host page configuration.
//!
//! The page supplies a small JSON object describing the event:
//!
//! ```json
//! {
//!   "title": "Rina & Dimas",
//!   "dateISO": "2026-01-11T09:00:00",
//!   "bank": { "account": "1234567890" },
//!   "gallery": ["assets/gallery/01.jpg", "assets/gallery/02.jpg"],
//!   "music": "assets/music.mp3"
//! }
//! ```
//!
//! Every field is optional. Missing fields take the built-in defaults, and a
//! missing or unreadable file yields the default config rather than an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Date string the page falls back to when none is configured.
pub const DEFAULT_DATE_ISO: &str = "2026-01-11T09:00:00";

/// Heading used when the page does not name the event.
pub const DEFAULT_TITLE: &str = "The Wedding";

/// Placeholder account shown when the page has none.
pub const DEFAULT_ACCOUNT: &str = "1234567890";

/// File name looked up inside the config directory.
const CONFIG_FILE_NAME: &str = "event.json";

/// Event configuration supplied by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Heading shown at the top of the page
    pub title: String,
    /// Target date/time of the event as an ISO-8601 string
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    /// Payment details for the gift section
    pub bank: BankConfig,
    /// Gallery image sources, in display order
    pub gallery: Vec<String>,
    /// Background music source, if any
    pub music: Option<String>,
}

/// Bank transfer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub account: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date_iso: DEFAULT_DATE_ISO.to_string(),
            bank: BankConfig::default(),
            gallery: Vec::new(),
            music: None,
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
        }
    }
}

impl EventConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Io` if the file cannot be read and
    /// `PageError::Json` if it is not a valid config object.
    pub fn load(path: &Path) -> PageResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Load the config at `path`, or at the default location when `None`.
    ///
    /// Never fails: problems are logged and the defaults are used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("No event config found, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded event config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load event config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Replace the target date, keeping everything else.
    pub fn with_date_iso(mut self, date_iso: impl Into<String>) -> Self {
        self.date_iso = date_iso.into();
        self
    }

    /// Replace the bank account, keeping everything else.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.bank.account = account.into();
        self
    }
}

/// Default config location (`<config dir>/eventpage/event.json`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("eventpage").join(CONFIG_FILE_NAME))
}

impl std::str::FromStr for EventConfig {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
