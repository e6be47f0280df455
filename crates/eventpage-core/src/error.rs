//! Error types for the event page

use thiserror::Error;

/// Main error type for event page operations
#[derive(Error, Debug)]
pub enum PageError {
    /// Configuration could not be used as given
    #[error("Config error: {0}")]
    Config(String),

    /// Config file is not valid JSON for `EventConfig`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Clipboard was unavailable or rejected the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Media playback was refused (usually autoplay policy)
    #[error("Playback error: {0}")]
    Playback(String),

    /// QR code could not be generated for the given data
    #[error("QR error: {0}")]
    Qr(#[from] qrcode::types::QrError),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::Clipboard("no display".to_string());
        assert_eq!(format!("{}", err), "Clipboard error: no display");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let page_err: PageError = io_err.into();
        assert!(matches!(page_err, PageError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let page_err: PageError = json_err.into();
        assert!(matches!(page_err, PageError::Json(_)));
    }
}
