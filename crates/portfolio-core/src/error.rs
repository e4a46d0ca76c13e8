//! Error types for the portfolio core.

use thiserror::Error;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Media source has an extension the modal cannot display
    #[error("Unsupported media source: {0}")]
    UnsupportedMedia(String),

    /// Media file exists but contains no data
    #[error("Media file is empty: {0}")]
    EmptyMedia(String),

    /// Image bytes could not be decoded
    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Content manifest could not be parsed
    #[error("Content manifest error: {0}")]
    ContentParse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::EmptyMedia("renders/tp2.mp4".to_string());
        assert_eq!(format!("{}", err), "Media file is empty: renders/tp2.mp4");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
