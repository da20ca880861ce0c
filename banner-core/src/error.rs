//! Error types for the banner-core library

use thiserror::Error;

/// Main error type for banner operations
#[derive(Error, Debug)]
pub enum BannerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for banner operations
pub type Result<T> = std::result::Result<T, BannerError>;

impl PartialEq for BannerError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            BannerError::Configuration(msg) => {
                matches!(other, BannerError::Configuration(o) if msg == o)
            }
            BannerError::Io(err) => {
                matches!(other, BannerError::Io(e) if err.to_string() == e.to_string())
            }
            BannerError::Json(err) => {
                matches!(other, BannerError::Json(e) if err.to_string() == e.to_string())
            }
        }
    }
}
