use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the CMS client
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Failed to fetch articles")]
    Status(StatusCode),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid CMS response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

pub type Result<T> = std::result::Result<T, CmsError>;
