//! Error types for the userboard client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed or the body could not be decoded
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    /// Release builds need to be told where the API lives
    #[error("API_BASE_URL must be set in production builds")]
    MissingBaseUrl,
}

pub type Result<T> = std::result::Result<T, ClientError>;
