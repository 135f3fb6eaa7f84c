//! YouTube client error types.

use thiserror::Error;

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Failure talking to the video-metadata platform.
///
/// "Video not found" is not an error; sources report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("YouTube API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed YouTube API response: {0}")]
    MalformedResponse(String),

    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl PlatformError {
    /// HTTP status reported by the platform, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PlatformError::Api { status, .. } => Some(*status),
            PlatformError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
