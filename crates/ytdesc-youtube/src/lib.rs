//! YouTube Data API client.
//!
//! Fetches video descriptions through the `videos.list` endpoint. The HTTP
//! client sits behind [`VideoMetadataSource`] so callers can swap in fakes.

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::{YoutubeClient, YoutubeClientConfig, DEFAULT_BASE_URL};
pub use error::{PlatformError, PlatformResult};
pub use source::{fetch_description, VideoMetadataSource, NO_DESCRIPTION};
pub use types::VideoSnippet;
