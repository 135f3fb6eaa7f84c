//! YouTube Data API v3 HTTP client.

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::Client;
use tracing::{debug, warn};
use ytdesc_models::VideoId;

use crate::error::{PlatformError, PlatformResult};
use crate::source::VideoMetadataSource;
use crate::types::{ErrorEnvelope, VideoListResponse, VideoSnippet};

/// Public YouTube Data API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const REQUESTS_TOTAL: &str = "ytdesc_youtube_requests_total";
const REQUEST_DURATION_SECONDS: &str = "ytdesc_youtube_request_duration_seconds";

/// Configuration for the YouTube client.
#[derive(Clone)]
pub struct YoutubeClientConfig {
    /// Data API key
    pub api_key: String,
    /// Base URL of the Data API (override for proxies and tests)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl YoutubeClientConfig {
    /// Config for the public API with default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for YoutubeClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YoutubeClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the `videos.list` endpoint.
pub struct YoutubeClient {
    http: Client,
    config: YoutubeClientConfig,
}

impl YoutubeClient {
    /// Create a new YouTube client.
    pub fn new(config: YoutubeClientConfig) -> PlatformResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PlatformError::Network)?;

        Ok(Self { http, config })
    }

    /// List the snippet of a single video.
    async fn list_snippet(&self, video_id: &VideoId) -> PlatformResult<Option<VideoSnippet>> {
        let url = format!("{}/videos", self.config.base_url.trim_end_matches('/'));

        debug!(video_id = %video_id, "Requesting video snippet");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("id", video_id.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            // The request URL carries the API key
            .map_err(|e| PlatformError::Network(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PlatformError::Network(e.without_url()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            warn!(video_id = %video_id, status = %status, "YouTube API request failed");
            return Err(PlatformError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let list: VideoListResponse = serde_json::from_slice(&body)?;

        match list.items.into_iter().next() {
            None => Ok(None),
            Some(item) => item.snippet.map(Some).ok_or_else(|| {
                PlatformError::MalformedResponse("video item has no snippet".to_string())
            }),
        }
    }
}

#[async_trait]
impl VideoMetadataSource for YoutubeClient {
    async fn fetch_snippet(&self, video_id: &VideoId) -> PlatformResult<Option<VideoSnippet>> {
        let start = Instant::now();
        let result = self.list_snippet(video_id).await;

        let outcome = match &result {
            Ok(Some(_)) => "found",
            Ok(None) => "not_found",
            Err(_) => "error",
        };
        let labels = [("outcome", outcome.to_string())];
        counter!(REQUESTS_TOTAL, &labels).increment(1);
        histogram!(REQUEST_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

        result
    }
}
