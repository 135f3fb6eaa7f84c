//! Application state.

use std::sync::Arc;

use ytdesc_youtube::{PlatformResult, VideoMetadataSource, YoutubeClient};

use crate::config::ApiConfig;
use crate::services::LinkExtractor;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub metadata: Arc<dyn VideoMetadataSource>,
    pub link_extractor: LinkExtractor,
}

impl AppState {
    /// Create application state backed by the YouTube Data API.
    pub fn new(config: ApiConfig) -> PlatformResult<Self> {
        let client = YoutubeClient::new(config.youtube.clone())?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create application state with a custom metadata source.
    pub fn with_source(config: ApiConfig, metadata: Arc<dyn VideoMetadataSource>) -> Self {
        let link_extractor = LinkExtractor::new(config.openai_api_key.clone());
        Self {
            config,
            metadata,
            link_extractor,
        }
    }
}
