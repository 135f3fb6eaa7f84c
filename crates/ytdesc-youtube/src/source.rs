//! Description fetching on top of a pluggable metadata source.

use async_trait::async_trait;
use ytdesc_models::VideoId;

use crate::error::PlatformResult;
use crate::types::VideoSnippet;

/// Returned when the platform has no description for a video.
pub const NO_DESCRIPTION: &str = "No description found.";

/// Read-only access to video metadata.
#[async_trait]
pub trait VideoMetadataSource: Send + Sync {
    /// Fetch the snippet for `video_id`, or `None` if the platform returned
    /// no matching item (missing, private or deleted video).
    async fn fetch_snippet(&self, video_id: &VideoId) -> PlatformResult<Option<VideoSnippet>>;
}

/// Fetch the description of a video.
///
/// Falls back to [`NO_DESCRIPTION`] when the video is not found or its
/// snippet has no description. The description is otherwise returned as-is.
pub async fn fetch_description(
    source: &dyn VideoMetadataSource,
    video_id: &VideoId,
) -> PlatformResult<String> {
    let description = source
        .fetch_snippet(video_id)
        .await?
        .and_then(|snippet| snippet.description)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Ok(description)
}
