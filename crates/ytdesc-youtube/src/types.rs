//! YouTube Data API v3 wire types.

use serde::{Deserialize, Serialize};

/// Snippet part of a video resource; only the fields we read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
}

/// Response of `GET /videos`.
#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
}

/// Google API error envelope: `{"error": {"code": 403, "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_without_description() {
        let snippet: VideoSnippet =
            serde_json::from_str(r#"{"title": "t", "channelTitle": "c"}"#).unwrap();
        assert_eq!(snippet.description, None);
        assert_eq!(snippet.channel_title.as_deref(), Some("c"));
    }

    #[test]
    fn test_list_without_items() {
        let list: VideoListResponse =
            serde_json::from_str(r#"{"kind": "youtube#videoListResponse", "pageInfo": {}}"#).unwrap();
        assert!(list.items.is_empty());
    }
}
