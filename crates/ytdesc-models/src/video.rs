//! YouTube video identifiers and URL parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Accepted URL shapes, tried in order. Each pattern is anchored at the start
/// of the input only, so anything after the 11-character id is ignored.
///
/// The short-link form comes first so it is never shadowed by the generic
/// `youtube.com/...v=` form.
static URL_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    let id = format!("([a-zA-Z0-9_-]{{{VIDEO_ID_LEN}}})");
    [
        Regex::new(&format!(r"^(?:https?://)?(?:www\.)?youtu\.be/{id}")).unwrap(),
        Regex::new(&format!(r"^(?:https?://)?(?:www\.)?youtube\.com/watch\?v={id}")).unwrap(),
        Regex::new(&format!(r"^(?:https?://)?(?:www\.)?youtube\.com/.*v={id}")).unwrap(),
    ]
});

/// Length of a YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

/// The supplied URL matched none of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid YouTube URL: {url}")]
pub struct InvalidUrlError {
    /// The offending input, verbatim.
    pub url: String,
}

/// An 11-character YouTube video identifier.
///
/// Only produced by [`extract_video_id`]; it is never checked against the
/// platform until a fetch is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the video id from a YouTube URL.
///
/// Recognized shapes (scheme and `www.` optional in all of them):
/// - `youtu.be/VIDEO_ID`
/// - `youtube.com/watch?v=VIDEO_ID`
/// - `youtube.com/<anything>v=VIDEO_ID`
///
/// Matching is case-sensitive and the input is not trimmed.
pub fn extract_video_id(url: &str) -> Result<VideoId, InvalidUrlError> {
    URL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
        .ok_or_else(|| InvalidUrlError {
            url: url.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> String {
        extract_video_id(url).unwrap().into_inner()
    }

    #[test]
    fn test_short_url() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(id("http://www.youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(id("youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_short_url_ignores_trailing_content() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ?t=30&feature=share"), "dQw4w9WgXcQ");
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ/extra/segments"), "dQw4w9WgXcQ");
        // Only the first 11 characters are taken
        assert_eq!(id("https://youtu.be/abc123def456789"), "abc123def45");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(id("https://youtube.com/watch?v=dQw4w9WgXcQ&list=PL123"), "dQw4w9WgXcQ");
        assert_eq!(id("youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(id("www.youtube.com/watch?v=a-b_c-d_e-f#t=1"), "a-b_c-d_e-f");
    }

    #[test]
    fn test_generic_query_url() {
        assert_eq!(
            id("https://www.youtube.com/embed?feature=oembed&v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_generic_query_url_without_scheme() {
        assert_eq!(id("youtube.com/embed?feature=x&v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(id("youtube.com/watch?feature=share&v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(
            id("www.youtube.com/attribution_link?a=x&u=/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_generic_query_url_prefers_last_match() {
        assert_eq!(
            id("https://youtube.com/embed?v=AAAAAAAAAAA&v=BBBBBBBBBBB"),
            "BBBBBBBBBBB"
        );
        // The canonical watch form is tried first and wins
        assert_eq!(
            id("https://youtube.com/watch?v=AAAAAAAAAAA&v=BBBBBBBBBBB"),
            "AAAAAAAAAAA"
        );
    }

    #[test]
    fn test_invalid_urls() {
        for url in [
            "not a url",
            "not-a-url",
            "",
            "https://vimeo.com/12345",
            "https://youtu.be/short",
            "https://youtube.com/watch?v=short",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://YOUTUBE.COM/watch?v=dQw4w9WgXcQ",
            " https://youtu.be/dQw4w9WgXcQ",
            "https://example.com/?next=https://youtu.be/dQw4w9WgXcQ",
        ] {
            assert_eq!(
                extract_video_id(url),
                Err(InvalidUrlError { url: url.to_string() }),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_extracted_id_length() {
        let video_id = extract_video_id("youtu.be/dQw4w9WgXcQxyz").unwrap();
        assert_eq!(video_id.as_str().len(), VIDEO_ID_LEN);
    }

    #[test]
    fn test_error_display() {
        let err = extract_video_id("not-a-url").unwrap_err();
        assert_eq!(err.to_string(), "Invalid YouTube URL: not-a-url");
    }

    #[test]
    fn test_video_id_serializes_as_string() {
        let video_id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(serde_json::to_string(&video_id).unwrap(), "\"dQw4w9WgXcQ\"");
        assert_eq!(video_id.as_str().len(), VIDEO_ID_LEN);
    }
}
