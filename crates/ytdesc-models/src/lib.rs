//! Shared data models for the ytdesc service.
//!
//! This crate provides:
//! - YouTube URL parsing into validated video ids
//! - Link scanning over video descriptions

pub mod links;
pub mod video;

// Re-export common types
pub use links::{format_links_text, scan_links, LinkRecord};
pub use video::{extract_video_id, InvalidUrlError, VideoId, VIDEO_ID_LEN};
