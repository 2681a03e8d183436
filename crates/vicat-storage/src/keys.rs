//! Shared key generation for storage backends.
//!
//! Key format: `videos/{video_id}/{media_type}/{name}`. All backends and
//! the media flows must use this layout for consistency; `media_prefix`
//! and `video_prefix` are the matching lookup prefixes.

use std::fmt::Display;

use vicat_core::models::VideoId;

/// Generate the storage key for one media object of a video.
pub fn media_key(video_id: VideoId, media_type: impl Display, name: &str) -> String {
    format!("videos/{}/{}/{}", video_id, media_type, name)
}

/// Prefix covering every object stored for one media slot of a video.
pub fn media_prefix(video_id: VideoId, media_type: impl Display) -> String {
    format!("videos/{}/{}/", video_id, media_type)
}

/// Prefix covering every object stored for a video.
pub fn video_prefix(video_id: VideoId) -> String {
    format!("videos/{}/", video_id)
}
