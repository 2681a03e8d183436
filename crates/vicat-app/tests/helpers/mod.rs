//! Shared fixtures for integration tests.
//!
//! Each test binary compiles its own copy; not every binary uses every
//! fixture.
#![allow(dead_code)]

use std::collections::HashSet;

use vicat_core::models::{
    CastMemberId, CategoryId, GenreId, Rating, Resource, Video, VideoMedia,
};
use vicat_core::Config;

pub fn sample_video(title: &str) -> Video {
    Video::new(
        title,
        "A documentary about distributed failure",
        2024,
        95.0,
        Rating::Age12,
        false,
        true,
        HashSet::from([CategoryId::new()]),
        HashSet::from([GenreId::new()]),
        HashSet::from([CastMemberId::new()]),
    )
}

/// A video whose trailer slot holds a pending media value.
pub fn video_with_pending_trailer(title: &str) -> Video {
    let mut video = sample_video(title);
    video.update_trailer_media(VideoMedia::new("trailer.mp4", "sum-1", "raw/trailer.mp4"));
    video
}

pub fn sample_resource(name: &str, content_type: &str) -> Resource {
    Resource::new(name, content_type, "sum-1", name.as_bytes().to_vec())
}

pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        storage_path: "./data/test-media".to_string(),
        storage_base_url: "http://localhost:3000/media".to_string(),
        max_video_size_bytes: 1024 * 1024,
        max_image_size_bytes: 1024 * 1024,
        video_allowed_content_types: vec!["video/mp4".to_string()],
        image_allowed_content_types: vec!["image/png".to_string()],
    }
}
