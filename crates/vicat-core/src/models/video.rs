//! Video aggregate: the consistency boundary for a catalog entry and its
//! media slots.
//!
//! All mutation goes through the aggregate's own methods, each of which
//! refreshes `updated_at`. The aggregate performs no I/O; persistence is the
//! caller's responsibility through a gateway.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CastMemberId, CategoryId, GenreId, MediaId, VideoId};
use super::media::{
    ImageMedia, MediaStatus, MediaTransitionError, TransitionOutcome, VideoMedia, VideoMediaType,
};
use super::rating::Rating;
use super::Aggregate;
use crate::validation::{validate_max_length, validate_required, Notification};

const TITLE_MAX_LENGTH: usize = 255;
const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Aggregate-level outcome of a media status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaUpdate {
    /// The slot was moved to a new status; the aggregate changed.
    Applied,
    /// The slot already carried the target status; nothing changed.
    AlreadyApplied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: Rating,
    pub opened: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
    pub trailer: Option<VideoMedia>,
    pub video: Option<VideoMedia>,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
}

impl Video {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::new(),
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            rating,
            opened,
            published,
            created_at: now,
            updated_at: now,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            trailer: None,
            video: None,
            categories,
            genres,
            cast_members,
        }
    }

    /// Replace the descriptive fields and relations. Media slots are not
    /// touched by an update.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.launched_at = launched_at;
        self.duration = duration;
        self.rating = rating;
        self.opened = opened;
        self.published = published;
        self.categories = categories;
        self.genres = genres;
        self.cast_members = cast_members;
        self.touch();
    }

    pub fn update_banner(&mut self, banner: ImageMedia) {
        self.banner = Some(banner);
        self.touch();
    }

    pub fn update_thumbnail(&mut self, thumbnail: ImageMedia) {
        self.thumbnail = Some(thumbnail);
        self.touch();
    }

    pub fn update_thumbnail_half(&mut self, thumbnail_half: ImageMedia) {
        self.thumbnail_half = Some(thumbnail_half);
        self.touch();
    }

    pub fn update_trailer_media(&mut self, trailer: VideoMedia) {
        self.trailer = Some(trailer);
        self.touch();
    }

    pub fn update_video_media(&mut self, video: VideoMedia) {
        self.video = Some(video);
        self.touch();
    }

    /// The media value currently occupying `media_type`, if any.
    pub fn media(&self, media_type: VideoMediaType) -> Option<&VideoMedia> {
        match media_type {
            VideoMediaType::Trailer => self.trailer.as_ref(),
            VideoMediaType::Video => self.video.as_ref(),
        }
    }

    /// Which slot, if any, currently holds the media with `media_id`.
    ///
    /// A media id that matches neither slot identifies a stale signal: the
    /// slot has been replaced since the signal was produced.
    pub fn media_type_of(&self, media_id: MediaId) -> Option<VideoMediaType> {
        if self.trailer.as_ref().map(|m| m.id) == Some(media_id) {
            Some(VideoMediaType::Trailer)
        } else if self.video.as_ref().map(|m| m.id) == Some(media_id) {
            Some(VideoMediaType::Video)
        } else {
            None
        }
    }

    /// Move the named slot to processing.
    pub fn processing(
        &mut self,
        media_type: VideoMediaType,
    ) -> Result<MediaUpdate, MediaTransitionError> {
        self.apply_transition(media_type, MediaStatus::Processing, None)
    }

    /// Move the named slot to completed, recording the encoded location.
    pub fn completed(
        &mut self,
        media_type: VideoMediaType,
        encoded_location: &str,
    ) -> Result<MediaUpdate, MediaTransitionError> {
        self.apply_transition(media_type, MediaStatus::Completed, Some(encoded_location))
    }

    /// Record an encoder failure on the named slot. There is no retry path;
    /// the operator re-triggers encoding out of band.
    pub fn failed(
        &mut self,
        media_type: VideoMediaType,
    ) -> Result<MediaUpdate, MediaTransitionError> {
        self.apply_transition(media_type, MediaStatus::Error, None)
    }

    fn apply_transition(
        &mut self,
        media_type: VideoMediaType,
        target: MediaStatus,
        encoded_location: Option<&str>,
    ) -> Result<MediaUpdate, MediaTransitionError> {
        let media = self
            .media(media_type)
            .ok_or(MediaTransitionError::SlotEmpty(media_type))?;

        match media.transition(target, encoded_location)? {
            TransitionOutcome::Changed(updated) => {
                match media_type {
                    VideoMediaType::Trailer => self.trailer = Some(updated),
                    VideoMediaType::Video => self.video = Some(updated),
                }
                self.touch();
                Ok(MediaUpdate::Applied)
            }
            TransitionOutcome::Unchanged => Ok(MediaUpdate::AlreadyApplied),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Aggregate for Video {
    type Id = VideoId;

    fn id(&self) -> &VideoId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn validate(&self, notification: &mut Notification) {
        if validate_required("title", &self.title, notification) {
            validate_max_length("title", &self.title, TITLE_MAX_LENGTH, notification);
        }
        validate_max_length(
            "description",
            &self.description,
            DESCRIPTION_MAX_LENGTH,
            notification,
        );
    }
}
