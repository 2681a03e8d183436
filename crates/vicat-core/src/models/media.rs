//! Media value objects and the processing-status state machine.
//!
//! A video aggregate owns up to three image slots (banner, thumbnail,
//! thumbnail half) and two video slots (trailer, full video). Image media
//! have no lifecycle; video media move through [`MediaStatus`] as the
//! external encoder reports progress.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::ids::MediaId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl MediaStatus {
    /// A terminal status accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MediaStatus::Completed | MediaStatus::Error)
    }

    /// Whether `target` is reachable from the current status.
    ///
    /// Reachability is transitive along pending -> processing -> completed,
    /// so a completion signal that overtakes the processing signal is still
    /// legal. Terminal statuses reach nothing.
    pub fn can_transition(&self, target: MediaStatus) -> bool {
        use MediaStatus::*;
        matches!(
            (self, target),
            (Pending, Processing)
                | (Pending, Completed)
                | (Pending, Error)
                | (Processing, Completed)
                | (Processing, Error)
        )
    }
}

impl Display for MediaStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MediaStatus::Pending => write!(f, "pending"),
            MediaStatus::Processing => write!(f, "processing"),
            MediaStatus::Completed => write!(f, "completed"),
            MediaStatus::Error => write!(f, "error"),
        }
    }
}

impl FromStr for MediaStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(MediaStatus::Pending),
            "processing" => Ok(MediaStatus::Processing),
            "completed" => Ok(MediaStatus::Completed),
            "error" => Ok(MediaStatus::Error),
            _ => Err(anyhow::anyhow!("Invalid media status: {}", s)),
        }
    }
}

/// Names the two processable media slots of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoMediaType {
    Trailer,
    Video,
}

impl Display for VideoMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VideoMediaType::Trailer => write!(f, "trailer"),
            VideoMediaType::Video => write!(f, "video"),
        }
    }
}

impl FromStr for VideoMediaType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trailer" => Ok(VideoMediaType::Trailer),
            "video" => Ok(VideoMediaType::Video),
            _ => Err(anyhow::anyhow!("Invalid video media type: {}", s)),
        }
    }
}

/// Names the image attachment slots of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMediaType {
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl Display for ImageMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ImageMediaType::Banner => write!(f, "banner"),
            ImageMediaType::Thumbnail => write!(f, "thumbnail"),
            ImageMediaType::ThumbnailHalf => write!(f, "thumbnail_half"),
        }
    }
}

impl FromStr for ImageMediaType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banner" => Ok(ImageMediaType::Banner),
            "thumbnail" => Ok(ImageMediaType::Thumbnail),
            "thumbnail_half" => Ok(ImageMediaType::ThumbnailHalf),
            _ => Err(anyhow::anyhow!("Invalid image media type: {}", s)),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MediaTransitionError {
    #[error("media status cannot move from {from} to {to}")]
    Illegal { from: MediaStatus, to: MediaStatus },

    #[error("completed media requires a non-empty encoded location")]
    MissingEncodedLocation,

    #[error("no {0} media attached to this video")]
    SlotEmpty(VideoMediaType),
}

/// Outcome of a status transition request on a [`VideoMedia`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The transition was applied and produced a new media value.
    Changed(VideoMedia),
    /// The media already carries the target status; re-delivery is a no-op.
    Unchanged,
}

/// A processable video asset. Immutable: every transition produces a new
/// instance, and `encoded_location` stays empty until the status reaches
/// completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMedia {
    pub id: MediaId,
    pub name: String,
    pub checksum: String,
    pub raw_location: String,
    pub encoded_location: Option<String>,
    pub status: MediaStatus,
}

impl VideoMedia {
    /// A freshly uploaded asset starts pending with no encoded location.
    pub fn new(
        name: impl Into<String>,
        checksum: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            id: MediaId::new(),
            name: name.into(),
            checksum: checksum.into(),
            raw_location: raw_location.into(),
            encoded_location: None,
            status: MediaStatus::Pending,
        }
    }

    /// Request a transition to `target`.
    ///
    /// A request whose target equals the current status is reported as
    /// [`TransitionOutcome::Unchanged`] rather than rejected, which keeps
    /// at-least-once delivery idempotent. An unreachable target is an
    /// error, and completion without an encoded location is a defect, not
    /// a valid state.
    pub fn transition(
        &self,
        target: MediaStatus,
        encoded_location: Option<&str>,
    ) -> Result<TransitionOutcome, MediaTransitionError> {
        if self.status == target {
            return Ok(TransitionOutcome::Unchanged);
        }
        if !self.status.can_transition(target) {
            return Err(MediaTransitionError::Illegal {
                from: self.status,
                to: target,
            });
        }

        let encoded_location = match target {
            MediaStatus::Completed => match encoded_location {
                Some(location) if !location.is_empty() => Some(location.to_string()),
                _ => return Err(MediaTransitionError::MissingEncodedLocation),
            },
            _ => self.encoded_location.clone(),
        };

        Ok(TransitionOutcome::Changed(VideoMedia {
            encoded_location,
            status: target,
            ..self.clone()
        }))
    }
}

/// A static image asset (banner, thumbnail) with no processing lifecycle.
///
/// Two images with the same checksum and location are the same asset,
/// regardless of the instance id they were stamped with.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ImageMedia {
    pub id: MediaId,
    pub name: String,
    pub checksum: String,
    pub location: String,
}

impl ImageMedia {
    pub fn new(
        name: impl Into<String>,
        checksum: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: MediaId::new(),
            name: name.into(),
            checksum: checksum.into(),
            location: location.into(),
        }
    }
}

impl PartialEq for ImageMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.location == other.location
    }
}

impl std::hash::Hash for ImageMedia {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.location.hash(state);
    }
}

/// A binary media payload moving through upload or download flows.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub name: String,
    pub content_type: String,
    pub checksum: String,
    pub content: Bytes,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        checksum: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            checksum: checksum.into(),
            content: content.into(),
        }
    }
}
