//! Decoded encoder events.
//!
//! Transport and envelope decoding happen upstream; the catalog only
//! consumes this structured form, regardless of how the signal was
//! serialized or delivered. The sender offers no delivery deduplication,
//! so consumers must stay idempotent under re-delivery.

use serde::{Deserialize, Serialize};

use super::ids::{MediaId, VideoId};
use super::media::MediaStatus;

/// A completion-or-error signal from the external encoder about one media
/// resource of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum VideoEncoderEvent {
    #[serde(rename = "COMPLETED")]
    Completed {
        id: VideoId,
        resource_id: MediaId,
        encoded_path: String,
    },
    #[serde(rename = "ERROR")]
    Error { id: VideoId, resource_id: MediaId },
}

impl VideoEncoderEvent {
    pub fn video_id(&self) -> VideoId {
        match self {
            VideoEncoderEvent::Completed { id, .. } => *id,
            VideoEncoderEvent::Error { id, .. } => *id,
        }
    }

    pub fn resource_id(&self) -> MediaId {
        match self {
            VideoEncoderEvent::Completed { resource_id, .. } => *resource_id,
            VideoEncoderEvent::Error { resource_id, .. } => *resource_id,
        }
    }

    /// The media status this event asks the catalog to converge on.
    pub fn target_status(&self) -> MediaStatus {
        match self {
            VideoEncoderEvent::Completed { .. } => MediaStatus::Completed,
            VideoEncoderEvent::Error { .. } => MediaStatus::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_completed_event() {
        let video_id = VideoId::new();
        let resource_id = MediaId::new();
        let json = format!(
            r#"{{"status":"COMPLETED","id":"{}","resource_id":"{}","encoded_path":"enc/trailer.mp4"}}"#,
            video_id, resource_id
        );

        let event: VideoEncoderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event.video_id(), video_id);
        assert_eq!(event.resource_id(), resource_id);
        assert_eq!(event.target_status(), MediaStatus::Completed);
        match event {
            VideoEncoderEvent::Completed { encoded_path, .. } => {
                assert_eq!(encoded_path, "enc/trailer.mp4");
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_event() {
        let video_id = VideoId::new();
        let resource_id = MediaId::new();
        let json = format!(
            r#"{{"status":"ERROR","id":"{}","resource_id":"{}"}}"#,
            video_id, resource_id
        );

        let event: VideoEncoderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event.target_status(), MediaStatus::Error);
    }

    #[test]
    fn test_decode_rejects_unknown_status() {
        let json = r#"{"status":"QUEUED","id":"00000000-0000-0000-0000-000000000000","resource_id":"00000000-0000-0000-0000-000000000000"}"#;
        assert!(serde_json::from_str::<VideoEncoderEvent>(json).is_err());
    }
}
