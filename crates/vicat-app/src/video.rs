//! Video use cases.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gateways::{AggregateGateway, MediaResourceGateway};
use vicat_core::models::{
    Aggregate, CastMemberId, CategoryId, GenreId, ImageMedia, Pagination, Rating, SearchQuery,
    Video, VideoId, VideoMedia,
};
use vicat_core::AppError;

#[derive(Debug, Clone)]
pub struct CreateVideoInput {
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: Rating,
    pub opened: bool,
    pub published: bool,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
}

#[derive(Debug, Clone)]
pub struct UpdateVideoInput {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: Rating,
    pub opened: bool,
    pub published: bool,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoOutput {
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
    pub categories: Vec<CategoryId>,
    pub genres: Vec<GenreId>,
    pub cast_members: Vec<CastMemberId>,
}

impl From<Video> for VideoOutput {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            launched_at: video.launched_at,
            duration: video.duration,
            rating: video.rating,
            opened: video.opened,
            published: video.published,
            created_at: video.created_at,
            updated_at: video.updated_at,
            banner: video.banner,
            thumbnail: video.thumbnail,
            thumbnail_half: video.thumbnail_half,
            trailer: video.trailer,
            video: video.video,
            categories: video.categories.into_iter().collect(),
            genres: video.genres.into_iter().collect(),
            cast_members: video.cast_members.into_iter().collect(),
        }
    }
}

pub struct CreateVideo {
    gateway: Arc<dyn AggregateGateway<Video>>,
}

impl CreateVideo {
    pub fn new(gateway: Arc<dyn AggregateGateway<Video>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: CreateVideoInput) -> Result<VideoOutput, AppError> {
        let video = Video::new(
            input.title,
            input.description,
            input.launched_at,
            input.duration,
            input.rating,
            input.opened,
            input.published,
            input.categories,
            input.genres,
            input.cast_members,
        );

        let notification = video.validation();
        if notification.has_error() {
            return Err(AppError::Validation(notification));
        }

        let created = self.gateway.create(video).await?;
        tracing::info!(video_id = %created.id, "Video created");
        Ok(created.into())
    }
}

pub struct UpdateVideo {
    gateway: Arc<dyn AggregateGateway<Video>>,
}

impl UpdateVideo {
    pub fn new(gateway: Arc<dyn AggregateGateway<Video>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: UpdateVideoInput) -> Result<VideoOutput, AppError> {
        let mut video = self
            .gateway
            .find_by_id(&input.id)
            .await?
            .ok_or_else(|| AppError::not_found("Video", input.id))?;

        video.update(
            input.title,
            input.description,
            input.launched_at,
            input.duration,
            input.rating,
            input.opened,
            input.published,
            input.categories,
            input.genres,
            input.cast_members,
        );

        let notification = video.validation();
        if notification.has_error() {
            return Err(AppError::Validation(notification));
        }

        let updated = self.gateway.update(video).await?;
        tracing::info!(video_id = %updated.id, "Video updated");
        Ok(updated.into())
    }
}

pub struct GetVideoById {
    gateway: Arc<dyn AggregateGateway<Video>>,
}

impl GetVideoById {
    pub fn new(gateway: Arc<dyn AggregateGateway<Video>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: VideoId) -> Result<VideoOutput, AppError> {
        self.gateway
            .find_by_id(&id)
            .await?
            .map(VideoOutput::from)
            .ok_or_else(|| AppError::not_found("Video", id))
    }
}

pub struct ListVideos {
    gateway: Arc<dyn AggregateGateway<Video>>,
}

impl ListVideos {
    pub fn new(gateway: Arc<dyn AggregateGateway<Video>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: SearchQuery) -> Result<Pagination<VideoOutput>, AppError> {
        query.validate().map_err(AppError::InvalidInput)?;
        Ok(self.gateway.find_all(&query).await?.map(VideoOutput::from))
    }
}

/// Deletes the catalog entry and every stored media payload for it.
pub struct DeleteVideo {
    gateway: Arc<dyn AggregateGateway<Video>>,
    media_resources: Arc<dyn MediaResourceGateway>,
}

impl DeleteVideo {
    pub fn new(
        gateway: Arc<dyn AggregateGateway<Video>>,
        media_resources: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self {
            gateway,
            media_resources,
        }
    }

    pub async fn execute(&self, id: VideoId) -> Result<(), AppError> {
        self.gateway.delete_by_id(&id).await?;
        self.media_resources.clear_resources(id).await?;
        tracing::info!(video_id = %id, "Video deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{InMemoryGateway, InMemoryMediaResourceGateway};

    fn create_input(title: &str) -> CreateVideoInput {
        CreateVideoInput {
            title: title.to_string(),
            description: "A documentary".to_string(),
            launched_at: 2024,
            duration: 95.0,
            rating: Rating::Age12,
            opened: false,
            published: true,
            categories: HashSet::from([CategoryId::new()]),
            genres: HashSet::from([GenreId::new()]),
            cast_members: HashSet::from([CastMemberId::new()]),
        }
    }

    #[tokio::test]
    async fn test_create_video_with_empty_media_slots() {
        let gateway = Arc::new(InMemoryGateway::<Video>::new());
        let output = CreateVideo::new(gateway.clone())
            .execute(create_input("System Crash"))
            .await
            .unwrap();

        assert_eq!(output.title, "System Crash");
        assert!(output.trailer.is_none());
        assert!(output.video.is_none());
        assert_eq!(gateway.create_count(), 1);
    }

    #[tokio::test]
    async fn test_create_reports_every_violation_at_once() {
        let gateway = Arc::new(InMemoryGateway::<Video>::new());
        let mut input = create_input("");
        input.description = "d".repeat(4001);

        let err = CreateVideo::new(gateway.clone())
            .execute(input)
            .await
            .unwrap_err();
        match err {
            AppError::Validation(notification) => {
                assert_eq!(notification.errors().len(), 2);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(gateway.create_count(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_not_media() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut video = Video::new(
            "Old title",
            "",
            2020,
            60.0,
            Rating::Free,
            false,
            false,
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
        );
        video.update_trailer_media(VideoMedia::new("t.mp4", "sum", "raw/t.mp4"));
        let id = video.id;
        gateway.insert(video);

        let output = UpdateVideo::new(gateway.clone())
            .execute(UpdateVideoInput {
                id,
                title: "New title".to_string(),
                description: "Updated".to_string(),
                launched_at: 2021,
                duration: 61.0,
                rating: Rating::Age10,
                opened: true,
                published: true,
                categories: HashSet::new(),
                genres: HashSet::new(),
                cast_members: HashSet::new(),
            })
            .await
            .unwrap();

        assert_eq!(output.title, "New title");
        assert!(output.trailer.is_some());
        assert_eq!(gateway.update_count(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_video_is_not_found() {
        let gateway = Arc::new(InMemoryGateway::<Video>::new());
        let err = UpdateVideo::new(gateway)
            .execute(UpdateVideoInput {
                id: VideoId::new(),
                title: "t".to_string(),
                description: String::new(),
                launched_at: 2024,
                duration: 10.0,
                rating: Rating::Free,
                opened: false,
                published: false,
                categories: HashSet::new(),
                genres: HashSet::new(),
                cast_members: HashSet::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_videos_maps_outputs() {
        let gateway = Arc::new(InMemoryGateway::<Video>::new());
        CreateVideo::new(gateway.clone())
            .execute(create_input("One"))
            .await
            .unwrap();
        CreateVideo::new(gateway.clone())
            .execute(create_input("Two"))
            .await
            .unwrap();

        let page = ListVideos::new(gateway)
            .execute(SearchQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_video_clears_stored_resources() {
        let gateway = Arc::new(InMemoryGateway::<Video>::new());
        let media_resources = Arc::new(InMemoryMediaResourceGateway::new());
        let output = CreateVideo::new(gateway.clone())
            .execute(create_input("Doomed"))
            .await
            .unwrap();

        DeleteVideo::new(gateway.clone(), media_resources.clone())
            .execute(output.id)
            .await
            .unwrap();

        assert!(gateway.stored(&output.id).is_none());
        assert_eq!(media_resources.cleared(), vec![output.id]);
    }
}
