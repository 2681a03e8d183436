//! Genre use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gateways::AggregateGateway;
use vicat_core::models::{Aggregate, CategoryId, Genre, GenreId, Pagination, SearchQuery};
use vicat_core::AppError;

#[derive(Debug, Clone)]
pub struct CreateGenreInput {
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            is_active: genre.is_active,
            categories: genre.categories,
            created_at: genre.created_at,
            updated_at: genre.updated_at,
        }
    }
}

pub struct CreateGenre {
    gateway: Arc<dyn AggregateGateway<Genre>>,
}

impl CreateGenre {
    pub fn new(gateway: Arc<dyn AggregateGateway<Genre>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: CreateGenreInput) -> Result<GenreOutput, AppError> {
        let genre = Genre::new(input.name, input.is_active, input.categories);

        let notification = genre.validation();
        if notification.has_error() {
            return Err(AppError::Validation(notification));
        }

        let created = self.gateway.create(genre).await?;
        tracing::info!(genre_id = %created.id, "Genre created");
        Ok(created.into())
    }
}

pub struct GetGenreById {
    gateway: Arc<dyn AggregateGateway<Genre>>,
}

impl GetGenreById {
    pub fn new(gateway: Arc<dyn AggregateGateway<Genre>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: GenreId) -> Result<GenreOutput, AppError> {
        self.gateway
            .find_by_id(&id)
            .await?
            .map(GenreOutput::from)
            .ok_or_else(|| AppError::not_found("Genre", id))
    }
}

pub struct ListGenres {
    gateway: Arc<dyn AggregateGateway<Genre>>,
}

impl ListGenres {
    pub fn new(gateway: Arc<dyn AggregateGateway<Genre>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: SearchQuery) -> Result<Pagination<GenreOutput>, AppError> {
        query.validate().map_err(AppError::InvalidInput)?;
        Ok(self.gateway.find_all(&query).await?.map(GenreOutput::from))
    }
}

pub struct DeleteGenre {
    gateway: Arc<dyn AggregateGateway<Genre>>,
}

impl DeleteGenre {
    pub fn new(gateway: Arc<dyn AggregateGateway<Genre>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: GenreId) -> Result<(), AppError> {
        self.gateway.delete_by_id(&id).await?;
        tracing::info!(genre_id = %id, "Genre deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::InMemoryGateway;

    #[tokio::test]
    async fn test_create_keeps_category_relations() {
        let gateway = Arc::new(InMemoryGateway::<Genre>::new());
        let category_id = CategoryId::new();
        let use_case = CreateGenre::new(gateway.clone());

        let output = use_case
            .execute(CreateGenreInput {
                name: "Action".to_string(),
                is_active: true,
                categories: vec![category_id],
            })
            .await
            .unwrap();

        assert_eq!(output.categories, vec![category_id]);
        assert_eq!(gateway.create_count(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let gateway = Arc::new(InMemoryGateway::<Genre>::new());
        let use_case = CreateGenre::new(gateway.clone());

        let err = use_case
            .execute(CreateGenreInput {
                name: "  ".to_string(),
                is_active: true,
                categories: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(gateway.create_count(), 0);
    }

    #[tokio::test]
    async fn test_get_and_delete_round_trip() {
        let gateway = Arc::new(InMemoryGateway::new());
        let genre = Genre::new("Drama", true, vec![]);
        let id = genre.id;
        gateway.insert(genre);

        let fetched = GetGenreById::new(gateway.clone()).execute(id).await.unwrap();
        assert_eq!(fetched.name, "Drama");

        DeleteGenre::new(gateway.clone()).execute(id).await.unwrap();
        assert!(matches!(
            GetGenreById::new(gateway).execute(id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_maps_page_metadata() {
        let gateway = Arc::new(InMemoryGateway::new());
        gateway.insert(Genre::new("Action", true, vec![]));
        gateway.insert(Genre::new("Drama", true, vec![]));

        let page = ListGenres::new(gateway)
            .execute(SearchQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
    }
}
