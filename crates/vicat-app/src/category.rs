//! Category use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gateways::AggregateGateway;
use vicat_core::models::{Aggregate, Category, CategoryId, Pagination, SearchQuery};
use vicat_core::AppError;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

pub struct CreateCategory {
    gateway: Arc<dyn AggregateGateway<Category>>,
}

impl CreateCategory {
    pub fn new(gateway: Arc<dyn AggregateGateway<Category>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: CreateCategoryInput) -> Result<CategoryOutput, AppError> {
        let category = Category::new(input.name, input.description, input.is_active);

        let notification = category.validation();
        if notification.has_error() {
            return Err(AppError::Validation(notification));
        }

        let created = self.gateway.create(category).await?;
        tracing::info!(category_id = %created.id, "Category created");
        Ok(created.into())
    }
}

pub struct GetCategoryById {
    gateway: Arc<dyn AggregateGateway<Category>>,
}

impl GetCategoryById {
    pub fn new(gateway: Arc<dyn AggregateGateway<Category>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: CategoryId) -> Result<CategoryOutput, AppError> {
        self.gateway
            .find_by_id(&id)
            .await?
            .map(CategoryOutput::from)
            .ok_or_else(|| AppError::not_found("Category", id))
    }
}

pub struct ListCategories {
    gateway: Arc<dyn AggregateGateway<Category>>,
}

impl ListCategories {
    pub fn new(gateway: Arc<dyn AggregateGateway<Category>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        query: SearchQuery,
    ) -> Result<Pagination<CategoryOutput>, AppError> {
        query.validate().map_err(AppError::InvalidInput)?;
        Ok(self.gateway.find_all(&query).await?.map(CategoryOutput::from))
    }
}

pub struct DeleteCategory {
    gateway: Arc<dyn AggregateGateway<Category>>,
}

impl DeleteCategory {
    pub fn new(gateway: Arc<dyn AggregateGateway<Category>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: CategoryId) -> Result<(), AppError> {
        self.gateway.delete_by_id(&id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
