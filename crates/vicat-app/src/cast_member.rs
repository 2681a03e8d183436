//! Cast member use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gateways::AggregateGateway;
use vicat_core::models::{
    Aggregate, CastMember, CastMemberId, CastMemberType, Pagination, SearchQuery,
};
use vicat_core::AppError;

#[derive(Debug, Clone)]
pub struct CreateCastMemberInput {
    pub name: String,
    pub member_type: CastMemberType,
}

#[derive(Debug, Clone, Serialize)]
pub struct CastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    pub member_type: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CastMember> for CastMemberOutput {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            member_type: member.member_type,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

pub struct CreateCastMember {
    gateway: Arc<dyn AggregateGateway<CastMember>>,
}

impl CreateCastMember {
    pub fn new(gateway: Arc<dyn AggregateGateway<CastMember>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        input: CreateCastMemberInput,
    ) -> Result<CastMemberOutput, AppError> {
        let member = CastMember::new(input.name, input.member_type);

        let notification = member.validation();
        if notification.has_error() {
            return Err(AppError::Validation(notification));
        }

        let created = self.gateway.create(member).await?;
        tracing::info!(cast_member_id = %created.id, "Cast member created");
        Ok(created.into())
    }
}

pub struct GetCastMemberById {
    gateway: Arc<dyn AggregateGateway<CastMember>>,
}

impl GetCastMemberById {
    pub fn new(gateway: Arc<dyn AggregateGateway<CastMember>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: CastMemberId) -> Result<CastMemberOutput, AppError> {
        self.gateway
            .find_by_id(&id)
            .await?
            .map(CastMemberOutput::from)
            .ok_or_else(|| AppError::not_found("CastMember", id))
    }
}

pub struct ListCastMembers {
    gateway: Arc<dyn AggregateGateway<CastMember>>,
}

impl ListCastMembers {
    pub fn new(gateway: Arc<dyn AggregateGateway<CastMember>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        query: SearchQuery,
    ) -> Result<Pagination<CastMemberOutput>, AppError> {
        query.validate().map_err(AppError::InvalidInput)?;
        Ok(self
            .gateway
            .find_all(&query)
            .await?
            .map(CastMemberOutput::from))
    }
}

pub struct DeleteCastMember {
    gateway: Arc<dyn AggregateGateway<CastMember>>,
}

impl DeleteCastMember {
    pub fn new(gateway: Arc<dyn AggregateGateway<CastMember>>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: CastMemberId) -> Result<(), AppError> {
        self.gateway.delete_by_id(&id).await?;
        tracing::info!(cast_member_id = %id, "Cast member deleted");
        Ok(())
    }
}
