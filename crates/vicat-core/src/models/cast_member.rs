//! Cast member aggregate.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::CastMemberId;
use super::Aggregate;
use crate::validation::{validate_length_range, validate_required, Notification};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl Display for CastMemberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CastMemberType::Actor => write!(f, "actor"),
            CastMemberType::Director => write!(f, "director"),
        }
    }
}

impl FromStr for CastMemberType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "actor" => Ok(CastMemberType::Actor),
            "director" => Ok(CastMemberType::Director),
            _ => Err(anyhow::anyhow!("Invalid cast member type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: CastMemberId,
    pub name: String,
    pub member_type: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new(name: impl Into<String>, member_type: CastMemberType) -> Self {
        let now = Utc::now();
        Self {
            id: CastMemberId::new(),
            name: name.into(),
            member_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: impl Into<String>, member_type: CastMemberType) {
        self.name = name.into();
        self.member_type = member_type;
        self.updated_at = Utc::now();
    }
}

impl Aggregate for CastMember {
    type Id = CastMemberId;

    fn id(&self) -> &CastMemberId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn validate(&self, notification: &mut Notification) {
        if validate_required("name", &self.name, notification) {
            validate_length_range(
                "name",
                &self.name,
                NAME_MIN_LENGTH,
                NAME_MAX_LENGTH,
                notification,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_member_type_display_round_trip() {
        assert_eq!(
            "actor".parse::<CastMemberType>().unwrap(),
            CastMemberType::Actor
        );
        assert_eq!(
            "director".parse::<CastMemberType>().unwrap(),
            CastMemberType::Director
        );
        assert!("producer".parse::<CastMemberType>().is_err());
    }

    #[test]
    fn test_new_cast_member() {
        let member = CastMember::new("Mia Dias", CastMemberType::Director);
        assert_eq!(member.member_type, CastMemberType::Director);
        assert_eq!(member.created_at, member.updated_at);
        assert!(!member.validation().has_error());
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let mut member = CastMember::new("Mia Dias", CastMemberType::Director);
        let before = member.updated_at;
        member.update("Mia Moraes", CastMemberType::Actor);
        assert_eq!(member.name, "Mia Moraes");
        assert_eq!(member.member_type, CastMemberType::Actor);
        assert!(member.updated_at >= before);
    }

    #[test]
    fn test_validate_rejects_empty_and_short_names() {
        let member = CastMember::new("", CastMemberType::Actor);
        assert_eq!(member.validation().errors().len(), 1);

        let member = CastMember::new("Al", CastMemberType::Actor);
        assert_eq!(member.validation().errors().len(), 1);
    }
}
