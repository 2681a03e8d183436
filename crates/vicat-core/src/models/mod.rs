//! Data models for the catalog
//!
//! This module contains all domain structures used throughout the
//! application, organized by aggregate. Each sub-module represents a
//! specific feature area.

mod cast_member;
mod category;
mod events;
mod genre;
mod ids;
mod media;
mod rating;
mod search;
mod video;

// Re-export all models for convenient imports
pub use cast_member::*;
pub use category::*;
pub use events::*;
pub use genre::*;
pub use ids::*;
pub use media::*;
pub use rating::*;
pub use search::*;
pub use video::*;

use chrono::{DateTime, Utc};
use std::fmt::Display;

use crate::validation::Notification;

/// Base contract shared by every aggregate root: a value-object identity,
/// lifecycle timestamps, and accumulating validation.
pub trait Aggregate {
    type Id: Display + Send + Sync;

    fn id(&self) -> &Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// Appends one error per violated invariant; never short-circuits.
    fn validate(&self, notification: &mut Notification);

    /// Runs [`validate`](Self::validate) against a fresh notification.
    fn validation(&self) -> Notification {
        let mut notification = Notification::new();
        self.validate(&mut notification);
        notification
    }
}
