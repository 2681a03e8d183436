//! Category aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::CategoryId;
use super::Aggregate;
use crate::validation::{validate_length_range, validate_required, Notification};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.is_active = is_active;
        self.touch();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Aggregate for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
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
    fn test_new_category_stamps_equal_timestamps() {
        let category = Category::new("Movies", "Feature films", true);
        assert_eq!(category.created_at, category.updated_at);
        assert!(category.is_active);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let mut category = Category::new("Movies", "Feature films", true);
        let before = category.updated_at;
        category.update("Series", "Episodic content", false);

        assert_eq!(category.name, "Series");
        assert_eq!(category.description, "Episodic content");
        assert!(!category.is_active);
        assert!(category.updated_at >= before);
        assert!(category.updated_at >= category.created_at);
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut category = Category::new("Movies", "", false);
        category.activate();
        assert!(category.is_active);
        category.deactivate();
        assert!(!category.is_active);
    }

    #[test]
    fn test_validate_accepts_valid_name() {
        let category = Category::new("Movies", "Feature films", true);
        assert!(!category.validation().has_error());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let category = Category::new("", "Feature films", true);
        let notification = category.validation();
        assert_eq!(notification.errors().len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message,
            "'name' should not be empty"
        );
    }

    #[test]
    fn test_validate_rejects_short_and_long_names() {
        let category = Category::new("ab", "", true);
        assert_eq!(category.validation().errors().len(), 1);

        let category = Category::new("x".repeat(256), "", true);
        assert_eq!(category.validation().errors().len(), 1);
    }
}
