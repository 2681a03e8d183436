//! Genre aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, GenreId};
use super::Aggregate;
use crate::validation::{validate_length_range, validate_required, Notification};

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Genre {
    pub fn new(name: impl Into<String>, is_active: bool, categories: Vec<CategoryId>) -> Self {
        let now = Utc::now();
        Self {
            id: GenreId::new(),
            name: name.into(),
            is_active,
            categories,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        is_active: bool,
        categories: Vec<CategoryId>,
    ) {
        self.name = name.into();
        self.is_active = is_active;
        self.categories = categories;
        self.touch();
    }

    pub fn add_category(&mut self, category_id: CategoryId) {
        if !self.categories.contains(&category_id) {
            self.categories.push(category_id);
            self.touch();
        }
    }

    pub fn remove_category(&mut self, category_id: &CategoryId) {
        let before = self.categories.len();
        self.categories.retain(|id| id != category_id);
        if self.categories.len() != before {
            self.touch();
        }
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

impl Aggregate for Genre {
    type Id = GenreId;

    fn id(&self) -> &GenreId {
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
    fn test_new_genre_keeps_given_categories() {
        let category_id = CategoryId::new();
        let genre = Genre::new("Action", true, vec![category_id]);
        assert_eq!(genre.categories, vec![category_id]);
        assert_eq!(genre.created_at, genre.updated_at);
    }

    #[test]
    fn test_add_category_is_idempotent() {
        let mut genre = Genre::new("Action", true, vec![]);
        let category_id = CategoryId::new();
        genre.add_category(category_id);
        genre.add_category(category_id);
        assert_eq!(genre.categories.len(), 1);
    }

    #[test]
    fn test_remove_category() {
        let category_id = CategoryId::new();
        let other_id = CategoryId::new();
        let mut genre = Genre::new("Action", true, vec![category_id, other_id]);
        genre.remove_category(&category_id);
        assert_eq!(genre.categories, vec![other_id]);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let genre = Genre::new(" ", true, vec![]);
        let notification = genre.validation();
        assert_eq!(notification.errors().len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message,
            "'name' should not be empty"
        );
    }

    #[test]
    fn test_validate_accepts_single_character_name() {
        let genre = Genre::new("K", true, vec![]);
        assert!(!genre.validation().has_error());
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let mut genre = Genre::new("Action", true, vec![]);
        let before = genre.updated_at;
        genre.update("Drama", false, vec![CategoryId::new()]);
        assert_eq!(genre.name, "Drama");
        assert!(!genre.is_active);
        assert!(genre.updated_at >= before);
    }
}
