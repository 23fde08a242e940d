//! The locally edited copy of a post's editable fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Post;

/// Editable fields of a post before they are persisted.
///
/// The schema attributes are the single source of the field constraints; see
/// [`crate::validation::validate_draft`] for the typed view of failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Post title.
    #[validate(length(min = 1, max = 50, message = "title must be between 1 and 50 characters"))]
    pub title: String,
    /// Post body.
    #[validate(length(
        min = 1,
        max = 500,
        message = "content must be between 1 and 500 characters"
    ))]
    pub content: String,
    /// Category identifier as selected in the picker.
    #[validate(length(min = 1, message = "category is required"))]
    pub category_id: String,
}

impl Draft {
    /// Draft mirroring a loaded post. The category id is stringified because
    /// the picker binds string values.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category_id: post.category_id.to_string(),
        }
    }

    /// Live character count of the content field.
    pub fn character_count(&self) -> usize {
        character_count(&self.content)
    }
}

/// Number of characters in `content`, counted in Unicode scalar values.
pub fn character_count(content: &str) -> usize {
    content.chars().count()
}
