//! Target-independent core of the post editor.
//!
//! Everything that decides *what* the edit form does lives here: the post
//! model, the validation schema, the draft/counter state machine, the loader
//! state, cache invalidation and the submitter. The Yew frontend only renders
//! these types and plugs browser I/O into the [`submit::PostsApi`] and
//! [`notify::Notifier`] seams.

use serde::{Deserialize, Serialize};

pub mod cache;
pub mod counter;
pub mod draft;
pub mod form;
pub mod loader;
pub mod notify;
pub mod submit;
pub mod validation;

pub use cache::{CacheKey, InvalidationBus, Subscription};
pub use counter::{counter_view, CounterTier, CounterView};
pub use draft::{character_count, Draft};
pub use form::{EditForm, FieldEdit, FormEvent, FormPhase};
pub use loader::{load_post, LoadState, PostLoader};
pub use notify::{Notification, Notifier, Variant};
pub use submit::{PostsApi, SubmitError, SubmitMessages, Submitter};
pub use validation::{validate_draft, Field, FieldViolation, ValidatedDraft};

/// Backend identifier of a post or category.
pub type PostId = i64;

/// 完整文章数据模型，由后端持有，编辑页只读取一次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend identifier.
    pub id: PostId,
    /// Title, 1 to 50 characters.
    pub title: String,
    /// Body text, 1 to 500 characters.
    pub content: String,
    /// Identifier of the category the post is filed under.
    pub category_id: PostId,
}

/// PATCH body sent for a validated draft.
///
/// Only [`ValidatedDraft::into_request`] builds one, so an update can never
/// carry values that failed the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
    /// Selected category, as the string the picker emitted.
    pub category_id: String,
}

// 列表项（精简版）
/// Row of the post listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListItem {
    /// Backend identifier.
    pub id: PostId,
    /// Title shown in the listing.
    pub title: String,
    /// Category the post is filed under.
    pub category_id: PostId,
}

impl From<Post> for PostListItem {
    fn from(p: Post) -> Self {
        PostListItem {
            id: p.id,
            title: p.title,
            category_id: p.category_id,
        }
    }
}

/// Category offered by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier.
    pub id: PostId,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::{Post, UpdatePostRequest};

    #[test]
    fn post_uses_camel_case_category_key() {
        let post: Post = serde_json::from_str(
            r#"{"id":1,"title":"Hello","content":"World","categoryId":7}"#,
        )
        .expect("valid post payload");
        assert_eq!(post.category_id, 7);

        let body = UpdatePostRequest {
            title: "Hello".to_string(),
            content: "World".to_string(),
            category_id: "7".to_string(),
        };
        let json = serde_json::to_value(&body).expect("serializable body");
        assert_eq!(json["categoryId"], "7");
    }
}
