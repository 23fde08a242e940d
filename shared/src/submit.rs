//! Submission of an edited draft.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cache::{CacheKey, InvalidationBus},
    form::FormEvent,
    notify::{Notification, Notifier},
    validation::{validate_draft, FieldViolation},
    Draft, Post, PostId, UpdatePostRequest,
};

/// Remote post resource. Futures are `?Send` so browser fetch can back it.
#[async_trait(?Send)]
pub trait PostsApi {
    /// Read one post.
    async fn fetch_post(&self, id: PostId) -> Result<Post, String>;

    /// Apply a partial update to one post.
    async fn update_post(&self, id: PostId, body: &UpdatePostRequest) -> Result<(), String>;
}

/// Why a submission did not persist anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The draft failed the schema; no request was sent.
    #[error("form is not valid: {} field(s) rejected", .0.len())]
    Invalid(Vec<FieldViolation>),
    /// The update request failed; the draft was kept for a retry.
    #[error("update request failed: {0}")]
    Request(String),
}

/// User-facing texts emitted by the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessages {
    /// Headline when the draft fails validation.
    pub invalid_title: String,
    /// Detail when the draft fails validation.
    pub invalid_description: String,
    /// Headline when the request fails; the detail is the error itself.
    pub failure_title: String,
    /// Headline on success.
    pub success_title: String,
    /// Detail on success.
    pub success_description: String,
}

impl Default for SubmitMessages {
    fn default() -> Self {
        Self {
            invalid_title: "Error".to_string(),
            invalid_description: "form is not valid".to_string(),
            failure_title: "Error".to_string(),
            success_title: "Success".to_string(),
            success_description: "Post updated successfully".to_string(),
        }
    }
}

/// Sends a draft as an update of one post.
pub struct Submitter<A, N> {
    post_id: PostId,
    api: A,
    notifier: N,
    cache: InvalidationBus,
    messages: SubmitMessages,
}

impl<A, N> Submitter<A, N>
where
    A: PostsApi,
    N: Notifier,
{
    /// Submitter for post `post_id`.
    pub fn new(post_id: PostId, api: A, notifier: N, cache: InvalidationBus) -> Self {
        Self {
            post_id,
            api,
            notifier,
            cache,
            messages: SubmitMessages::default(),
        }
    }

    /// Replace the notification texts.
    pub fn with_messages(mut self, messages: SubmitMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Post this submitter writes to.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Validate `draft`, send it, and on success invalidate the listing,
    /// reset the form and announce it, in that order.
    ///
    /// `dispatch` receives the form events the submission produces. On any
    /// failure the draft is left as it was and a destructive notification is
    /// emitted.
    pub async fn submit<D>(&self, draft: Draft, dispatch: D) -> Result<(), SubmitError>
    where
        D: Fn(FormEvent),
    {
        dispatch(FormEvent::ValidationRequested);
        let validated = match validate_draft(&draft) {
            Ok(validated) => {
                dispatch(FormEvent::ValidationCompleted(Vec::new()));
                validated
            },
            Err(violations) => {
                dispatch(FormEvent::ValidationCompleted(violations.clone()));
                warn!(post_id = self.post_id, rejected = violations.len(), "refusing invalid draft");
                self.notifier.notify(Notification::destructive(
                    &self.messages.invalid_title,
                    &self.messages.invalid_description,
                ));
                return Err(SubmitError::Invalid(violations));
            },
        };

        let body = validated.into_request();
        if let Err(reason) = self.api.update_post(self.post_id, &body).await {
            warn!(post_id = self.post_id, %reason, "post update failed");
            self.notifier
                .notify(Notification::destructive(&self.messages.failure_title, reason.clone()));
            return Err(SubmitError::Request(reason));
        }

        let notified = self.cache.invalidate(&CacheKey::Posts);
        dispatch(FormEvent::Reset);
        info!(post_id = self.post_id, listeners = notified, "post updated");
        self.notifier.notify(Notification::success(
            &self.messages.success_title,
            &self.messages.success_description,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::{PostsApi, SubmitError, SubmitMessages, Submitter};
    use crate::{cache::InvalidationBus, Draft, Notification, Post, PostId, UpdatePostRequest};

    struct RejectingApi;

    #[async_trait(?Send)]
    impl PostsApi for RejectingApi {
        async fn fetch_post(&self, _id: PostId) -> Result<Post, String> {
            Err("HTTP error: 404".to_string())
        }

        async fn update_post(&self, _id: PostId, _body: &UpdatePostRequest) -> Result<(), String> {
            Err("HTTP error: 500".to_string())
        }
    }

    #[tokio::test]
    async fn custom_messages_are_used() {
        let seen = RefCell::new(Vec::<Notification>::new());
        let messages = SubmitMessages {
            failure_title: "保存失败".to_string(),
            ..SubmitMessages::default()
        };
        let submitter = Submitter::new(
            9,
            RejectingApi,
            |n: Notification| seen.borrow_mut().push(n),
            InvalidationBus::new(),
        )
        .with_messages(messages);
        let draft = Draft {
            title: "t".to_string(),
            content: "c".to_string(),
            category_id: "1".to_string(),
        };

        let err = submitter.submit(draft, |_| {}).await.expect_err("server rejects");
        assert_eq!(err, SubmitError::Request("HTTP error: 500".to_string()));
        assert_eq!(submitter.post_id(), 9);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].title, "保存失败");
        assert_eq!(seen[0].description, "HTTP error: 500");
        assert!(seen[0].is_destructive());
    }

    #[test]
    fn invalid_error_reports_field_count() {
        let err = SubmitError::Invalid(Vec::new());
        assert_eq!(err.to_string(), "form is not valid: 0 field(s) rejected");
    }
}
