//! Fetch-once loading of the post being edited.

use tracing::warn;

use crate::{submit::PostsApi, Post, PostId};

/// Tri-state result of a remote read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request outstanding.
    #[default]
    Loading,
    /// Data arrived.
    Ready(T),
    /// The read failed. The form has no dedicated UI for this and stays
    /// uninitialized.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether the request is still outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Remembers which post was requested so re-renders and focus changes do not
/// trigger another read of the same id.
#[derive(Debug, Default)]
pub struct PostLoader {
    requested: Option<PostId>,
}

impl PostLoader {
    /// Loader that has requested nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request for `id`. Returns `false` when `id` was already the
    /// last requested post and no fetch should be issued.
    pub fn begin(&mut self, id: PostId) -> bool {
        if self.requested == Some(id) {
            return false;
        }
        self.requested = Some(id);
        true
    }

    /// Whether a completion for `id` still belongs to the latest request.
    /// Results for a superseded id must be dropped.
    pub fn is_current(&self, id: PostId) -> bool {
        self.requested == Some(id)
    }

    /// Last requested id.
    pub fn requested(&self) -> Option<PostId> {
        self.requested
    }
}

/// Read post `id` through `api` and fold the outcome into a [`LoadState`].
pub async fn load_post<A>(api: &A, id: PostId) -> LoadState<Post>
where
    A: PostsApi + ?Sized,
{
    match api.fetch_post(id).await {
        Ok(post) => LoadState::Ready(post),
        Err(reason) => {
            warn!(post_id = id, %reason, "failed to load post");
            LoadState::Failed(reason)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadState, PostLoader};

    #[test]
    fn begins_once_per_id() {
        let mut loader = PostLoader::new();
        assert!(loader.begin(1));
        assert!(!loader.begin(1));
        assert!(loader.begin(2));
        assert!(loader.begin(1));
        assert_eq!(loader.requested(), Some(1));
    }

    #[test]
    fn superseded_completion_is_dropped() {
        let mut loader = PostLoader::new();
        assert!(loader.begin(1));
        assert!(loader.begin(2));

        // Request 2 lands first, then the slower request 1.
        let mut applied = Vec::new();
        for finished in [2, 1] {
            if loader.is_current(finished) {
                applied.push(finished);
            }
        }
        assert_eq!(applied, vec![2]);
        assert!(!loader.is_current(1));
        assert!(!PostLoader::new().is_current(1));
    }

    #[test]
    fn load_state_accessors() {
        let loading: LoadState<u8> = LoadState::default();
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);
        assert_eq!(LoadState::Ready(3u8).ready(), Some(&3));
        assert!(!LoadState::<u8>::Failed("boom".to_string()).is_loading());
    }
}
