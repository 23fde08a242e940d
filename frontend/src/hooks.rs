//! Yew hooks for loading posts.

use post_editor_shared::{load_post, CacheKey, InvalidationBus, LoadState, Post, PostId, PostLoader};
use yew::prelude::*;

use crate::api::HttpPostsApi;

/// Load post `id` once and expose the loading state.
///
/// The request is issued when `id` changes and never again for the same id,
/// so re-renders and window refocus do not refetch. A response for an id the
/// page has since moved away from is discarded.
///
/// # Example
/// ```rust
/// #[function_component(Preview)]
/// fn preview(props: &PreviewProps) -> Html {
///     match crate::hooks::use_post(props.id) {
///         LoadState::Ready(post) => html! { <h1>{ post.title }</h1> },
///         _ => Html::default(),
///     }
/// }
/// ```
#[hook]
pub fn use_post(id: PostId) -> LoadState<Post> {
    let state = use_state(LoadState::<Post>::default);
    let loader = use_mut_ref(PostLoader::new);

    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            if loader.borrow_mut().begin(id) {
                state.set(LoadState::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = load_post(&HttpPostsApi, id).await;
                    if !loader.borrow().is_current(id) {
                        return;
                    }
                    if let LoadState::Failed(reason) = &result {
                        web_sys::console::error_1(
                            &format!("Failed to fetch post {}: {}", id, reason).into(),
                        );
                    }
                    state.set(result);
                });
            }
            || ()
        });
    }

    (*state).clone()
}

/// Invalidation registry shared by the whole app.
///
/// Falls back to a private registry when no provider is mounted, which keeps
/// components usable in isolation.
#[hook]
pub fn use_cache_bus() -> InvalidationBus {
    let fallback = use_memo((), |_| InvalidationBus::new());
    use_context::<InvalidationBus>().unwrap_or_else(|| (*fallback).clone())
}

/// Generation counter bumped every time `key` is invalidated.
///
/// Use it as an effect dependency to refetch a cached query:
/// ```rust
/// let generation = use_invalidation(CacheKey::Posts);
/// use_effect_with(generation, move |_| { /* refetch */ || () });
/// ```
#[hook]
pub fn use_invalidation(key: CacheKey) -> u64 {
    let bus = use_cache_bus();
    let generation = use_mut_ref(|| 0_u64);
    let rerender = use_force_update();

    {
        let generation = generation.clone();
        use_effect_with((key, bus), move |(key, bus)| {
            let subscription = bus.subscribe(key.clone(), move |_| {
                *generation.borrow_mut() += 1;
                rerender.force_update();
            });
            move || drop(subscription)
        });
    }

    let current = *generation.borrow();
    current
}
