use post_editor_shared::{CacheKey, PostListItem};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::loading_spinner::LoadingSpinner,
    hooks::use_invalidation,
    i18n::current::posts_page as t,
    router::Route,
};

#[function_component(PostsPage)]
pub fn posts_page() -> Html {
    let posts = use_state(Vec::<PostListItem>::new);
    let loading = use_state(|| true);
    // Bumped whenever a save invalidates the listing.
    let generation = use_invalidation(CacheKey::Posts);

    // Generation of the newest fetch; older responses are ignored.
    let latest = use_mut_ref(|| 0_u64);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        let latest = latest.clone();
        use_effect_with(generation, move |generation| {
            let generation = *generation;
            *latest.borrow_mut() = generation;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::api::fetch_posts().await;
                if *latest.borrow() != generation {
                    return;
                }
                match result {
                    Ok(data) => posts.set(data),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch posts: {}", e).into());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <main class={classes!("container", "max-w-3xl", "mx-auto", "px-4", "py-10")}>
            <section class={classes!("mb-8")}>
                <p class={classes!(
                    "text-sm",
                    "tracking-[0.3em]",
                    "uppercase",
                    "text-[var(--muted)]",
                    "font-semibold"
                )}>{ t::KICKER }</p>
                <h1 class={classes!("text-3xl", "font-bold", "mt-2")}>{ t::TITLE }</h1>
            </section>

            if *loading && posts.is_empty() {
                <LoadingSpinner />
            } else if posts.is_empty() {
                <p class={classes!("text-[var(--muted)]")}>{ t::EMPTY }</p>
            } else {
                <ul class={classes!("divide-y", "divide-[var(--border)]")}>
                    { for posts.iter().map(|post| html! {
                        <li key={post.id} class={classes!("flex", "items-center", "justify-between", "py-3")}>
                            <span class={classes!("font-medium")}>{ &post.title }</span>
                            <Link<Route>
                                to={Route::EditPost { id: post.id }}
                                classes={classes!("text-sm", "text-[var(--primary)]", "hover:underline")}
                            >
                                { t::EDIT }
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
            }
        </main>
    }
}
