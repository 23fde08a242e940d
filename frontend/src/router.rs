use post_editor_shared::{InvalidationBus, PostId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{notification_context::ToastProvider, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/post_editor/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/posts")]
    Posts,
    #[cfg(feature = "mock")]
    #[at("/post_editor/posts")]
    Posts,

    #[cfg(not(feature = "mock"))]
    #[at("/posts/:id/edit")]
    EditPost { id: PostId },
    #[cfg(feature = "mock")]
    #[at("/post_editor/posts/:id/edit")]
    EditPost { id: PostId },

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/post_editor/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Posts} /> },
        Route::Posts => html! { <pages::PostsPage /> },
        Route::EditPost {
            id,
        } => {
            html! { <pages::edit_post::EditPostPage id={id} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    // One registry for the whole app so a save on the edit page reaches the listing.
    let cache_bus = use_memo((), |_| InvalidationBus::new());

    html! {
        <BrowserRouter>
            <ContextProvider<InvalidationBus> context={(*cache_bus).clone()}>
                <ToastProvider>
                    <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                        <div class="flex-1 pt-[var(--space-sm)]">
                            <Switch<Route> render={switch} />
                        </div>
                    </div>
                </ToastProvider>
            </ContextProvider<InvalidationBus>>
        </BrowserRouter>
    }
}
