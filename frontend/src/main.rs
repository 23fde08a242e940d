//! Yew frontend for the post editor.

mod api;
mod components;
#[cfg(not(feature = "mock"))]
mod config;
pub mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod notification_context;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
