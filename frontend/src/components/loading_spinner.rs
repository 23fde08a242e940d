use yew::prelude::*;

use crate::i18n::current::common as t;

/// Where the spinner is drawn.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum Placement {
    /// In the page flow, in place of content that is still loading.
    #[default]
    Inline,
    /// Over the whole page, blocking input until the data arrives.
    Overlay,
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub placement: Placement,
    #[prop_or(AttrValue::Static(t::LOADING))]
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let indicator = html! {
        <div
            class={classes!("inline-flex", "items-center", "gap-3", "text-sm", "text-[var(--muted)]")}
            role="status"
            aria-live="polite"
        >
            <span
                aria-hidden="true"
                class={classes!(
                    "h-5",
                    "w-5",
                    "rounded-full",
                    "border-2",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            <span>{ props.label.clone() }</span>
        </div>
    };

    match props.placement {
        Placement::Inline => html! {
            <div class={classes!("flex", "justify-center", "py-8")}>{ indicator }</div>
        },
        Placement::Overlay => html! {
            <div
                class={classes!("fixed", "inset-0", "z-40", "flex", "items-center", "justify-center", "bg-black/30")}
                aria-busy="true"
            >
                { indicator }
            </div>
        },
    }
}
