use post_editor_shared::{Notification, Variant};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::toast as t;

const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<(u64, Notification)>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    if props.toasts.is_empty() {
        return Html::default();
    }

    html! {
        <div
            class={classes!(
                "fixed",
                "bottom-6",
                "right-6",
                "z-50",
                "flex",
                "flex-col",
                "gap-3",
                "w-[min(24rem,calc(100vw-3rem))]"
            )}
            aria-live="polite"
        >
            { for props.toasts.iter().map(|(id, notification)| {
                let on_dismiss = props.on_dismiss.clone();
                let id = *id;
                html! {
                    <ToastItem
                        key={id}
                        notification={notification.clone()}
                        on_close={Callback::from(move |_| on_dismiss.emit(id))}
                    />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub notification: Notification,
    pub on_close: Callback<()>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), AUTO_DISMISS_MS)
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with((), move |_| {
            auto_timeout.reset();
        });
    }

    let destructive = props.notification.variant == Some(Variant::Destructive);
    let mut wrapper_classes = classes!(
        "toast",
        "flex",
        "items-start",
        "gap-3",
        "rounded-2xl",
        "px-5",
        "py-4",
        "text-sm",
        "shadow-xl",
        "border"
    );
    if destructive {
        wrapper_classes.push(classes!(
            "bg-red-600",
            "text-white",
            "border-red-700"
        ));
    } else {
        wrapper_classes.push(classes!(
            "bg-[var(--surface)]",
            "text-[var(--text)]",
            "border-[var(--border)]"
        ));
    }

    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={wrapper_classes}
            role={if destructive { "alert" } else { "status" }}
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ props.notification.title.clone() }</p>
                <p>{ props.notification.description.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-8",
                    "w-8",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "bg-transparent",
                    "text-lg",
                    "transition",
                    "duration-200",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15"
                )}
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
