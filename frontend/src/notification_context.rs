use std::rc::Rc;

use post_editor_shared::Notification;
use yew::prelude::*;

use crate::components::toast::ToastStack;

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<(u64, Notification)>,
    next_id: u64,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

// Older toasts are dropped once the stack is full.
const MAX_TOASTS: usize = 3;

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notification) => {
                next.toasts.push((next.next_id, notification));
                next.next_id += 1;
                if next.toasts.len() > MAX_TOASTS {
                    let overflow = next.toasts.len() - MAX_TOASTS;
                    next.toasts.drain(..overflow);
                }
            },
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|(toast_id, _)| *toast_id != id);
            },
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Notification sink for components below [`ToastProvider`].
#[hook]
pub fn use_notifier() -> Callback<Notification> {
    let ctx = use_context::<ToastContext>();
    Callback::from(move |notification: Notification| match ctx.as_ref() {
        Some(ctx) => ctx.dispatch(ToastAction::Push(notification)),
        None => web_sys::console::warn_1(
            &format!("Notification dropped, no toast provider: {}", notification.title).into(),
        ),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |id: u64| state.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={state.clone()}>
            {props.children.clone()}
            <ToastStack toasts={state.toasts.clone()} on_dismiss={on_dismiss} />
        </ContextProvider<ToastContext>>
    }
}
