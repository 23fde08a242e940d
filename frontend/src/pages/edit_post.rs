use std::rc::Rc;

use post_editor_shared::{
    EditForm, Field, FieldEdit, FormEvent, Notification, PostId, SubmitMessages, Submitter,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::HttpPostsApi,
    components::{
        category_picker::CategoryPicker,
        char_counter::CharCounter,
        loading_spinner::{LoadingSpinner, Placement},
    },
    hooks::{use_cache_bus, use_post},
    i18n::{current::edit_post as t, fill_one},
    notification_context::use_notifier,
    router::Route,
};

/// Reducer wrapper so the shared state machine can back `use_reducer`.
#[derive(Default, PartialEq)]
struct FormState(EditForm);

impl Reducible for FormState {
    type Action = FormEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(FormState(self.0.clone().transition(action)))
    }
}

fn submit_messages() -> SubmitMessages {
    SubmitMessages {
        invalid_title: t::INVALID_TITLE.to_string(),
        invalid_description: t::INVALID_DESCRIPTION.to_string(),
        failure_title: t::FAILURE_TITLE.to_string(),
        success_title: t::SUCCESS_TITLE.to_string(),
        success_description: t::SUCCESS_DESCRIPTION.to_string(),
    }
}

fn input_classes(invalid: bool) -> Classes {
    let mut classes = classes!(
        "mt-1",
        "w-full",
        "rounded-lg",
        "border",
        "px-3",
        "py-2",
        "bg-[var(--surface)]",
        "text-[var(--text)]"
    );
    classes.push(if invalid { "border-red-500" } else { "border-[var(--border)]" });
    classes
}

fn field_error(form: &EditForm, field: Field) -> Html {
    match form.violation_for(field) {
        Some(violation) => html! {
            <p class={classes!("mt-1", "text-xs", "text-red-600")}>{ violation.message.clone() }</p>
        },
        None => Html::default(),
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EditPostProps {
    pub id: PostId,
}

#[function_component(EditPostPage)]
pub fn edit_post_page(props: &EditPostProps) -> Html {
    let post_id = props.id;
    let post_state = use_post(post_id);
    let form = use_reducer(FormState::default);
    let submitting = use_state(|| false);
    let notifier = use_notifier();
    let bus = use_cache_bus();

    // Populate once the loader is ready. Edits made before that are overwritten.
    {
        let dispatcher = form.dispatcher();
        let loaded = post_state.ready().cloned();
        use_effect_with(loaded, move |loaded| {
            if let Some(post) = loaded {
                dispatcher.dispatch(FormEvent::Loaded(post.clone()));
            }
            || ()
        });
    }

    let on_title_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(FormEvent::Edited(FieldEdit::Title(target.value())));
            }
        })
    };

    let on_content_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                dispatcher.dispatch(FormEvent::Edited(FieldEdit::Content(target.value())));
            }
        })
    };

    let on_category_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| {
            dispatcher.dispatch(FormEvent::Edited(FieldEdit::CategoryId(value)));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let notifier = notifier.clone();
        let bus = bus.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let draft = form.0.draft().clone();
            let dispatcher = form.dispatcher();
            let notifier = notifier.clone();
            let submitter = Submitter::new(
                post_id,
                HttpPostsApi,
                move |notification: Notification| notifier.emit(notification),
                bus.clone(),
            )
            .with_messages(submit_messages());

            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = submitter
                    .submit(draft, move |event| dispatcher.dispatch(event))
                    .await;
                if let Err(e) = result {
                    web_sys::console::warn_1(
                        &format!("Post {} was not updated: {}", post_id, e).into(),
                    );
                }
                submitting.set(false);
            });
        })
    };

    let current = &form.0;
    let default_category_id = current.category_fallback(post_state.ready());
    let title_invalid = current.violation_for(Field::Title).is_some();
    let content_invalid = current.violation_for(Field::Content).is_some();
    let category_invalid = current.violation_for(Field::CategoryId).is_some();

    html! {
        <main class={classes!("container", "max-w-2xl", "mx-auto", "px-4", "py-10")}>
            if post_state.is_loading() {
                <LoadingSpinner placement={Placement::Overlay} label={t::LOADING_POST} />
            }
            <section class={classes!("mb-8")}>
                <p class={classes!(
                    "text-sm",
                    "tracking-[0.3em]",
                    "uppercase",
                    "text-[var(--muted)]",
                    "font-semibold"
                )}>{ t::KICKER }</p>
                <h1 class={classes!("text-3xl", "font-bold", "mt-2")}>
                    { fill_one(t::TITLE_TEMPLATE, post_id) }
                </h1>
            </section>

            <form class={classes!("space-y-6")} onsubmit={onsubmit} novalidate={true}>
                <label class={classes!("block", "text-sm", "font-medium")}>
                    { t::TITLE_LABEL }
                    <input
                        type="text"
                        class={input_classes(title_invalid)}
                        placeholder={t::TITLE_PLACEHOLDER}
                        value={current.draft().title.clone()}
                        oninput={on_title_input}
                        aria-invalid={title_invalid.to_string()}
                    />
                    { field_error(current, Field::Title) }
                </label>

                <label class={classes!("block", "text-sm", "font-medium")}>
                    <span class={classes!("flex", "items-center", "justify-between")}>
                        { t::CONTENT_LABEL }
                        <CharCounter count={current.char_count()} />
                    </span>
                    <textarea
                        rows="8"
                        class={input_classes(content_invalid)}
                        placeholder={t::CONTENT_PLACEHOLDER}
                        value={current.draft().content.clone()}
                        oninput={on_content_input}
                        aria-invalid={content_invalid.to_string()}
                    />
                    { field_error(current, Field::Content) }
                </label>

                <label class={classes!("block", "text-sm", "font-medium")}>
                    { t::CATEGORY_LABEL }
                    <CategoryPicker
                        value={current.draft().category_id.clone()}
                        default_category_id={default_category_id}
                        on_change={on_category_change}
                        invalid={category_invalid}
                    />
                    { field_error(current, Field::CategoryId) }
                </label>

                <div class={classes!("flex", "items-center", "justify-between", "gap-4")}>
                    <Link<Route> to={Route::Posts} classes={classes!("text-sm", "text-[var(--muted)]", "hover:underline")}>
                        { t::BACK }
                    </Link<Route>>
                    <button type="submit" class={classes!("btn-fluent-primary")} disabled={*submitting}>
                        { if *submitting { t::SUBMITTING } else { t::SUBMIT } }
                    </button>
                </div>
            </form>
        </main>
    }
}

