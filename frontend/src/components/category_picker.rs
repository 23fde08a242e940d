use post_editor_shared::Category;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{current::category_picker as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
    /// Current value of the `categoryId` field.
    pub value: String,
    /// Category of the loaded post, selected while the field is still empty.
    #[prop_or_default]
    pub default_category_id: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub invalid: bool,
}

#[function_component(CategoryPicker)]
pub fn category_picker(props: &CategoryPickerProps) -> Html {
    let categories = use_state(Vec::<Category>::new);

    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_categories().await {
                    Ok(data) => categories.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch categories: {}", e).into(),
                        );
                    },
                }
            });
            || ()
        });
    }

    let selected = if props.value.is_empty() {
        props.default_category_id.clone()
    } else {
        props.value.clone()
    };

    // Keep the bound id selectable even before (or without) the category list.
    let known = categories.iter().any(|c| c.id.to_string() == selected);

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(target.value());
            }
        })
    };

    let mut select_classes = classes!(
        "mt-1",
        "w-full",
        "rounded-lg",
        "border",
        "px-3",
        "py-2",
        "bg-[var(--surface)]",
        "text-[var(--text)]"
    );
    select_classes.push(if props.invalid { "border-red-500" } else { "border-[var(--border)]" });

    html! {
        <select class={select_classes} onchange={onchange} aria-invalid={props.invalid.to_string()}>
            <option value="" disabled=true selected={selected.is_empty()}>{ t::PLACEHOLDER }</option>
            {
                if !known && !selected.is_empty() {
                    html! {
                        <option value={selected.clone()} selected=true>
                            { fill_one(t::UNKNOWN_TEMPLATE, &selected) }
                        </option>
                    }
                } else {
                    Html::default()
                }
            }
            { for categories.iter().map(|category| {
                let id = category.id.to_string();
                let is_selected = id == selected;
                html! {
                    <option value={id} selected={is_selected}>{ &category.name }</option>
                }
            }) }
        </select>
    }
}
