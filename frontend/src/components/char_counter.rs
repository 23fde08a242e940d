use post_editor_shared::{counter_view, CounterTier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CharCounterProps {
    pub count: usize,
}

fn tier_classes(tier: CounterTier) -> Classes {
    match tier {
        CounterTier::Alert => classes!("text-red-600", "dark:text-red-400", "font-semibold"),
        CounterTier::Warning => classes!("text-amber-600", "dark:text-amber-300"),
        CounterTier::Neutral => classes!("text-[var(--muted)]"),
    }
}

#[function_component(CharCounter)]
pub fn char_counter(props: &CharCounterProps) -> Html {
    let Some(view) = counter_view(props.count) else {
        return Html::default();
    };

    html! {
        <span class={classes!("text-xs", "tabular-nums", tier_classes(view.tier))} aria-live="polite">
            { view.label }
        </span>
    }
}
