use std::time::Duration;

use leptos::prelude::*;

use crate::core::rotation::{HERO_ROTATION_PERIOD, RotationItem};
use crate::ui::hooks::use_rotation;

/// Cycles through `items`, one at a time, with an enter transition per change
#[component]
pub fn RotatingText(
    items: Vec<RotationItem>,
    #[prop(default = HERO_ROTATION_PERIOD)] period: Duration,
    /// Classes for the text line
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let rotation = use_rotation(items, period);

    view! {
        <span class="inline-block relative" aria-live="polite">
            <For
                each=move || rotation.current.get().map(|item| (rotation.index.get(), item))
                key=|(index, _)| *index
                children=move |(_, item)| {
                    view! {
                        <span class=format!("rotating-text-item inline-flex items-center gap-2 {class}")>
                            <span>{item.text}</span>
                            <span aria-hidden="true">{item.emoji}</span>
                        </span>
                    }
                }
            />
        </span>
    }
}
