use leptos::prelude::*;

use crate::core::site::QUICK_ACTIONS;
use crate::ui::icon::{Icon, icons};

/// Expandable quick-action menu in the bottom-right corner
#[component]
pub fn FloatingAction() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="fixed bottom-6 right-6 z-40 flex flex-col items-end gap-3">
            <div class=move || {
                if is_open.get() {
                    "flex flex-col items-end gap-3 transition-all duration-300 opacity-100 translate-y-0"
                } else {
                    "flex flex-col items-end gap-3 transition-all duration-300 opacity-0 translate-y-4 pointer-events-none"
                }
            }>
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        view! {
                            <a
                                href=action.href
                                on:click=move |_| set_is_open.set(false)
                                class="flex items-center gap-3 group"
                            >
                                <span class="px-3 py-1 rounded-md bg-gray-900/80 text-white text-sm whitespace-nowrap">
                                    {action.label}
                                </span>
                                <span class=format!(
                                    "w-11 h-11 rounded-full shadow-lg flex items-center justify-center transition-colors {}",
                                    action.tone,
                                )>
                                    <Icon name=action.icon class="w-5 h-5"/>
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                type="button"
                aria-label=move || if is_open.get() { "Close quick actions" } else { "Open quick actions" }
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                class=move || {
                    if is_open.get() {
                        "w-14 h-14 rounded-full shadow-xl flex items-center justify-center transition-all duration-300 bg-red-500 hover:bg-red-600 rotate-180"
                    } else {
                        "w-14 h-14 rounded-full shadow-xl flex items-center justify-center transition-all duration-300 bg-orange-500 hover:bg-orange-600"
                    }
                }
            >
                {move || {
                    if is_open.get() {
                        view! { <Icon name=icons::CHEVRON_UP class="w-6 h-6"/> }
                    } else {
                        view! { <Icon name=icons::MUSIC class="w-6 h-6"/> }
                    }
                }}
            </button>
        </div>
    }
}
