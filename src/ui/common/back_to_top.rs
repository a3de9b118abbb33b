use leptos::prelude::*;

use crate::core::scroll::BACK_TO_TOP_THRESHOLD_PX;
use crate::ui::hooks::use_scroll_state;
use crate::ui::icon::{Icon, icons};

/// Round button that appears once the page is scrolled down
#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll_state(BACK_TO_TOP_THRESHOLD_PX);

    let on_click = move |_| {
        #[cfg(not(feature = "ssr"))]
        crate::ui::browser::scroll_to_top();
    };

    view! {
        <button
            type="button"
            aria-label="Back to top"
            on:click=on_click
            class=move || {
                let base = "fixed bottom-6 left-6 z-40 w-12 h-12 rounded-full bg-orange-500 hover:bg-orange-600 shadow-lg flex items-center justify-center transition-all duration-300";
                if scroll.past_threshold.get() {
                    format!("{base} opacity-100 translate-y-0")
                } else {
                    format!("{base} opacity-0 translate-y-4 pointer-events-none")
                }
            }
        >
            <Icon name=icons::ARROW_UP class="w-5 h-5"/>
        </button>
    }
}
