use leptos::prelude::*;

use crate::ui::hooks::use_scroll_state;

/// Thin bar across the top of the viewport showing how far the page is read
#[component]
pub fn ScrollProgress() -> impl IntoView {
    // Only the progress is used; any threshold works
    let scroll = use_scroll_state(0.0);

    view! {
        <div class="fixed top-0 left-0 right-0 h-1 z-[60] pointer-events-none" aria-hidden="true">
            <div
                class="h-full origin-left bg-gradient-to-r from-orange-500 to-red-500 transition-transform duration-150 ease-out"
                style:transform=move || format!("scaleX({})", scroll.progress.get() / 100.0)
            ></div>
        </div>
    }
}
