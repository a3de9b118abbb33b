use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::scroll::HEADER_SCROLL_THRESHOLD_PX;
use crate::core::site::{HEADER_LINKS, SITE_NAME};
use crate::ui::hooks::use_scroll_state;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, use_theme_context};

const DESKTOP_LINK_CLASS: &str = "text-sm font-medium text-zinc-600 dark:text-zinc-400 hover:text-black dark:hover:text-white transition-colors";
const MOBILE_LINK_CLASS: &str = "block text-lg font-medium text-zinc-700 dark:text-zinc-300 hover:text-black dark:hover:text-white transition-colors";
const ICON_BUTTON_CLASS: &str = "p-2 rounded-md hover:bg-zinc-100 dark:hover:bg-zinc-800 transition-colors";

/// Sticky site header with desktop nav, theme toggle and mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme_context();
    let scroll = use_scroll_state(HEADER_SCROLL_THRESHOLD_PX);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let close_menu = move |_| set_mobile_menu_open.set(false);

    // Close the mobile menu whenever the rendered theme flips
    Effect::new(move |previous: Option<bool>| {
        let is_dark = theme.is_dark.get();
        if previous.is_some_and(|was_dark| was_dark != is_dark) {
            set_mobile_menu_open.set(false);
        }
        is_dark
    });

    view! {
        <header class=move || {
            let base = "sticky top-0 z-50 w-full border-b backdrop-blur-md transition-all duration-300";
            if scroll.past_threshold.get() {
                format!("{base} bg-white/95 dark:bg-zinc-950/95 border-zinc-200 dark:border-zinc-800 shadow-md")
            } else {
                format!("{base} bg-white/80 dark:bg-zinc-950/80 border-zinc-200/60 dark:border-zinc-800/60")
            }
        }>
            <div class="container mx-auto px-6 md:px-12 lg:px-24">
                <div class="flex h-16 items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-2" attr:aria-label="Back to homepage">
                        <Icon name=icons::LOGO class="w-7 h-7"/>
                        <span class="font-semibold text-lg text-black dark:text-white hover:text-zinc-700 dark:hover:text-zinc-300 transition-colors">
                            {SITE_NAME}
                        </span>
                    </A>

                    <nav class="hidden md:flex items-center">
                        <ul class="flex items-center space-x-6">
                            {HEADER_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.href class=DESKTOP_LINK_CLASS>{link.label}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>

                    <div class="flex items-center gap-3">
                        <ThemeToggle theme=theme/>
                        <button
                            type="button"
                            class=format!("{ICON_BUTTON_CLASS} md:hidden")
                            on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || mobile_menu_open.get().to_string()
                        >
                            {move || {
                                if mobile_menu_open.get() {
                                    view! { <Icon name=icons::X class="w-5 h-5"/> }
                                } else {
                                    view! { <Icon name=icons::MENU class="w-5 h-5"/> }
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </header>

        // Mobile menu overlay
        <div
            class=move || {
                if mobile_menu_open.get() {
                    "fixed inset-0 z-40 bg-black/50 backdrop-blur-sm md:hidden transition-opacity duration-300 opacity-100"
                } else {
                    "fixed inset-0 z-40 bg-black/50 backdrop-blur-sm md:hidden transition-opacity duration-300 opacity-0 pointer-events-none"
                }
            }
            on:click=close_menu
            aria-hidden=move || (!mobile_menu_open.get()).to_string()
        >
            <div
                class=move || {
                    let base = "fixed top-0 right-0 h-full w-4/5 max-w-xs bg-white dark:bg-zinc-900 shadow-xl transform transition-transform duration-300";
                    if mobile_menu_open.get() {
                        format!("{base} translate-x-0")
                    } else {
                        format!("{base} translate-x-full")
                    }
                }
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-end p-4 border-b border-zinc-200 dark:border-zinc-800">
                    <button
                        type="button"
                        class=ICON_BUTTON_CLASS
                        on:click=close_menu
                        aria-label="Close mobile menu"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>
                <nav class="p-6">
                    <ul class="space-y-4">
                        <li>
                            <a href="/" class=MOBILE_LINK_CLASS on:click=close_menu>"Home"</a>
                        </li>
                        {HEADER_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.href class=MOBILE_LINK_CLASS on:click=close_menu>
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </div>
    }
}

/// Button switching between dark and light
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            type="button"
            class=ICON_BUTTON_CLASS
            on:click=move |_| theme.toggle()
            aria-label=move || {
                if theme.is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            }
        >
            {move || {
                if theme.is_dark.get() {
                    view! { <Icon name=icons::SUN class="w-5 h-5"/> }
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5"/> }
                }
            }}
        </button>
    }
}
