use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::site::{FOOTER_BLURB, FOOTER_LINKS, SITE_NAME, SOCIAL_LINKS, sections};
use crate::ui::icon::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = chrono::Local::now().year();

    view! {
        <footer class="bg-zinc-900 dark:bg-black text-zinc-300 pt-12 pb-8">
            <div class="container mx-auto px-6 md:px-12 lg:px-24">
                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-2">
                        <A href="/" attr:class="inline-block text-xl font-semibold text-white mb-3 hover:text-zinc-200 transition-colors">
                            {SITE_NAME}
                        </A>
                        <p class="text-sm text-zinc-400 mb-4 max-w-sm">{FOOTER_BLURB}</p>
                        <p class="text-xs text-zinc-500">
                            {format!("© {current_year} {SITE_NAME}. All Rights Reserved.")}
                        </p>
                    </div>

                    <div>
                        <h5 class="text-sm font-semibold text-white uppercase tracking-wider mb-3">"Quick Links"</h5>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.href class="text-sm text-zinc-400 hover:text-white transition-colors">
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div id=sections::CONTACT>
                        <h5 class="text-sm font-semibold text-white uppercase tracking-wider mb-3">"Connect"</h5>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class="opacity-70 hover:opacity-100 transition-opacity brightness-0 invert"
                                        >
                                            <Icon name=social.icon class="w-5 h-5"/>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
