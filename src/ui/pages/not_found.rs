//! Not found page component
//!
//! A 404 error page displayed for unknown routes and missing posts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::seo::PageMeta;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <PageMeta
            title="Page Not Found"
            description="The page you're looking for doesn't exist or has been moved."
            path="/404"
        />

        <div class="flex min-h-[70vh] flex-col items-center justify-center px-4 text-center">
            <div class="mb-6 text-7xl" aria-hidden="true">"🎛️"</div>
            <h1 class="mb-4 text-6xl font-bold">"404"</h1>
            <h2 class="mb-2 text-2xl font-semibold">"This track doesn't exist"</h2>
            <p class="mx-auto mb-8 max-w-md text-zinc-600 dark:text-zinc-400">
                "The page you're looking for doesn't exist or has been moved."
            </p>

            <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                <A
                    href="/"
                    attr:class="rounded-lg bg-orange-500 px-6 py-3 font-semibold text-white transition-colors hover:bg-orange-600"
                >
                    "Go Home"
                </A>
                <A
                    href="/blog"
                    attr:class="rounded-lg border border-zinc-300 px-6 py-3 font-semibold transition-colors
                                hover:border-orange-500 dark:border-zinc-700"
                >
                    "Read the Blog"
                </A>
            </div>
        </div>
    }
}
