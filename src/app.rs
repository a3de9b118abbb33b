use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::chrome::{Footer, Header};
use crate::ui::common::{BackToTop, FloatingAction, RevealScript, ScrollProgress};
use crate::ui::pages::{BlogIndexPage, BlogPostPage, LandingPage, NotFoundPage};
use crate::ui::theme::{ThemeScript, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/icons/logo.svg"/>
                // Must run before first paint
                <ThemeScript/>
                <RevealScript/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_theme_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bedroom-producers.css"/>

        <Router>
            <ScrollProgress/>
            <Header/>

            <main id="main" class="min-h-screen">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/blog") view=BlogIndexPage/>
                    <Route path=path!("/blog/:slug") view=BlogPostPage/>
                </Routes>
            </main>

            <Footer/>
            <BackToTop/>
            <FloatingAction/>
        </Router>
    }
}
