//! Single blog post page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::content::{Cover, Post, find_post};
use crate::core::site::sections;
use crate::ui::common::{Skeleton, SkeletonAnimation};
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;
use crate::ui::pages::NotFoundPage;
use crate::ui::seo::PageMeta;

/// Post looked up from the `:slug` route parameter
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match find_post(&slug()) {
        Ok(Some(post)) => view! { <PostArticle post=post /> }.into_any(),
        Ok(None) => view! { <NotFoundPage /> }.into_any(),
        Err(err) => {
            tracing::error!("failed to load post {}: {err}", slug());
            view! {
                <div class="mx-auto max-w-2xl px-4 py-24 text-center" role="alert">
                    <h1 class="mb-4 text-3xl font-bold">"This post couldn't be loaded"</h1>
                    <p class="mb-8 text-zinc-600 dark:text-zinc-400">
                        "Something went wrong on our side. Try again later."
                    </p>
                    <A href="/blog" attr:class="font-semibold text-orange-600 hover:underline">
                        "← Back to Blog"
                    </A>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn PostArticle(post: Post) -> impl IntoView {
    let category = post.meta.category;
    let badge_class = format!(
        "inline-flex items-center gap-1 rounded-full px-3 py-1 text-xs font-semibold {}",
        post.meta.accent.badge_class()
    );
    let date = post.date_label();
    let reading_time = post.reading_time_label();
    let image = post.meta.cover.as_ref().map(|cover| cover.src.clone());

    view! {
        <PageMeta
            title=post.meta.title.clone()
            description=post.meta.description.clone()
            path=post.href()
            og_type="article"
            image=image
        />

        <article class="mx-auto max-w-3xl px-4 py-16">
            <A
                href="/blog"
                attr:class="mb-8 inline-flex items-center gap-2 text-sm font-medium text-zinc-500
                            hover:text-orange-600 dark:hover:text-orange-400"
            >
                <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                "Back to Blog"
            </A>

            <header class="mb-10">
                <span class=badge_class>
                    <span aria-hidden="true">{category.emoji()}</span>
                    {category.label()}
                </span>
                <h1 class="mt-4 mb-4 text-4xl font-extrabold leading-tight tracking-tight sm:text-5xl">
                    {post.meta.title}
                </h1>
                <p class="mb-4 text-lg text-zinc-600 dark:text-zinc-400">{post.meta.description}</p>
                <div class="flex items-center gap-4 text-sm text-zinc-500">
                    <span class="inline-flex items-center gap-1">
                        <Icon name=icons::CALENDAR class="w-4 h-4" />
                        <time datetime=date.clone()>{date.clone()}</time>
                    </span>
                    <span aria-hidden="true">"·"</span>
                    <span class="inline-flex items-center gap-1">
                        <Icon name=icons::CLOCK class="w-4 h-4" />
                        {reading_time}
                    </span>
                </div>
            </header>

            {post.meta.cover.map(|cover| view! { <CoverFigure cover=cover /> })}

            <Markdown content=post.body />

            <footer class="mt-16 flex flex-col gap-4 border-t border-zinc-200 pt-8 sm:flex-row
                           sm:items-center sm:justify-between dark:border-zinc-800">
                <A href="/blog" attr:class="font-semibold text-orange-600 hover:underline dark:text-orange-400">
                    "← More posts"
                </A>
                <a
                    href=format!("/#{}", sections::SUBMIT)
                    class="inline-flex items-center gap-2 rounded-lg bg-orange-500 px-5 py-2.5
                           font-semibold text-white transition-colors hover:bg-orange-600"
                >
                    <Icon name=icons::MUSIC class="w-5 h-5" />
                    "Get Feedback on Your Track"
                </a>
            </footer>
        </article>
    }
}

/// Cover image with a skeleton overlay until the image has loaded
#[component]
fn CoverFigure(cover: Cover) -> impl IntoView {
    let loaded = RwSignal::new(false);
    let image_ref = NodeRef::<leptos::html::Img>::new();

    // The server-rendered image may finish loading before hydration attaches on:load
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if image_ref.get().is_some_and(|img| img.complete()) {
            loaded.set(true);
        }
    });

    view! {
        <figure class="mb-10">
            <div class="relative aspect-[1200/630] overflow-hidden rounded-xl">
                <Show when=move || !loaded.get()>
                    <Skeleton animation=SkeletonAnimation::Wave class="absolute inset-0 h-full w-full" />
                </Show>
                <img
                    node_ref=image_ref
                    src=cover.src
                    alt=cover.alt
                    class="h-full w-full object-cover transition-opacity duration-500"
                    class=("opacity-0", move || !loaded.get())
                    on:load=move |_| loaded.set(true)
                    on:error=move |_| loaded.set(true)
                />
            </div>
            {cover.caption.map(|caption| {
                view! {
                    <figcaption class="mt-2 text-center text-sm text-zinc-500 dark:text-zinc-400">
                        {caption}
                    </figcaption>
                }
            })}
        </figure>
    }
}
