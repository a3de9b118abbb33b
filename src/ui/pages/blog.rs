//! Blog index page and the post card shared with the landing page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{ContentError, Post, load_posts};
use crate::core::site::sections;
use crate::ui::icon::{Icon, icons};
use crate::ui::seo::PageMeta;

const BLOG_DESCRIPTION: &str = "Practical tips, templates, and insights to help you finish more \
     tracks and level up your production game.";

/// Listing of every post, featured first
#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let posts = load_posts().map(<[Post]>::to_vec);

    view! {
        <PageMeta title="Producer Blog" description=BLOG_DESCRIPTION path="/blog" />

        <section class="bg-gradient-to-b from-orange-50 to-white px-4 py-20 text-center
                        dark:from-zinc-900 dark:to-zinc-950">
            <div class="mx-auto max-w-3xl">
                <h1 class="mb-4 text-4xl font-extrabold tracking-tight sm:text-5xl">
                    "Producer Blog 📝"
                </h1>
                <p class="text-lg text-zinc-600 sm:text-xl dark:text-zinc-300">{BLOG_DESCRIPTION}</p>
            </div>
        </section>

        <section class="px-4 py-16">
            <div class="mx-auto max-w-6xl">
                <PostGrid posts=posts />
            </div>
        </section>

        <section class="reveal bg-orange-500 px-4 py-16 text-center text-white">
            <div class="mx-auto max-w-2xl">
                <h2 class="mb-4 text-3xl font-bold">"Want More Content Like This?"</h2>
                <p class="mb-8 text-lg text-orange-50">
                    "Join the newsletter for one tip, one free resource and one small win each month."
                </p>
                <a
                    href=format!("/#{}", sections::NEWSLETTER)
                    class="inline-flex items-center gap-2 rounded-lg bg-zinc-900 px-6 py-3 font-semibold
                           text-white transition-colors hover:bg-zinc-800"
                >
                    "Join the Newsletter"
                    <Icon name=icons::ARROW_RIGHT class="w-5 h-5 brightness-0 invert" />
                </a>
            </div>
        </section>
    }
}

/// Summary card linking to a post
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = post.href();
    let category = post.meta.category;
    let badge_class = format!(
        "inline-flex items-center gap-1 rounded-full px-3 py-1 text-xs font-semibold {}",
        post.meta.accent.badge_class()
    );
    let reading_time = post.reading_time_label();
    let date = post.date_label();
    let featured = post.meta.featured;

    let media = match post.meta.cover {
        Some(cover) => view! {
            <img
                src=cover.src
                alt=cover.alt
                loading="lazy"
                class="h-48 w-full object-cover transition-transform duration-300 group-hover:scale-105"
            />
        }
        .into_any(),
        None => view! {
            <div
                class="flex h-48 w-full items-center justify-center bg-gradient-to-br
                       from-orange-100 to-amber-50 text-6xl dark:from-zinc-800 dark:to-zinc-900"
                aria-hidden="true"
            >
                {category.emoji()}
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="group flex flex-col overflow-hidden rounded-xl border border-zinc-200 bg-white
                        shadow-sm transition-shadow hover:shadow-lg dark:border-zinc-800 dark:bg-zinc-900">
            <A href=href.clone() attr:class="block overflow-hidden" attr:tabindex="-1">
                {media}
            </A>
            <div class="flex flex-1 flex-col p-6">
                <div class="mb-3 flex flex-wrap items-center gap-2">
                    <span class=badge_class>
                        <span aria-hidden="true">{category.emoji()}</span>
                        {category.label()}
                    </span>
                    <Show when=move || featured>
                        <span class="rounded-full bg-zinc-900 px-3 py-1 text-xs font-bold tracking-wide
                                     text-white dark:bg-white dark:text-zinc-900">
                            "FEATURED"
                        </span>
                    </Show>
                </div>

                <h3 class="mb-2 text-xl font-bold leading-snug">
                    <A href=href.clone() attr:class="hover:text-orange-600 dark:hover:text-orange-400">
                        {post.meta.title}
                    </A>
                </h3>
                <p class="mb-4 flex-1 text-zinc-600 dark:text-zinc-400">{post.meta.description}</p>

                <div class="mb-4 flex items-center gap-4 text-sm text-zinc-500">
                    <span class="inline-flex items-center gap-1">
                        <Icon name=icons::CALENDAR class="w-4 h-4" />
                        <time datetime=date.clone()>{date.clone()}</time>
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <Icon name=icons::CLOCK class="w-4 h-4" />
                        {reading_time}
                    </span>
                </div>

                <A
                    href=href
                    attr:class="inline-flex items-center gap-1 font-semibold text-orange-600
                                hover:text-orange-700 dark:text-orange-400"
                >
                    "Read Article →"
                </A>
            </div>
        </article>
    }
}

/// Card grid for a post listing, or a notice when the posts failed to load
#[component]
pub(crate) fn PostGrid(posts: Result<Vec<Post>, &'static ContentError>) -> impl IntoView {
    match posts {
        Ok(posts) if posts.is_empty() => view! {
            <p class="text-center text-zinc-500">"No posts yet. Check back soon."</p>
        }
        .into_any(),
        Ok(posts) => view! {
            <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
            </div>
        }
        .into_any(),
        Err(err) => {
            tracing::error!("failed to load posts: {err}");
            view! {
                <p class="text-center text-red-600 dark:text-red-400" role="alert">
                    "Posts are unavailable right now."
                </p>
            }
            .into_any()
        }
    }
}
