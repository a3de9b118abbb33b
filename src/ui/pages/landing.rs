//! Landing page component
//!
//! A single scrolling page for Bedroom Producers featuring:
//! - SEO meta tags
//! - Hero with rotating benefit phrases and the two main calls to action
//! - About, process and feature sections
//! - Newsletter signup and the weekly accountability prompt
//! - Community testimonials
//! - Track submission form
//! - Latest posts from the blog

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::latest_posts;
use crate::core::site::{
    self, Blurb, FEATURES, FEEDBACK_OPTIONS, LATEST_POSTS_ON_LANDING, PROCESS_STEPS, SITE_TAGLINE,
    TESTIMONIALS, WEEKLY_GOALS, sections,
};
use crate::ui::common::RotatingText;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::blog::PostGrid;
use crate::ui::seo::PageMeta;

const INPUT_CLASS: &str = "w-full rounded-lg border border-zinc-300 bg-white px-4 py-3 text-zinc-900 \
     placeholder:text-zinc-400 focus:border-orange-500 focus:outline-none focus:ring-2 \
     focus:ring-orange-500/30 dark:border-zinc-700 dark:bg-zinc-900 dark:text-zinc-100";

const PRIMARY_BUTTON_CLASS: &str = "inline-flex items-center justify-center gap-2 rounded-lg \
     bg-orange-500 px-6 py-3 font-semibold text-white shadow-sm transition-colors \
     hover:bg-orange-600 focus:outline-none focus:ring-2 focus:ring-orange-500/50";

const SECONDARY_BUTTON_CLASS: &str = "inline-flex items-center justify-center gap-2 rounded-lg \
     border border-zinc-300 px-6 py-3 font-semibold text-zinc-800 transition-colors \
     hover:border-orange-500 hover:text-orange-600 dark:border-zinc-700 dark:text-zinc-100";

/// Landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PageMeta title=site::SITE_NAME description=SITE_TAGLINE path="/" />

        <div class="overflow-x-hidden">
            <Hero />
            <About />
            <Process />
            <Features />
            <Newsletter />
            <Accountability />
            <Testimonials />
            <SubmitTrack />
            <LatestContent />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative flex min-h-[80vh] items-center justify-center px-4 py-24
                        bg-gradient-to-b from-orange-50 to-white dark:from-zinc-900 dark:to-zinc-950">
            <div class="mx-auto max-w-4xl text-center">
                <h1 class="mb-6 text-4xl font-extrabold tracking-tight sm:text-6xl">
                    "Make Music. Finish More. Stay Real. 🎧"
                </h1>
                <p class="mx-auto mb-8 max-w-2xl text-lg text-zinc-600 sm:text-xl dark:text-zinc-300">
                    "For producers who started in their bedroom and stuck with it. "
                    "Submit tracks. Grab tools. Stay on track. No fluff, just focus."
                </p>

                <div class="mb-10 h-10 text-2xl font-semibold text-orange-600 sm:text-3xl dark:text-orange-400">
                    <RotatingText items=site::hero_phrases() />
                </div>

                <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <a href=format!("#{}", sections::SUBMIT) class=PRIMARY_BUTTON_CLASS>
                        <Icon name=icons::MUSIC class="w-5 h-5" />
                        "Submit Your Track"
                    </a>
                    <a href=format!("#{}", sections::CONTENT) class=SECONDARY_BUTTON_CLASS>
                        "Browse Free Tools"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="reveal px-4 py-20">
            <div class="mx-auto max-w-3xl">
                <SectionHeading title="🤔 Built For Bedroom Producers — By One" />
                <div class="space-y-4 text-lg leading-relaxed text-zinc-700 dark:text-zinc-300">
                    <p>
                        "This isn’t a course. It’s not a label selling you a dream. It’s a home for people \
                         still learning, still overthinking drops, still wondering if their kick is too loud. \
                         If you're still tweaking, still trying to finish the damn track, this place gets it."
                    </p>
                    <p>
                        "I’ve made music for years – some did numbers, some didn’t. I’m still here. \
                         Still learning. If you relate, this space is yours too. No gatekeeping, just shared progress."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Process() -> impl IntoView {
    view! {
        <section class="reveal bg-zinc-50 px-4 py-20 dark:bg-zinc-900">
            <div class="mx-auto max-w-5xl">
                <SectionHeading title="⚙️ Simple Process" />
                <ol class="grid gap-6 md:grid-cols-3">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class="rounded-xl bg-white p-6 shadow-sm dark:bg-zinc-800">
                                    <span class="mb-3 inline-flex h-10 w-10 items-center justify-center
                                                 rounded-full bg-orange-500 font-bold text-white">
                                        {i + 1}
                                    </span>
                                    <BlurbBody blurb=step />
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="reveal px-4 py-20">
            <div class="mx-auto max-w-5xl">
                <SectionHeading title="✨ What You’ll Find Inside" />
                <ul class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex gap-3 rounded-xl border border-zinc-200 p-5 dark:border-zinc-800">
                                    <span aria-hidden="true">"✅"</span>
                                    <div>
                                        <BlurbBody blurb=feature />
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <section
            id=sections::NEWSLETTER
            class="reveal scroll-mt-20 bg-orange-500 px-4 py-20 text-white"
        >
            <div class="mx-auto max-w-2xl text-center">
                <h2 class="mb-4 text-3xl font-bold">"📬 One Email. Once a Month. That's It."</h2>
                <p class="mb-8 text-lg text-orange-50">
                    "Get one tip worth reading, one free resource worth using, and one small win from \
                     the Bedroom Producers crew. No spam, ever. Straight to your inbox."
                </p>
                <form class="flex flex-col gap-3 sm:flex-row" on:submit=|ev| ev.prevent_default()>
                    <label for="newsletter-email" class="sr-only">"Email address"</label>
                    <input
                        id="newsletter-email"
                        type="email"
                        name="email"
                        required=true
                        placeholder="you@email.com"
                        class="flex-1 rounded-lg px-4 py-3 text-zinc-900 focus:outline-none focus:ring-2 focus:ring-white"
                    />
                    <button
                        type="submit"
                        class="rounded-lg bg-zinc-900 px-6 py-3 font-semibold text-white transition-colors hover:bg-zinc-800"
                    >
                        "Join the Newsletter"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Accountability() -> impl IntoView {
    view! {
        <section class="reveal px-4 py-20">
            <div class="mx-auto max-w-3xl">
                <SectionHeading title="🎯 Finished is Better Than Perfect." />
                <p class="mb-6 text-lg text-zinc-700 dark:text-zinc-300">
                    "Momentum matters. Every week, challenge yourself to set one small, achievable goal \
                     using our simple tracker (coming soon!):"
                </p>
                <ul class="mb-6 space-y-2">
                    {WEEKLY_GOALS
                        .iter()
                        .map(|goal| {
                            view! {
                                <li class="flex items-start gap-2 text-zinc-800 dark:text-zinc-200">
                                    <span class="text-orange-500" aria-hidden="true">"→"</span>
                                    {*goal}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="mb-8 text-zinc-600 dark:text-zinc-400">
                    "Track your progress privately or share it for encouragement. \
                     Small steps add up — this space helps you take them."
                </p>
                <button type="button" class=PRIMARY_BUTTON_CLASS disabled=true title="Coming soon">
                    "Set My Weekly Goal"
                </button>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="reveal bg-zinc-50 px-4 py-20 dark:bg-zinc-900">
            <div class="mx-auto max-w-5xl">
                <SectionHeading title="💬 From the Community" />
                <div class="grid gap-6 md:grid-cols-3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="rounded-xl bg-white p-6 shadow-sm dark:bg-zinc-800">
                                    <blockquote class="mb-4 italic text-zinc-700 dark:text-zinc-300">
                                        {format!("“{}”", t.quote)}
                                    </blockquote>
                                    <figcaption class="text-sm font-semibold text-orange-600 dark:text-orange-400">
                                        {format!("— {}", t.author)}
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SubmitTrack() -> impl IntoView {
    view! {
        <section id=sections::SUBMIT class="reveal scroll-mt-20 px-4 py-20">
            <div class="mx-auto max-w-2xl">
                <SectionHeading title="🚀 Submit Your Track — Get Real Feedback" />
                <p class="mb-8 text-center text-lg text-zinc-700 dark:text-zinc-300">
                    "No gatekeeping. No waiting list. Just direct, clear feedback from someone who gets it. \
                     Upload your link, tell me what you need help with."
                </p>

                <form class="space-y-5" on:submit=|ev| ev.prevent_default()>
                    <FormField label="Name" id="submit-name">
                        <input id="submit-name" type="text" name="name" required=true
                            placeholder="Your Name" class=INPUT_CLASS />
                    </FormField>

                    <FormField label="Track Link" id="submit-link">
                        <input id="submit-link" type="url" name="track_link" required=true
                            placeholder="SoundCloud / Dropbox / Google Drive Link" class=INPUT_CLASS />
                    </FormField>

                    <FormField label="Type of Feedback Needed" id="submit-feedback">
                        <select id="submit-feedback" name="feedback_type" required=true class=INPUT_CLASS>
                            <option value="" disabled=true selected=true>"Select Feedback Focus..."</option>
                            {FEEDBACK_OPTIONS
                                .iter()
                                .map(|option| view! { <option value=option.value>{option.label}</option> })
                                .collect_view()}
                        </select>
                    </FormField>

                    <FormField label="Specific Questions or Notes (Optional)" id="submit-notes">
                        <textarea id="submit-notes" name="notes" rows="4" class=INPUT_CLASS
                            placeholder="e.g., 'Is the kick too loud?', 'How can I improve the drop?'"
                        ></textarea>
                    </FormField>

                    <label for="feature-ok" class="flex items-start gap-3 text-sm text-zinc-600 dark:text-zinc-400">
                        <input id="feature-ok" type="checkbox" name="feature_ok"
                            class="mt-1 h-4 w-4 accent-orange-500" />
                        "It's OK to potentially feature parts of this track/feedback (anonymously if preferred) \
                         as learning content for the community."
                    </label>

                    <button type="submit" class=format!("{PRIMARY_BUTTON_CLASS} w-full")>
                        "Submit Track for Feedback"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn LatestContent() -> impl IntoView {
    let posts = latest_posts(LATEST_POSTS_ON_LANDING);

    view! {
        <section
            id=sections::CONTENT
            class="reveal scroll-mt-20 bg-zinc-50 px-4 py-20 dark:bg-zinc-900"
        >
            <div class="mx-auto max-w-6xl">
                <SectionHeading title="📚 New Stuff On the Site" />
                <p class="mb-10 text-center text-lg text-zinc-600 dark:text-zinc-400">
                    "Fresh resources and insights added regularly. Grab what you need."
                </p>

                <PostGrid posts=posts />

                <div class="mt-12 flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <A href="/blog" attr:class=PRIMARY_BUTTON_CLASS>
                        "See All Posts & Guides"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 brightness-0 invert" />
                    </A>
                    <A href="/blog" attr:class=SECONDARY_BUTTON_CLASS>
                        "Browse All Free Resources"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! { <h2 class="mb-8 text-center text-3xl font-bold sm:text-4xl">{title}</h2> }
}

#[component]
fn BlurbBody(blurb: &'static Blurb) -> impl IntoView {
    view! {
        <h3 class="mb-2 text-lg font-semibold">{blurb.title}</h3>
        <p class="text-zinc-600 dark:text-zinc-400">{blurb.body}</p>
    }
}

#[component]
fn FormField(label: &'static str, id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label for=id class="mb-2 block text-sm font-medium text-zinc-700 dark:text-zinc-300">
                {label}
            </label>
            {children()}
        </div>
    }
}
