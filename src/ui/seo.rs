//! Per-page `<head>` tags

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::site::{SITE_NAME, SiteUrl};

/// Title, description, canonical link and Open Graph / Twitter tags.
///
/// Absolute URLs are built from the [`SiteUrl`] in context, falling back to
/// the default origin when none was provided.
#[component]
pub fn PageMeta(
    /// Page title without the site name
    #[prop(into)]
    title: String,
    #[prop(into)] description: String,
    /// Site-relative path of the page
    #[prop(into)]
    path: String,
    /// Open Graph type
    #[prop(default = "website")]
    og_type: &'static str,
    /// Preview image, site-relative or absolute
    #[prop(optional_no_strip)]
    image: Option<String>,
) -> impl IntoView {
    let site_url = use_context::<SiteUrl>().unwrap_or_default();
    let full_title = page_title(&title);
    let url = site_url.join(&path);
    let image = image.map(|src| absolute_url(&site_url, &src));
    let twitter_card = if image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };

    view! {
        <Title text=full_title.clone()/>
        <Meta name="description" content=description.clone()/>

        <Meta property="og:type" content=og_type/>
        <Meta property="og:site_name" content=SITE_NAME/>
        <Meta property="og:url" content=url.clone()/>
        <Meta property="og:title" content=full_title.clone()/>
        <Meta property="og:description" content=description.clone()/>

        <Meta name="twitter:card" content=twitter_card/>
        <Meta name="twitter:title" content=full_title/>
        <Meta name="twitter:description" content=description/>

        {image.map(|image| {
            view! {
                <Meta property="og:image" content=image.clone()/>
                <Meta name="twitter:image" content=image/>
            }
        })}

        <Link rel="canonical" href=url/>
    }
}

/// `"<title> | Bedroom Producers"`, or the bare site name for an empty title
pub fn page_title(title: &str) -> String {
    if title.is_empty() || title == SITE_NAME {
        SITE_NAME.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    }
}

fn absolute_url(site_url: &SiteUrl, src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        site_url.join(src)
    }
}
