//! Markdown rendering for blog posts
//!
//! Uses pulldown-cmark with the GFM extensions (tables, strikethrough, task
//! lists) and emits Tailwind-classed HTML. A leading YAML front matter block
//! is consumed by the parser and never rendered. An image with a title is
//! rendered as a `<figure>` with the title as its caption.

use leptos::prelude::*;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: String,
) -> impl IntoView {
    let html = parse_markdown(&content);

    view! { <div class="post-body max-w-none text-gray-800 dark:text-gray-200" inner_html=html/> }
}

pub fn markdown_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Image being collected between its start and end events
struct PendingImage {
    src: String,
    title: String,
    alt: String,
    /// Sole content of its paragraph, so it may render as a block
    standalone: bool,
}

/// Parse markdown string to HTML
pub fn parse_markdown(content: &str) -> String {
    let events: Vec<Event> = Parser::new_ext(content, markdown_options()).collect();
    let mut html_output = String::with_capacity(content.len() * 2);

    let mut in_metadata = false;
    let mut in_code_block = false;
    let mut code_block_content = String::new();
    let mut code_language = String::new();
    let mut in_table_head = false;
    let mut image: Option<PendingImage> = None;
    // Paragraphs that only wrap a captioned image are dropped so the
    // <figure> is not nested inside a <p>
    let mut skipped_paragraph = false;

    for (index, event) in events.iter().enumerate() {
        if in_metadata {
            if matches!(event, Event::End(TagEnd::MetadataBlock(_))) {
                in_metadata = false;
            }
            continue;
        }

        if let Some(pending) = image.as_mut() {
            match event {
                Event::End(TagEnd::Image) => {
                    if let Some(done) = image.take() {
                        push_image(&mut html_output, &done);
                    }
                }
                Event::Text(text) | Event::Code(text) => pending.alt.push_str(text),
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(tag) => match tag {
                Tag::MetadataBlock(_) => in_metadata = true,
                Tag::Paragraph => {
                    if wraps_only_captioned_image(&events, index) {
                        skipped_paragraph = true;
                    } else {
                        html_output.push_str("<p class=\"mb-4 leading-relaxed\">");
                    }
                }
                Tag::Heading { level, .. } => {
                    let class = match level {
                        HeadingLevel::H1 => "text-3xl font-bold mt-10 mb-4",
                        HeadingLevel::H2 => "text-2xl font-bold mt-10 mb-4",
                        HeadingLevel::H3 => "text-xl font-semibold mt-8 mb-3",
                        _ => "text-lg font-semibold mt-6 mb-2",
                    };
                    html_output.push_str(&format!("<{} class=\"{}\">", heading_tag(*level), class));
                }
                Tag::BlockQuote(_) => {
                    html_output.push_str("<blockquote class=\"border-l-4 border-orange-500 pl-4 my-6 italic text-gray-600 dark:text-gray-400\">");
                }
                Tag::CodeBlock(kind) => {
                    in_code_block = true;
                    code_block_content.clear();
                    code_language = match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                }
                Tag::List(Some(start)) => {
                    let start_attr = if *start == 1 {
                        String::new()
                    } else {
                        format!(" start=\"{}\"", start)
                    };
                    html_output.push_str(&format!(
                        "<ol class=\"list-decimal pl-6 mb-4 space-y-2\"{}>",
                        start_attr
                    ));
                }
                Tag::List(None) => {
                    html_output.push_str("<ul class=\"list-disc pl-6 mb-4 space-y-2\">");
                }
                Tag::Item => html_output.push_str("<li>"),
                Tag::Emphasis => html_output.push_str("<em>"),
                Tag::Strong => html_output.push_str("<strong class=\"font-semibold\">"),
                Tag::Strikethrough => html_output.push_str("<del>"),
                Tag::Link {
                    dest_url, title, ..
                } => {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(" title=\"{}\"", escape_html(title))
                    };
                    let target_attr = if is_external(dest_url) {
                        " target=\"_blank\" rel=\"noopener noreferrer\""
                    } else {
                        ""
                    };
                    html_output.push_str(&format!(
                        "<a href=\"{}\" class=\"text-orange-600 dark:text-orange-400 hover:underline\"{}{}>",
                        escape_html(dest_url),
                        title_attr,
                        target_attr
                    ));
                }
                Tag::Image {
                    dest_url, title, ..
                } => {
                    image = Some(PendingImage {
                        src: dest_url.to_string(),
                        title: title.to_string(),
                        alt: String::new(),
                        standalone: skipped_paragraph,
                    });
                }
                Tag::Table(_) => {
                    html_output.push_str("<div class=\"overflow-x-auto my-6\"><table class=\"min-w-full border border-gray-200 dark:border-gray-700 text-sm\">");
                }
                Tag::TableHead => {
                    in_table_head = true;
                    html_output.push_str("<thead class=\"bg-gray-100 dark:bg-gray-800\"><tr>");
                }
                Tag::TableRow => html_output.push_str("<tr>"),
                Tag::TableCell => {
                    html_output.push_str(if in_table_head {
                        "<th class=\"px-3 py-2 text-left font-semibold border-b border-gray-200 dark:border-gray-700\">"
                    } else {
                        "<td class=\"px-3 py-2 border-b border-gray-200 dark:border-gray-700\">"
                    });
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => {
                    if skipped_paragraph {
                        skipped_paragraph = false;
                    } else {
                        html_output.push_str("</p>");
                    }
                }
                TagEnd::Heading(level) => {
                    html_output.push_str(&format!("</{}>", heading_tag(*level)));
                }
                TagEnd::BlockQuote(_) => html_output.push_str("</blockquote>"),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    let lang_class = if !code_language.is_empty() {
                        format!(" class=\"language-{}\"", escape_html(&code_language))
                    } else {
                        String::new()
                    };
                    html_output.push_str(&format!(
                        "<pre class=\"bg-gray-900 text-gray-100 rounded-lg p-4 my-6 overflow-x-auto text-sm\"><code{}>{}</code></pre>",
                        lang_class,
                        escape_html(&code_block_content)
                    ));
                }
                TagEnd::List(true) => html_output.push_str("</ol>"),
                TagEnd::List(false) => html_output.push_str("</ul>"),
                TagEnd::Item => html_output.push_str("</li>"),
                TagEnd::Emphasis => html_output.push_str("</em>"),
                TagEnd::Strong => html_output.push_str("</strong>"),
                TagEnd::Strikethrough => html_output.push_str("</del>"),
                TagEnd::Link => html_output.push_str("</a>"),
                TagEnd::Table => html_output.push_str("</tbody></table></div>"),
                TagEnd::TableHead => {
                    in_table_head = false;
                    html_output.push_str("</tr></thead><tbody>");
                }
                TagEnd::TableRow => html_output.push_str("</tr>"),
                TagEnd::TableCell => {
                    html_output.push_str(if in_table_head { "</th>" } else { "</td>" });
                }
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    code_block_content.push_str(text);
                } else {
                    html_output.push_str(&escape_html(text));
                }
            }
            Event::Code(code) => {
                html_output.push_str(&format!(
                    "<code class=\"bg-gray-100 dark:bg-gray-800 px-1.5 py-0.5 rounded text-sm font-mono\">{}</code>",
                    escape_html(code)
                ));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                // Posts are authored in this repository
                html_output.push_str(html);
            }
            Event::SoftBreak => html_output.push(' '),
            Event::HardBreak => html_output.push_str("<br />"),
            Event::Rule => {
                html_output.push_str("<hr class=\"my-8 border-gray-200 dark:border-gray-700\" />");
            }
            Event::TaskListMarker(checked) => {
                html_output.push_str(if *checked {
                    "<input type=\"checkbox\" checked disabled class=\"mr-2 accent-orange-500\" />"
                } else {
                    "<input type=\"checkbox\" disabled class=\"mr-2 accent-orange-500\" />"
                });
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    html_output
}

fn push_image(html_output: &mut String, image: &PendingImage) {
    let title_attr = if image.title.is_empty() || image.standalone {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_html(&image.title))
    };
    let img = format!(
        "<img src=\"{}\" alt=\"{}\"{} loading=\"lazy\" class=\"w-full rounded-lg\" />",
        escape_html(&image.src),
        escape_html(&image.alt),
        title_attr
    );
    if image.standalone && !image.title.is_empty() {
        html_output.push_str(&format!(
            "<figure class=\"my-8\">{}<figcaption class=\"mt-2 text-center text-sm text-gray-500 dark:text-gray-400\">{}</figcaption></figure>",
            img,
            escape_html(&image.title)
        ));
    } else {
        html_output.push_str(&img);
    }
}

/// Whether the paragraph starting at `index` holds nothing but one titled image
fn wraps_only_captioned_image(events: &[Event], index: usize) -> bool {
    let Some(Event::Start(Tag::Image { title, .. })) = events.get(index + 1) else {
        return false;
    };
    if title.is_empty() {
        return false;
    }
    let Some(offset) = events[index + 1..]
        .iter()
        .position(|e| matches!(e, Event::End(TagEnd::Image)))
    else {
        return false;
    };
    matches!(
        events.get(index + 1 + offset + 1),
        Some(Event::End(TagEnd::Paragraph))
    )
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn is_external(url: &CowStr) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
