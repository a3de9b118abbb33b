//! Blog content
//!
//! Posts are Markdown files under `content/blog/`, embedded at compile time.
//! Each file starts with a YAML front matter block:
//!
//! ```text
//! ---
//! title: 5 Ways to Escape Loop Hell
//! description: Practical tips to break free from the 8-bar trap.
//! category: Tutorial
//! date: 2024-01-15
//! featured: true
//! accent: orange
//! ---
//! Post body in Markdown...
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

/// Words per minute used when a post does not state its reading time
pub const READING_WORDS_PER_MINUTE: usize = 200;

const POST_SOURCES: &[(&str, &str)] = &[
    (
        "5-ways-to-escape-loop-hell",
        include_str!("../../content/blog/5-ways-to-escape-loop-hell.md"),
    ),
    (
        "ableton-starter-template-guide",
        include_str!("../../content/blog/ableton-starter-template-guide.md"),
    ),
    (
        "mixing-reset-checklist",
        include_str!("../../content/blog/mixing-reset-checklist.md"),
    ),
    (
        "loop-slayer-challenge-01",
        include_str!("../../content/blog/loop-slayer-challenge-01.md"),
    ),
    (
        "quick-tip-sidechain-reverb",
        include_str!("../../content/blog/quick-tip-sidechain-reverb.md"),
    ),
    (
        "lo-fi-drums-vol-1",
        include_str!("../../content/blog/lo-fi-drums-vol-1.md"),
    ),
];

/// Errors raised while loading blog posts
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("post `{slug}` does not start with a front matter block")]
    MissingFrontMatter { slug: String },

    #[error("post `{slug}` has invalid front matter: {source}")]
    InvalidFrontMatter {
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("more than one post uses the slug `{0}`")]
    DuplicateSlug(String),
}

/// Post category shown on the card badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Tutorial,
    Template,
    Resource,
    Challenge,
    #[serde(rename = "Quick Tip")]
    QuickTip,
    #[serde(rename = "Sample Pack")]
    SamplePack,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tutorial => "Tutorial",
            Category::Template => "Template",
            Category::Resource => "Resource",
            Category::Challenge => "Challenge",
            Category::QuickTip => "Quick Tip",
            Category::SamplePack => "Sample Pack",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Tutorial => "🧠",
            Category::Template => "📥",
            Category::Resource => "✅",
            Category::Challenge => "🔁",
            Category::QuickTip => "💡",
            Category::SamplePack => "🥁",
        }
    }
}

/// Accent colour of a post's category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Orange,
    Blue,
    Green,
    Red,
    Purple,
}

impl Accent {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Accent::Orange => {
                "bg-orange-100 text-orange-700 dark:bg-orange-900/30 dark:text-orange-300"
            }
            Accent::Blue => "bg-blue-100 text-blue-700 dark:bg-blue-900/30 dark:text-blue-300",
            Accent::Green => {
                "bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-300"
            }
            Accent::Red => "bg-red-100 text-red-700 dark:bg-red-900/30 dark:text-red-300",
            Accent::Purple => {
                "bg-purple-100 text-purple-700 dark:bg-purple-900/30 dark:text-purple-300"
            }
        }
    }
}

/// Cover image shown above a post
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cover {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Front matter of a post
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub reading_minutes: Option<u32>,
    #[serde(default)]
    pub cover: Option<Cover>,
}

/// A parsed blog post
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub meta: PostMeta,
    /// Markdown after the front matter block
    pub body: String,
}

impl Post {
    /// Parse a post from its Markdown source
    pub fn parse(slug: &str, source: &str) -> Result<Self, ContentError> {
        let (front_matter, body) =
            split_front_matter(source).ok_or_else(|| ContentError::MissingFrontMatter {
                slug: slug.to_string(),
            })?;

        let meta = serde_yaml::from_str(&front_matter).map_err(|source| {
            ContentError::InvalidFrontMatter {
                slug: slug.to_string(),
                source,
            }
        })?;

        Ok(Self {
            slug: slug.to_string(),
            meta,
            body: body.trim_start().to_string(),
        })
    }

    /// Stated reading time, or an estimate from the word count
    pub fn reading_minutes(&self) -> u32 {
        self.meta.reading_minutes.unwrap_or_else(|| {
            let words = self.body.split_whitespace().count();
            words.div_ceil(READING_WORDS_PER_MINUTE).max(1) as u32
        })
    }

    pub fn reading_time_label(&self) -> String {
        format!("{} min read", self.reading_minutes())
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn date_label(&self) -> String {
        self.meta.date.format("%Y-%m-%d").to_string()
    }
}

/// Split a YAML front matter block from the Markdown that follows it.
///
/// Returns `None` unless the document opens with a metadata block.
fn split_front_matter(source: &str) -> Option<(String, &str)> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut events = Parser::new_ext(source, options).into_offset_iter();
    match events.next() {
        Some((Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)), _)) => {}
        _ => return None,
    }

    let mut front_matter = String::new();
    for (event, range) in events {
        match event {
            Event::Text(text) => front_matter.push_str(&text),
            Event::End(TagEnd::MetadataBlock(_)) => {
                return Some((front_matter, &source[range.end..]));
            }
            _ => {}
        }
    }
    None
}

/// Parse posts from `(slug, source)` pairs, featured first then newest first
pub fn parse_posts(sources: &[(&str, &str)]) -> Result<Vec<Post>, ContentError> {
    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(sources.len());

    for (slug, source) in sources {
        if !seen.insert(*slug) {
            return Err(ContentError::DuplicateSlug(slug.to_string()));
        }
        posts.push(Post::parse(slug, source)?);
    }

    posts.sort_by(|a, b| {
        b.meta
            .featured
            .cmp(&a.meta.featured)
            .then_with(|| b.meta.date.cmp(&a.meta.date))
    });
    Ok(posts)
}

/// Embedded posts, parsed on first use
static POSTS: LazyLock<Result<Vec<Post>, ContentError>> =
    LazyLock::new(|| parse_posts(POST_SOURCES));

/// All embedded posts in index order
pub fn load_posts() -> Result<&'static [Post], &'static ContentError> {
    POSTS.as_deref()
}

/// Look up an embedded post by slug
pub fn find_post(slug: &str) -> Result<Option<Post>, &'static ContentError> {
    Ok(load_posts()?.iter().find(|post| post.slug == slug).cloned())
}

/// The `count` most recent posts regardless of the featured flag
pub fn latest_posts(count: usize) -> Result<Vec<Post>, &'static ContentError> {
    let mut posts = load_posts()?.to_vec();
    posts.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));
    posts.truncate(count);
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\ntitle: Sample\ndescription: A sample post.\ncategory: Quick Tip\ndate: 2024-02-01\naccent: purple\n---\n\nFirst paragraph.\n";

    #[test]
    fn test_parse_front_matter() {
        let post = Post::parse("sample", SAMPLE).unwrap();
        assert_eq!(post.slug, "sample");
        assert_eq!(post.meta.title, "Sample");
        assert_eq!(post.meta.category, Category::QuickTip);
        assert_eq!(post.meta.accent, Accent::Purple);
        assert_eq!(post.meta.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(!post.meta.featured);
        assert_eq!(post.body, "First paragraph.\n");
        assert_eq!(post.href(), "/blog/sample");
        assert_eq!(post.date_label(), "2024-02-01");
    }

    #[test]
    fn test_front_matter_not_in_body() {
        let post = Post::parse("sample", SAMPLE).unwrap();
        assert!(!post.body.contains("title:"));
        assert!(!post.body.contains("---"));
    }

    #[test]
    fn test_missing_front_matter() {
        let err = Post::parse("bare", "# Just a heading\n\nNo metadata here.").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { ref slug } if slug == "bare"));
    }

    #[test]
    fn test_invalid_front_matter() {
        let source = "---\ntitle: Broken\ncategory: Podcast\n---\nBody\n";
        let err = Post::parse("broken", source).unwrap_err();
        assert!(matches!(err, ContentError::InvalidFrontMatter { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unknown_front_matter_field_rejected() {
        let source = "---\ntitle: T\ndescription: D\ncategory: Tutorial\ndate: 2024-01-01\nauthor: me\n---\nBody\n";
        assert!(matches!(
            Post::parse("extra", source),
            Err(ContentError::InvalidFrontMatter { .. })
        ));
    }

    #[test]
    fn test_reading_minutes_estimate() {
        let mut post = Post::parse("sample", SAMPLE).unwrap();
        assert_eq!(post.reading_minutes(), 1);

        post.body = "word ".repeat(401);
        assert_eq!(post.reading_minutes(), 3);

        post.meta.reading_minutes = Some(8);
        assert_eq!(post.reading_minutes(), 8);
        assert_eq!(post.reading_time_label(), "8 min read");
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = parse_posts(&[("sample", SAMPLE), ("sample", SAMPLE)]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(ref slug) if slug == "sample"));
    }

    #[test]
    fn test_embedded_posts_load() {
        let posts = load_posts().unwrap();
        assert_eq!(posts.len(), POST_SOURCES.len());
        for post in posts {
            assert!(!post.meta.title.is_empty(), "{} has no title", post.slug);
            assert!(!post.body.trim().is_empty(), "{} has no body", post.slug);
        }
    }

    #[test]
    fn test_index_order_featured_then_newest() {
        let posts = load_posts().unwrap();
        let first_regular = posts
            .iter()
            .position(|post| !post.meta.featured)
            .unwrap_or(posts.len());
        assert!(posts[first_regular..].iter().all(|post| !post.meta.featured));

        for group in [&posts[..first_regular], &posts[first_regular..]] {
            assert!(group.windows(2).all(|w| w[0].meta.date >= w[1].meta.date));
        }
        assert_eq!(posts[0].slug, "5-ways-to-escape-loop-hell");
    }

    #[test]
    fn test_find_post() {
        let post = find_post("mixing-reset-checklist").unwrap().unwrap();
        assert_eq!(post.meta.category, Category::Resource);
        assert!(find_post("no-such-post").unwrap().is_none());
    }

    #[test]
    fn test_posts_parsed_once() {
        let first = load_posts().unwrap();
        let second = load_posts().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_stated_reading_time_wins() {
        let post = find_post("quick-tip-sidechain-reverb").unwrap().unwrap();
        assert_eq!(post.meta.reading_minutes, Some(3));
        assert_eq!(post.reading_time_label(), "3 min read");
    }

    #[test]
    fn test_latest_posts() {
        let latest = latest_posts(3).unwrap();
        assert_eq!(latest.len(), 3);
        assert_eq!(latest[0].slug, "lo-fi-drums-vol-1");
        assert!(latest.windows(2).all(|w| w[0].meta.date >= w[1].meta.date));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::QuickTip.label(), "Quick Tip");
        assert_eq!(Category::Tutorial.emoji(), "🧠");
        assert!(Accent::default().badge_class().contains("orange"));
    }
}
