//! Static site content
//!
//! Copy, navigation and link targets shared by the landing page and the
//! chrome. Everything here is literal data; views only lay it out.

use super::rotation::RotationItem;

pub const SITE_NAME: &str = "Bedroom Producers";
pub const SITE_TAGLINE: &str = "A site for people who make music in their bedrooms.";
pub const FOOTER_BLURB: &str =
    "Built in bedrooms. Played in clubs. A gritty, no-BS home for underdog producers.";

/// Public origin used when `SITE_URL` is unset or invalid
pub const DEFAULT_SITE_URL: &str = "https://bedroomproducers.com";

/// Absolute origin of the deployed site, without a trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    /// Wrap an origin that has already been validated
    #[cfg(feature = "ssr")]
    pub(crate) fn from_validated(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a site-relative path
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self(DEFAULT_SITE_URL.to_string())
    }
}

/// Anchor ids of the landing page sections that links point at
pub mod sections {
    pub const SUBMIT: &str = "submit";
    pub const CONTENT: &str = "content";
    pub const NEWSLETTER: &str = "newsletter";
    pub const CONTACT: &str = "contact";

    pub const ALL: [&str; 4] = [SUBMIT, CONTENT, NEWSLETTER, CONTACT];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HEADER_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Submit",
        href: "/#submit",
    },
    NavLink {
        label: "Resources",
        href: "/#content",
    },
    NavLink {
        label: "Blog",
        href: "/blog",
    },
    NavLink {
        label: "Newsletter",
        href: "/#newsletter",
    },
];

pub const FOOTER_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Submit Track",
        href: "/#submit",
    },
    NavLink {
        label: "Resources",
        href: "/#content",
    },
    NavLink {
        label: "Blog",
        href: "/blog",
    },
    NavLink {
        label: "Newsletter",
        href: "/#newsletter",
    },
];

/// Link with an icon, used for socials and quick actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// Extra classes for the link background
    pub tone: &'static str,
}

pub const SOCIAL_LINKS: [IconLink; 4] = [
    IconLink {
        label: "SoundCloud",
        href: "https://soundcloud.com/",
        icon: "soundcloud",
        tone: "",
    },
    IconLink {
        label: "Instagram",
        href: "https://instagram.com/",
        icon: "instagram",
        tone: "",
    },
    IconLink {
        label: "Twitter",
        href: "https://twitter.com/",
        icon: "twitter",
        tone: "",
    },
    IconLink {
        label: "YouTube",
        href: "https://youtube.com/",
        icon: "youtube",
        tone: "",
    },
];

pub const QUICK_ACTIONS: [IconLink; 3] = [
    IconLink {
        label: "Submit Track",
        href: "/#submit",
        icon: "music",
        tone: "bg-orange-500 hover:bg-orange-600",
    },
    IconLink {
        label: "Free Tools",
        href: "/#content",
        icon: "download",
        tone: "bg-blue-500 hover:bg-blue-600",
    },
    IconLink {
        label: "Contact",
        href: "#contact",
        icon: "message-circle",
        tone: "bg-green-500 hover:bg-green-600",
    },
];

const HERO_PHRASES: [(&str, &str); 6] = [
    ("Get Honest Feedback", "✅"),
    ("Download Free Tools", "📦"),
    ("Stay Accountable", "🎯"),
    ("Finish More Tracks", "🎧"),
    ("Share Your Wins", "💬"),
    ("Level Up Your Mix", "🎚️"),
];

/// Phrases cycled in the hero
pub fn hero_phrases() -> Vec<RotationItem> {
    HERO_PHRASES
        .iter()
        .map(|(text, emoji)| RotationItem::new(*text, *emoji))
        .collect()
}

/// Title and body pair used by cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS_STEPS: [Blurb; 3] = [
    Blurb {
        title: "1. Submit Track",
        body: "Upload a link to your work-in-progress via the simple form.",
    },
    Blurb {
        title: "2. Get Feedback",
        body: "Receive honest, actionable notes on your mix, arrangement, or vibe.",
    },
    Blurb {
        title: "3. Improve & Repeat",
        body: "Apply the feedback, finish more tracks, and keep growing.",
    },
];

pub const FEATURES: [Blurb; 6] = [
    Blurb {
        title: "Track Feedback",
        body: "Honest notes from someone who’s still in the trenches.",
    },
    Blurb {
        title: "Free Resources",
        body: "Templates, sample packs, checklists – zero fluff.",
    },
    Blurb {
        title: "Accountability Tools",
        body: "Keep track of what you’re working on, privately or publicly.",
    },
    Blurb {
        title: "Monthly Newsletter",
        body: "Just 1 tip, 1 tool, and 1 community win. Once a month.",
    },
    Blurb {
        title: "No Guru Nonsense",
        body: "Real talk for real producers making music.",
    },
    Blurb {
        title: "Community Wins",
        body: "Sharing progress and celebrating small victories together.",
    },
];

pub const WEEKLY_GOALS: [&str; 3] = [
    "Finish a compelling 8-bar loop.",
    "Structure out one full track idea.",
    "Just open your DAW and export *something*.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Finally got feedback that actually made sense and helped me fix my muddy low-end. No generic advice here.",
        author: "Alex P.",
    },
    Testimonial {
        quote: "The free starter template saved me hours setting up my Ableton projects. Simple but effective stuff.",
        author: "Samira K.",
    },
    Testimonial {
        quote: "Just knowing others are grinding away on their tracks too keeps me motivated. Less lonely than staring at a screen alone.",
        author: "Jordan T.",
    },
];

/// Option of the "type of feedback" select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FEEDBACK_OPTIONS: [FeedbackOption; 6] = [
    FeedbackOption {
        value: "mix",
        label: "Mix / Master Clarity",
    },
    FeedbackOption {
        value: "arrangement",
        label: "Arrangement / Structure",
    },
    FeedbackOption {
        value: "sound-design",
        label: "Sound Design / Sample Choice",
    },
    FeedbackOption {
        value: "vocals",
        label: "Vocals (if applicable)",
    },
    FeedbackOption {
        value: "general",
        label: "General Impression / Vibe",
    },
    FeedbackOption {
        value: "stuck",
        label: "I'm Stuck - Help!",
    },
];

/// Number of posts shown in the landing page's latest content grid
pub const LATEST_POSTS_ON_LANDING: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(href: &str) -> Option<&str> {
        href.strip_prefix("/#").or_else(|| href.strip_prefix('#'))
    }

    #[test]
    fn test_site_url_join() {
        let url = SiteUrl::default();
        assert_eq!(url.join("/"), "https://bedroomproducers.com/");
        assert_eq!(url.join("/blog"), "https://bedroomproducers.com/blog");
        assert_eq!(url.join("blog/x"), "https://bedroomproducers.com/blog/x");
    }

    #[test]
    fn test_hero_phrases() {
        let phrases = hero_phrases();
        assert_eq!(phrases.len(), 6);
        assert!(phrases.iter().all(|p| !p.text.is_empty() && !p.emoji.is_empty()));
    }

    #[test]
    fn test_anchor_links_target_sections() {
        let links = HEADER_LINKS
            .iter()
            .chain(FOOTER_LINKS.iter())
            .map(|link| link.href)
            .chain(QUICK_ACTIONS.iter().map(|action| action.href));

        for href in links {
            if let Some(id) = anchor(href) {
                assert!(sections::ALL.contains(&id), "{href} points at a missing section");
            } else {
                assert!(href.starts_with('/'), "{href} is neither a route nor an anchor");
            }
        }
    }

    #[test]
    fn test_feedback_option_values_unique() {
        let mut values: Vec<_> = FEEDBACK_OPTIONS.iter().map(|o| o.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), FEEDBACK_OPTIONS.len());
    }
}
