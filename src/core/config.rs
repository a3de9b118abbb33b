//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, output names) come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables instead.

use thiserror::Error;

use super::site::SiteUrl;

/// Environment variable holding the public origin of the site
pub const SITE_URL_VAR: &str = "SITE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SITE_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidSiteUrl(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Public origin used for canonical links and Open Graph tags
    /// Example: https://bedroomproducers.com
    pub site_url: SiteUrl,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// An invalid `SITE_URL` is logged and replaced by the default origin.
    pub fn from_env() -> Self {
        Self::from_site_url(std::env::var(SITE_URL_VAR).ok().as_deref())
    }

    /// Build the configuration from a raw `SITE_URL` value
    pub fn from_site_url(raw: Option<&str>) -> Self {
        let site_url = match raw {
            Some(raw) => parse_site_url(raw).unwrap_or_else(|err| {
                tracing::warn!("{err}; falling back to the default site URL");
                SiteUrl::default()
            }),
            None => SiteUrl::default(),
        };
        Self { site_url }
    }
}

/// Validate an absolute http(s) origin and strip trailing slashes
pub fn parse_site_url(raw: &str) -> Result<SiteUrl, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = || ConfigError::InvalidSiteUrl(raw.to_string());

    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(invalid)?;

    if host.is_empty() || host.starts_with('/') || host.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(SiteUrl::from_validated(trimmed))
}
