//! `[site]` configuration.
//!
//! Site metadata consumed by templates, feeds, and the sitemap. Everything
//! here is inert data: the engine reads it, nothing in the render pipeline
//! depends on it.

use crate::config::section::FeedConfig;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Field paths for diagnostics.
pub struct SiteInfoFields {
    pub title: FieldPath,
    pub author: FieldPath,
    pub url: FieldPath,
    pub timezone: FieldPath,
    pub language: FieldPath,
}

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Author email.
    pub email: String,

    /// Site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// IANA timezone name (e.g., "Europe/Paris"). Passed through to
    /// templates; only its shape is checked here.
    pub timezone: String,

    /// Language code (e.g., "en", "de").
    pub language: String,

    /// Copyright notice.
    pub copyright: String,

    /// Custom fields exposed to templates as-is.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            url: None,
            timezone: "UTC".into(),
            language: "en".into(),
            copyright: String::new(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        title: FieldPath::new("site.title"),
        author: FieldPath::new("site.author"),
        url: FieldPath::new("site.url"),
        timezone: FieldPath::new("site.timezone"),
        language: FieldPath::new("site.language"),
    };

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid http(s) URL with a host
    /// - `timezone` and `language` must be non-empty
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        // Feed requires url
        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "{} is enabled but {} is not configured",
                    FeedConfig::FIELDS.enable,
                    Self::FIELDS.url
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if self.language.is_empty() {
            diag.error(Self::FIELDS.language, "language must not be empty");
        }

        if self.timezone.is_empty() {
            diag.error(Self::FIELDS.timezone, "timezone must not be empty");
        } else if self.timezone != "UTC" && !self.timezone.contains('/') {
            // Not resolved against a tz database; templates receive it opaquely
            diag.warn(
                Self::FIELDS.timezone,
                format!(
                    "'{}' does not look like an IANA name such as Europe/Paris",
                    self.timezone
                ),
            );
        }
    }
}
