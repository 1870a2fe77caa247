//! `[feed]` configuration.
//!
//! Feed generation itself is the engine's business; this section only
//! carries the knobs it consumes.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// Atom 1.0 format (default).
    #[default]
    Atom,
    /// RSS 2.0 format.
    Rss,
}

/// Field paths for diagnostics.
pub struct FeedFields {
    pub enable: FieldPath,
    pub domain: FieldPath,
    pub path: FieldPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Domain override for feed links (e.g., "//andy.example.de").
    /// Falls back to `site.url` when unset.
    pub domain: Option<String>,
    /// Output path for the all-articles feed.
    pub path: PathBuf,
    /// Feed format: atom | rss.
    pub format: FeedFormat,
    /// Also generate one feed per category.
    pub category_feeds: bool,
    /// Also generate one feed per translation language.
    pub translation_feeds: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            domain: None,
            path: "atom.xml".into(),
            format: FeedFormat::Atom,
            category_feeds: false,
            translation_feeds: false,
        }
    }
}

impl FeedConfig {
    pub const FIELDS: FeedFields = FeedFields {
        enable: FieldPath::new("feed.enable"),
        domain: FieldPath::new("feed.domain"),
        path: FieldPath::new("feed.path"),
    };

    /// Validate feed configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(domain) = &self.domain
            && domain.is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.domain,
                "domain must not be empty",
                "remove the key to fall back to site.url",
            );
        }

        if self.path.as_os_str().is_empty() {
            diag.error(Self::FIELDS.path, "path must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.feed.enable);
        assert_eq!(config.feed.path, PathBuf::from("atom.xml"));
        assert_eq!(config.feed.format, FeedFormat::Atom);
        assert!(config.feed.domain.is_none());
        assert!(!config.feed.category_feeds);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[feed]\nenable = true\npath = \"rss.xml\"\nformat = \"rss\"\ndomain = \"//andy.hammerhartes.de\"",
        );
        assert!(config.feed.enable);
        assert_eq!(config.feed.path, PathBuf::from("rss.xml"));
        assert_eq!(config.feed.format, FeedFormat::Rss);
        assert_eq!(config.feed.domain.as_deref(), Some("//andy.hammerhartes.de"));
    }

    #[test]
    fn test_empty_domain_rejected() {
        let config = test_parse_config("[feed]\ndomain = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.feed.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
