//! `[sitemap]` configuration.
//!
//! Per-kind priorities and change frequencies for the three page kinds the
//! engine distinguishes: articles, index pages, and standalone pages.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sitemap output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SitemapFormat {
    /// XML urlset (default).
    #[default]
    Xml,
    /// Plain list of URLs, one per line.
    Txt,
}

/// Sitemap change frequency, as defined by the sitemaps protocol.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

/// Crawl priority per page kind, each in 0.0..=1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapPriorities {
    pub articles: f64,
    pub indexes: f64,
    pub pages: f64,
}

impl Default for SitemapPriorities {
    fn default() -> Self {
        Self {
            articles: 0.5,
            indexes: 0.5,
            pages: 0.5,
        }
    }
}

/// Change frequency per page kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapChangeFreqs {
    pub articles: ChangeFreq,
    pub indexes: ChangeFreq,
    pub pages: ChangeFreq,
}

/// Field paths for diagnostics.
pub struct SitemapFields {
    pub path: FieldPath,
    pub priority_articles: FieldPath,
    pub priority_indexes: FieldPath,
    pub priority_pages: FieldPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file.
    pub path: PathBuf,
    /// Output format: xml | txt.
    pub format: SitemapFormat,
    /// Crawl priorities per page kind.
    pub priorities: SitemapPriorities,
    /// Change frequencies per page kind.
    pub changefreqs: SitemapChangeFreqs,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "sitemap.xml".into(),
            format: SitemapFormat::Xml,
            priorities: SitemapPriorities::default(),
            changefreqs: SitemapChangeFreqs::default(),
        }
    }
}

impl SitemapConfig {
    pub const FIELDS: SitemapFields = SitemapFields {
        path: FieldPath::new("sitemap.path"),
        priority_articles: FieldPath::new("sitemap.priorities.articles"),
        priority_indexes: FieldPath::new("sitemap.priorities.indexes"),
        priority_pages: FieldPath::new("sitemap.priorities.pages"),
    };

    /// Validate sitemap configuration.
    ///
    /// # Checks
    /// - `path` must not be empty
    /// - every priority lies in 0.0..=1.0
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error(Self::FIELDS.path, "path must not be empty");
        }

        let priorities = [
            (Self::FIELDS.priority_articles, self.priorities.articles),
            (Self::FIELDS.priority_indexes, self.priorities.indexes),
            (Self::FIELDS.priority_pages, self.priorities.pages),
        ];
        for (field, value) in priorities {
            if !(0.0..=1.0).contains(&value) {
                diag.error_with_hint(
                    field,
                    format!("priority {value} is out of range"),
                    "priorities must lie between 0.0 and 1.0",
                );
            }
        }
    }
}
