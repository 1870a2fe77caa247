//! `[build]` configuration.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Field paths for diagnostics.
pub struct BuildFields {
    pub content: FieldPath,
    pub output: FieldPath,
    pub pagination: FieldPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Content directory, relative to the site root.
    pub content: PathBuf,
    /// Output directory, relative to the site root.
    pub output: PathBuf,
    /// Articles per index page.
    pub pagination: usize,
    /// Emit document-relative URLs instead of absolute ones.
    pub relative_urls: bool,
    /// Clean output directory before building (set via CLI --clean).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "output".into(),
            pagination: 10,
            relative_urls: false,
            clean: false,
        }
    }
}

impl BuildConfig {
    pub const FIELDS: BuildFields = BuildFields {
        content: FieldPath::new("build.content"),
        output: FieldPath::new("build.output"),
        pagination: FieldPath::new("build.pagination"),
    };

    /// Validate build configuration.
    ///
    /// Runs before path normalization, so `content` and `output` are still
    /// the raw values from the config file.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.pagination == 0 {
            diag.error_with_hint(
                Self::FIELDS.pagination,
                "pagination must be at least 1",
                "10 is a common value",
            );
        }

        if self.content == self.output {
            diag.error(
                Self::FIELDS.output,
                "content and output directories must differ",
            );
        }
    }
}
