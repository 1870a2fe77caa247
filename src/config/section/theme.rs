//! `[theme]` configuration.
//!
//! Theme selection only: the named theme must exist as a directory under
//! the theme search dir. What the theme contains is the engine's business.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Field paths for diagnostics.
pub struct ThemeFields {
    pub name: FieldPath,
    pub dir: FieldPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name (directory name under `dir`).
    pub name: String,
    /// Theme search directory, relative to the site root.
    pub dir: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "default".into(),
            dir: "themes".into(),
        }
    }
}

impl ThemeConfig {
    pub const FIELDS: ThemeFields = ThemeFields {
        name: FieldPath::new("theme.name"),
        dir: FieldPath::new("theme.dir"),
    };

    /// Absolute path of the selected theme.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.dir).join(&self.name)
    }

    /// Validate theme configuration against the site root.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error(Self::FIELDS.name, "theme name must not be empty");
            return;
        }

        let theme_dir = self.resolve(root);
        if !theme_dir.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.name,
                format!("theme directory '{}' not found", theme_dir.display()),
                format!(
                    "create {}/{} or change {}",
                    self.dir.display(),
                    self.name,
                    Self::FIELDS.name
                ),
            );
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
        assert_eq!(config.theme.name, "default");
        assert_eq!(config.theme.dir, PathBuf::from("themes"));
    }

    #[test]
    fn test_resolve() {
        let config = test_parse_config("[theme]\nname = \"mytheme\"");
        assert_eq!(
            config.theme.resolve(Path::new("/site")),
            PathBuf::from("/site/themes/mytheme")
        );
    }

    #[test]
    fn test_missing_theme_dir_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let config = test_parse_config("[theme]\nname = \"mytheme\"");

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(root.path(), &mut diag);
        assert_eq!(diag.len(), 1);

        std::fs::create_dir_all(root.path().join("themes/mytheme")).unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(root.path(), &mut diag);
        assert!(!diag.has_errors());
    }
}
