//! Site initialization.
//!
//! Creates a new site: directory structure, default `quill.toml`, and
//! ignore files.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "quill.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate quill.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Quill configuration file (v{})
# https://github.com/quill-blog/quill

[site]
title = "My Blog"
author = ""
# url = "https://example.com"   # required when feed.enable = true
timezone = "UTC"
language = "en"

[feed]
enable = false
path = "atom.xml"
format = "atom"                 # atom | rss

[sitemap]
enable = false
path = "sitemap.xml"
format = "xml"                  # xml | txt

[sitemap.priorities]            # 0.0 .. 1.0
articles = 0.5
indexes = 0.5
pages = 0.5

[sitemap.changefreqs]           # always | hourly | daily | weekly | monthly | yearly | never
articles = "weekly"
indexes = "weekly"
pages = "weekly"

[theme]
name = "default"
dir = "themes"

[build]
content = "content"
output = "output"
pagination = 10

[plugins]
enable = ["blockquote_fix"]
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write configuration and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = config.get_root();
    validate_target(root)?;

    create_structure(root, config)?;
    write_config(root)?;
    let output_dir = config.root_relative(&config.build.output);
    write_ignore_files(root, &output_dir)?;

    log!("init"; "Site initialized at {}", root.display());
    Ok(())
}

/// Refuse to scribble over an existing site.
fn validate_target(root: &Path) -> Result<()> {
    if root.join(CONFIG_FILE).exists() {
        bail!(
            "'{}' already contains a {}",
            root.display(),
            CONFIG_FILE
        );
    }
    Ok(())
}

/// Create content and theme directories.
fn create_structure(root: &Path, config: &SiteConfig) -> Result<()> {
    let content = config.root_relative(&config.build.content);
    let dirs = [
        root.join(content),
        config.theme.resolve(root),
    ];
    for dir in &dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}

/// Write default quill.toml configuration
fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];
    let content = format!("{}\n", patterns.join("\n"));

    for name in IGNORE_FILES {
        let path = root.join(name);
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

// =============================================================================
// tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_template_parses_without_unknown_fields() {
        let template = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();

        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.plugins.enable, vec!["blockquote_fix"]);
        assert_eq!(config.build.pagination, 10);
    }

    #[test]
    fn test_new_site_creates_structure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();

        new_site(&config, false).unwrap();

        assert!(dir.path().join("quill.toml").is_file());
        assert!(dir.path().join("content").is_dir());
        assert!(dir.path().join("themes/default").is_dir());
        assert!(dir.path().join(".gitignore").is_file());

        // Running again refuses to overwrite
        assert!(new_site(&config, false).is_err());
    }
}
