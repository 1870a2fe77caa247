//! Build pipeline: scan content, render pages, write output.

use crate::{
    config::SiteConfig,
    debug,
    dom::convert::{MarkdownOptions, from_markdown},
    log,
    plugin::PluginRegistry,
    render::HtmlTranslator,
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Build the site: render every markdown file under the content directory
/// into the output directory, mirroring the layout.
///
/// Returns the number of pages rendered.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    let translator = make_translator(config)?;

    let output_dir = &config.build.output;
    if config.build.clean && output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed to clean '{}'", output_dir.display()))?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create '{}'", output_dir.display()))?;

    let pages = scan_content(&config.build.content)?;
    for page in &pages {
        render_page(config, &translator, page)?;
    }

    log!("build"; "rendered {} page{}", pages.len(), if pages.len() == 1 { "" } else { "s" });
    Ok(pages.len())
}

/// Translator with the configured plugin chain installed.
fn make_translator(config: &SiteConfig) -> Result<HtmlTranslator> {
    let registry = PluginRegistry::builtin();
    let policy = registry.install(&config.plugins.enable)?;
    Ok(HtmlTranslator::with_policy(policy))
}

/// Collect markdown files under the content directory, sorted for stable
/// output.
fn scan_content(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for entry in jwalk::WalkDir::new(content_dir).sort(true) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "md") {
            pages.push(path);
        }
    }
    Ok(pages)
}

/// Render a single page and write it next to its content-relative path.
fn render_page(config: &SiteConfig, translator: &HtmlTranslator, page: &Path) -> Result<()> {
    let markdown = fs::read_to_string(page)
        .with_context(|| format!("Failed to read '{}'", page.display()))?;

    let doc = from_markdown(&markdown, &MarkdownOptions::all());
    let html = translator.render(&doc);

    let relative = page
        .strip_prefix(&config.build.content)
        .unwrap_or(page)
        .with_extension("html");
    let target = config.build.output.join(&relative);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(&target, html)
        .with_context(|| format!("Failed to write '{}'", target.display()))?;

    debug!("build"; "{} -> {}", page.display(), target.display());
    Ok(())
}

// =============================================================================
// tests
// =============================================================================
