//! Configuration check report.

use crate::{config::SiteConfig, log, plugin::PluginRegistry};
use anyhow::Result;

/// Report the resolved configuration.
///
/// Validation already ran during config load; reaching this point means the
/// config is sound, so the report only summarizes what the build would use.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    log!("check"; "config ok: {}", config.config_path.display());
    log!("check"; "site: '{}' by '{}' ({})", config.site.title, config.site.author, config.site.language);
    log!("check"; "theme: {}", config.theme.resolve(config.get_root()).display());

    if config.feed.enable {
        log!("check"; "feed: {} ({:?})", config.feed.path.display(), config.feed.format);
    } else {
        log!("check"; "feed: disabled");
    }

    if config.sitemap.enable {
        log!("check"; "sitemap: {}", config.sitemap.path.display());
    } else {
        log!("check"; "sitemap: disabled");
    }

    let registry = PluginRegistry::builtin();
    if config.plugins.enable.is_empty() {
        log!("check"; "plugins: none (available: {})", registry.names().join(", "));
    } else {
        log!("check"; "plugins: {}", config.plugins.enable.join(", "));
    }

    Ok(())
}
