//! Rendering plugins.
//!
//! A plugin customizes the translator by decorating the compaction policy it
//! is handed at install time. The default policy is passed in explicitly, so
//! a plugin that wants to override selectively keeps delegating to its inner
//! policy for every case it does not care about. Nothing global is mutated;
//! installing the same plugin list twice yields two independent chains.

mod blockquote_fix;

pub use blockquote_fix::BlockquoteFix;

use crate::render::{CompactionPolicy, DefaultCompaction};
use anyhow::{Result, bail};
use rustc_hash::FxHashMap;

/// A named rendering plugin.
pub trait Plugin: Send + Sync {
    /// Name used in `[plugins] enable`.
    fn name(&self) -> &'static str;

    /// Wrap the currently-installed compaction policy.
    fn decorate(&self, inner: Box<dyn CompactionPolicy>) -> Box<dyn CompactionPolicy>;
}

/// Registry of the plugins shipped with the binary.
pub struct PluginRegistry {
    plugins: FxHashMap<&'static str, Box<dyn Plugin>>,
}

impl PluginRegistry {
    /// Registry containing all built-in plugins.
    pub fn builtin() -> Self {
        let mut registry = Self {
            plugins: FxHashMap::default(),
        };
        registry.register(Box::new(BlockquoteFix));
        registry
    }

    fn register(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.insert(plugin.name(), plugin);
    }

    /// Whether `name` is a known plugin.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Known plugin names, sorted for stable output.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.plugins.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Build the policy chain for the enabled plugins.
    ///
    /// Starts from [`DefaultCompaction`] and folds each enabled plugin over
    /// it in order, so later plugins decide first and delegate inward.
    pub fn install(&self, enabled: &[String]) -> Result<Box<dyn CompactionPolicy>> {
        let mut policy: Box<dyn CompactionPolicy> = Box::new(DefaultCompaction);
        for name in enabled {
            let Some(plugin) = self.plugins.get(name.as_str()) else {
                bail!(
                    "unknown plugin '{}' (available: {})",
                    name,
                    self.names().join(", ")
                );
            };
            policy = plugin.decorate(policy);
        }
        Ok(policy)
    }
}

// =============================================================================
// tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, NodeKind};

    #[test]
    fn test_builtin_names() {
        let registry = PluginRegistry::builtin();
        assert_eq!(registry.names(), vec!["blockquote_fix"]);
        assert!(registry.contains("blockquote_fix"));
        assert!(!registry.contains("nope"));
    }

    #[test]
    fn test_install_unknown_plugin_fails() {
        let registry = PluginRegistry::builtin();
        let err = registry.install(&["nope".into()]).unwrap_err();
        assert!(err.to_string().contains("unknown plugin 'nope'"));
        assert!(err.to_string().contains("blockquote_fix"));
    }

    #[test]
    fn test_install_empty_is_default_policy() {
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let para = doc.push(quote, NodeKind::Paragraph);

        let registry = PluginRegistry::builtin();
        let policy = registry.install(&[]).unwrap();
        // Default policy compacts a sole blockquote paragraph
        assert!(policy.should_be_compact(&doc, para));

        let policy = registry.install(&["blockquote_fix".into()]).unwrap();
        assert!(!policy.should_be_compact(&doc, para));
    }
}
