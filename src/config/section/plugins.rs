//! `[plugins]` configuration.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::plugin::PluginRegistry;
use serde::{Deserialize, Serialize};

/// Field paths for diagnostics.
pub struct PluginsFields {
    pub enable: FieldPath,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Plugins applied during rendering, in order.
    pub enable: Vec<String>,
}

impl PluginsConfig {
    pub const FIELDS: PluginsFields = PluginsFields {
        enable: FieldPath::new("plugins.enable"),
    };

    /// Validate enabled plugin names against the built-in registry.
    pub fn validate(&self, registry: &PluginRegistry, diag: &mut ConfigDiagnostics) {
        for name in &self.enable {
            if !registry.contains(name) {
                diag.error_with_hint(
                    Self::FIELDS.enable,
                    format!("unknown plugin '{name}'"),
                    format!("available plugins: {}", registry.names().join(", ")),
                );
            }
        }
    }
}
