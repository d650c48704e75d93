//! 插件配置（`tauri.conf.json` 中的 `plugins.reactor`）

use reactor_native_core::InstallerConfig;
use reactor_native_core::types::BundleVersion;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    pub installer: InstallerConfig,
    /// Overrides the network stack reported in the assembled user agent
    pub network_stack: Option<BundleVersion>,
}

impl PluginConfig {
    /// Network stack to report, defaulting to the bundled Tauri version.
    #[must_use]
    pub fn network_stack(&self) -> BundleVersion {
        self.network_stack
            .clone()
            .unwrap_or_else(|| BundleVersion::new("Tauri", tauri::VERSION))
    }
}
