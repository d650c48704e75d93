//! 安装器配置

use serde::{Deserialize, Serialize};

/// Request code pairing the unknown-sources settings result with the installer
pub const INSTALL_REQUEST_CODE: i32 = 1_470_691;

/// Suffix appended to the package name to form the `FileProvider` authority
pub const DEFAULT_FILE_PROVIDER_SUFFIX: &str = ".install";

/// Installer configuration, read from the plugin section of the app config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallerConfig {
    /// Correlation token for the consent screen result
    pub request_code: i32,
    /// `FileProvider` authority suffix declared in the Android manifest
    pub file_provider_suffix: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            request_code: INSTALL_REQUEST_CODE,
            file_provider_suffix: DEFAULT_FILE_PROVIDER_SUFFIX.to_string(),
        }
    }
}

impl InstallerConfig {
    /// `FileProvider` authority for the given application id.
    #[must_use]
    pub fn file_provider_authority(&self, package_name: &str) -> String {
        format!("{package_name}{}", self.file_provider_suffix)
    }
}
