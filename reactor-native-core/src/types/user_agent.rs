//! User agent building blocks

use serde::{Deserialize, Serialize};

/// `name/version` pair read from a bundle manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleVersion {
    pub name: String,
    pub version: String,
}

impl BundleVersion {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for BundleVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Environment facts that make up the assembled user agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentComponents {
    pub app: BundleVersion,
    pub device_model: String,
    pub os: BundleVersion,
    pub network_stack: BundleVersion,
    /// Kernel family label and `uname` release, e.g. `Darwin/22.0.0`
    pub kernel: BundleVersion,
}

impl UserAgentComponents {
    /// Unencoded user agent in the fixed order
    /// `app device os network-stack kernel`.
    #[must_use]
    pub fn to_raw_string(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.app, self.device_model, self.os, self.network_stack, self.kernel
        )
    }

    /// Percent-encoded form, safe to carry as a query component or header value.
    #[must_use]
    pub fn to_encoded_string(&self) -> String {
        urlencoding::encode(&self.to_raw_string()).into_owned()
    }
}

/// Strip the NUL padding and other control characters `uname` fields carry.
#[must_use]
pub fn trim_control(value: &str) -> &str {
    value.trim_matches(char::is_control)
}
