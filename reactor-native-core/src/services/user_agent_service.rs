//! User agent providers

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::{AndroidHost, EnvironmentProbe, UserAgentProvider};
use crate::types::{BundleVersion, UserAgentComponents, trim_control};

/// JVM system property holding the default HTTP user agent
pub const HTTP_AGENT_PROPERTY: &str = "http.agent";

/// Returns the OS-maintained `http.agent` verbatim.
pub struct SystemPropertyUserAgent {
    host: Arc<dyn AndroidHost>,
}

impl SystemPropertyUserAgent {
    #[must_use]
    pub fn new(host: Arc<dyn AndroidHost>) -> Self {
        Self { host }
    }
}

#[async_trait]
impl UserAgentProvider for SystemPropertyUserAgent {
    async fn user_agent(&self) -> CoreResult<String> {
        match self.host.system_property(HTTP_AGENT_PROPERTY).await {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(e) => {
                log::warn!("Failed to read {HTTP_AGENT_PROPERTY}: {e}");
                Ok(String::new())
            }
        }
    }
}

/// Builds the user agent from bundle, device and kernel facts, percent-encoded.
pub struct AssembledUserAgent {
    probe: Arc<dyn EnvironmentProbe>,
}

impl AssembledUserAgent {
    #[must_use]
    pub fn new(probe: Arc<dyn EnvironmentProbe>) -> Self {
        Self { probe }
    }

    /// Collect the components in user-agent order. Missing manifests are fatal.
    pub fn components(&self) -> CoreResult<UserAgentComponents> {
        let app = self.probe.app_bundle()?;
        let device_model = trim_control(&self.probe.machine()?).to_string();
        let os = self.probe.os_version()?;
        let network_stack = self.probe.network_stack()?;
        let release = trim_control(&self.probe.kernel_release()?).to_string();
        let kernel = BundleVersion::new(self.probe.kernel_family(), release);

        Ok(UserAgentComponents {
            app,
            device_model,
            os,
            network_stack,
            kernel,
        })
    }
}

#[async_trait]
impl UserAgentProvider for AssembledUserAgent {
    async fn user_agent(&self) -> CoreResult<String> {
        Ok(self.components()?.to_encoded_string())
    }
}
