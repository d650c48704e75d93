//! Runtime environment facts for the assembled user agent

use crate::error::CoreResult;
use crate::types::BundleVersion;

/// Reads device, OS and bundle facts from the live environment.
///
/// 平台实现:
/// - Tauri iOS/desktop: `NativeEnvironment` (`uname`, `tauri-plugin-os`, package info)
/// - Tests: `MockEnvironmentProbe`
pub trait EnvironmentProbe: Send + Sync {
    /// App display name and version from the main bundle manifest.
    fn app_bundle(&self) -> CoreResult<BundleVersion>;

    /// `uname` machine field, untrimmed.
    fn machine(&self) -> CoreResult<String>;

    /// OS family name and version, e.g. `iOS` / `17.0`.
    fn os_version(&self) -> CoreResult<BundleVersion>;

    /// Network stack component and its version from its own bundle manifest.
    fn network_stack(&self) -> CoreResult<BundleVersion>;

    /// Fixed kernel family label, e.g. `Darwin`.
    fn kernel_family(&self) -> String;

    /// `uname` release field, untrimmed.
    fn kernel_release(&self) -> CoreResult<String>;
}
