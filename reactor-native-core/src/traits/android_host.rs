//! Android 宿主抽象 Trait

use std::path::Path;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Intent, PackageArchiveInfo};

/// Android 宿主 Trait
///
/// The OS surface the installer needs from the host activity.
///
/// 平台实现:
/// - Tauri Android: `AndroidBridge` (Kotlin plugin via `run_mobile_plugin`)
/// - Tests: `MockAndroidHost`
#[async_trait]
pub trait AndroidHost: Send + Sync {
    /// `Build.VERSION.SDK_INT`
    fn sdk_int(&self) -> u32;

    /// Application id of the running app
    fn package_name(&self) -> &str;

    /// `PackageManager.canRequestPackageInstalls()`
    ///
    /// Only called on SDK levels where the permission exists.
    async fn can_request_package_installs(&self) -> CoreResult<bool>;

    /// Mint a content URI for `path` through the `FileProvider` registered under `authority`.
    async fn uri_for_file(&self, authority: &str, path: &Path) -> CoreResult<String>;

    /// Start an activity; failures surface as `OsInvocationError`.
    async fn start_activity(&self, intent: &Intent) -> CoreResult<()>;

    /// Start an activity whose result is delivered later with `request_code`.
    ///
    /// Returns once the launch is handed to the OS, not when the activity finishes.
    async fn start_activity_for_result(&self, intent: &Intent, request_code: i32)
    -> CoreResult<()>;

    /// Parse a package archive without installing it.
    ///
    /// # Returns
    /// * `Ok(Some(info))` - the archive was parsed
    /// * `Ok(None)` - the OS could not parse it
    async fn package_archive_info(&self, path: &Path) -> CoreResult<Option<PackageArchiveInfo>>;

    /// Read a JVM system property such as `http.agent`.
    async fn system_property(&self, key: &str) -> CoreResult<Option<String>>;
}
