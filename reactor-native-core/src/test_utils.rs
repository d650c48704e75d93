//! 测试辅助模块
//!
//! 提供 mock 宿主实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::InstallerConfig;
use crate::error::{CoreError, CoreResult};
use crate::services::ApkInstallerService;
use crate::traits::{AndroidHost, EnvironmentProbe};
use crate::types::{BundleVersion, Intent, PackageArchiveInfo};

pub const TEST_PACKAGE_NAME: &str = "ru.alimzanibekov.reactor";

// ===== MockAndroidHost =====

/// An intent the mock was asked to start
#[derive(Debug, Clone)]
pub struct LaunchedIntent {
    pub intent: Intent,
    pub request_code: Option<i32>,
}

pub struct MockAndroidHost {
    sdk_int: u32,
    can_install: AtomicBool,
    permission_checks: AtomicUsize,
    launched: RwLock<Vec<LaunchedIntent>>,
    /// 如果 Some，启动 Activity 时返回此错误
    launch_error: RwLock<Option<String>>,
    archive_info: RwLock<Option<PackageArchiveInfo>>,
    properties: RwLock<HashMap<String, String>>,
}

impl MockAndroidHost {
    pub fn new(sdk_int: u32) -> Self {
        Self {
            sdk_int,
            can_install: AtomicBool::new(true),
            permission_checks: AtomicUsize::new(0),
            launched: RwLock::new(Vec::new()),
            launch_error: RwLock::new(None),
            archive_info: RwLock::new(None),
            properties: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_can_install(&self, allowed: bool) {
        self.can_install.store(allowed, Ordering::SeqCst);
    }

    pub fn permission_checks(&self) -> usize {
        self.permission_checks.load(Ordering::SeqCst)
    }

    pub async fn set_launch_error(&self, err: Option<&str>) {
        *self.launch_error.write().await = err.map(str::to_string);
    }

    pub async fn set_archive_info(&self, info: Option<PackageArchiveInfo>) {
        *self.archive_info.write().await = info;
    }

    pub async fn set_system_property(&self, key: &str, value: &str) {
        self.properties
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn launched(&self) -> Vec<LaunchedIntent> {
        self.launched.read().await.clone()
    }

    async fn record(&self, intent: &Intent, request_code: Option<i32>) -> CoreResult<()> {
        if let Some(ref msg) = *self.launch_error.read().await {
            return Err(CoreError::OsInvocationError(msg.clone()));
        }
        self.launched.write().await.push(LaunchedIntent {
            intent: intent.clone(),
            request_code,
        });
        Ok(())
    }
}

#[async_trait]
impl AndroidHost for MockAndroidHost {
    fn sdk_int(&self) -> u32 {
        self.sdk_int
    }

    fn package_name(&self) -> &str {
        TEST_PACKAGE_NAME
    }

    async fn can_request_package_installs(&self) -> CoreResult<bool> {
        self.permission_checks.fetch_add(1, Ordering::SeqCst);
        Ok(self.can_install.load(Ordering::SeqCst))
    }

    async fn uri_for_file(&self, authority: &str, path: &Path) -> CoreResult<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(format!("content://{authority}/{name}"))
    }

    async fn start_activity(&self, intent: &Intent) -> CoreResult<()> {
        self.record(intent, None).await
    }

    async fn start_activity_for_result(
        &self,
        intent: &Intent,
        request_code: i32,
    ) -> CoreResult<()> {
        self.record(intent, Some(request_code)).await
    }

    async fn package_archive_info(&self, _path: &Path) -> CoreResult<Option<PackageArchiveInfo>> {
        Ok(self.archive_info.read().await.clone())
    }

    async fn system_property(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.properties.read().await.get(key).cloned())
    }
}

// ===== MockEnvironmentProbe =====

pub struct MockEnvironmentProbe {
    pub app: Option<BundleVersion>,
    pub machine: String,
    pub os: BundleVersion,
    pub network_stack: Option<BundleVersion>,
    pub kernel_family: String,
    pub kernel_release: String,
}

impl MockEnvironmentProbe {
    /// uname fields carry NUL padding the way the kernel returns them
    pub fn iphone() -> Self {
        Self {
            app: Some(BundleVersion::new("Reactor", "1.2.0")),
            machine: "iPhone14,5\0\0\0\0".to_string(),
            os: BundleVersion::new("iOS", "17.0"),
            network_stack: Some(BundleVersion::new("CFNetwork", "1406")),
            kernel_family: "Darwin".to_string(),
            kernel_release: "22.0.0\0\0".to_string(),
        }
    }
}

impl EnvironmentProbe for MockEnvironmentProbe {
    fn app_bundle(&self) -> CoreResult<BundleVersion> {
        self.app
            .clone()
            .ok_or_else(|| CoreError::ManifestUnavailable("main bundle".to_string()))
    }

    fn machine(&self) -> CoreResult<String> {
        Ok(self.machine.clone())
    }

    fn os_version(&self) -> CoreResult<BundleVersion> {
        Ok(self.os.clone())
    }

    fn network_stack(&self) -> CoreResult<BundleVersion> {
        self.network_stack
            .clone()
            .ok_or_else(|| CoreError::ManifestUnavailable("network stack".to_string()))
    }

    fn kernel_family(&self) -> String {
        self.kernel_family.clone()
    }

    fn kernel_release(&self) -> CoreResult<String> {
        Ok(self.kernel_release.clone())
    }
}

// ===== 工厂方法 =====

pub fn create_installer(host: &Arc<MockAndroidHost>) -> ApkInstallerService {
    ApkInstallerService::new(host.clone(), InstallerConfig::default())
}

/// 在临时目录中创建 `app.apk`，返回目录守卫和文件路径
#[allow(clippy::unwrap_used)]
pub fn temp_apk() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.apk");
    std::fs::write(&path, b"PK\x03\x04").unwrap();
    (dir, path.to_string_lossy().into_owned())
}
