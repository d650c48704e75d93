//! APK 安装服务
//!
//! Picks one of three install mechanisms from the SDK level and the
//! unknown-sources permission, and defers installs behind the consent screen.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::InstallerConfig;
use crate::error::{CoreError, CoreResult};
use crate::traits::AndroidHost;
use crate::types::{
    ACTION_MANAGE_UNKNOWN_APP_SOURCES, ActivityResult, ApkInfo, EXTRA_RETURN_RESULT,
    FLAG_ACTIVITY_NEW_TASK, FLAG_GRANT_READ_URI_PERMISSION, InstallStrategy, Intent,
    PermissionState, sdk,
};

/// What happened to the pending queue when an activity result arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityResultOutcome {
    /// Request code belongs to someone else; queue untouched
    Ignored,
    /// Consent granted; queued files were handed to the package installer
    Installed { installed: usize, failed: usize },
    /// Consent denied or dismissed; queued files discarded
    Dropped(usize),
}

/// APK 安装服务
pub struct ApkInstallerService {
    host: Arc<dyn AndroidHost>,
    config: InstallerConfig,
    /// Files waiting for the unknown-sources consent result
    pending: Mutex<Vec<PathBuf>>,
}

impl ApkInstallerService {
    /// 创建安装服务实例
    #[must_use]
    pub fn new(host: Arc<dyn AndroidHost>, config: InstallerConfig) -> Self {
        Self {
            host,
            config,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Correlation token used for the consent screen.
    #[must_use]
    pub fn request_code(&self) -> i32 {
        self.config.request_code
    }

    /// Number of files waiting for consent.
    pub async fn pending_len(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// 安装 APK 文件
    ///
    /// Resolves as soon as the OS hand-off succeeds. With the
    /// [`InstallStrategy::RequestPermission`] strategy the actual install only
    /// starts after [`Self::handle_activity_result`] receives a matching OK result.
    pub async fn install_apk(&self, file_path: &str) -> CoreResult<InstallStrategy> {
        let path = PathBuf::from(file_path);
        if !file_exists(&path).await {
            return Err(CoreError::FileNotFound(file_path.to_string()));
        }

        let strategy = self.select_strategy().await?;
        log::debug!(
            "Installing {file_path} with {strategy:?} (SDK {})",
            self.host.sdk_int()
        );

        match strategy {
            InstallStrategy::Legacy => self.install_legacy(&path).await?,
            InstallStrategy::FileProvider => self.install_with_file_provider(&path).await?,
            InstallStrategy::RequestPermission => self.request_install_permission(path).await?,
        }

        Ok(strategy)
    }

    /// Resume deferred installs once the consent screen reports back.
    pub async fn handle_activity_result(&self, result: ActivityResult) -> ActivityResultOutcome {
        if result.request_code != self.config.request_code {
            return ActivityResultOutcome::Ignored;
        }

        let files = std::mem::take(&mut *self.pending.lock().await);

        if !result.is_ok() {
            if !files.is_empty() {
                log::warn!(
                    "Install permission not granted (result {}), dropping {} pending install(s)",
                    result.result_code,
                    files.len()
                );
            }
            return ActivityResultOutcome::Dropped(files.len());
        }

        let mut installed = 0;
        let mut failed = 0;
        for file in &files {
            match self.install_with_file_provider(file).await {
                Ok(()) => installed += 1,
                Err(e) => {
                    log::error!("Deferred install of {} failed: {e}", file.display());
                    failed += 1;
                }
            }
        }

        ActivityResultOutcome::Installed { installed, failed }
    }

    /// 读取安装包信息（不安装）
    pub async fn get_apk_info(&self, file_path: &str) -> CoreResult<ApkInfo> {
        let path = Path::new(file_path);
        if !file_exists(path).await {
            return Err(CoreError::ParseFailure(format!("{file_path}: no such file")));
        }

        let info = self
            .host
            .package_archive_info(path)
            .await?
            .ok_or_else(|| CoreError::ParseFailure(file_path.to_string()))?;

        Ok(ApkInfo::from_archive(info, self.host.sdk_int()))
    }

    async fn select_strategy(&self) -> CoreResult<InstallStrategy> {
        let sdk_int = self.host.sdk_int();
        let permission = if !InstallStrategy::needs_permission_check(sdk_int) {
            PermissionState::NotApplicable
        } else if self.host.can_request_package_installs().await? {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };
        Ok(InstallStrategy::select(sdk_int, permission))
    }

    async fn install_legacy(&self, path: &Path) -> CoreResult<()> {
        let intent = Intent::view_package(file_uri(path));
        log::info!("Launching package installer for {}", path.display());
        self.host.start_activity(&intent).await
    }

    async fn install_with_file_provider(&self, path: &Path) -> CoreResult<()> {
        let authority = self
            .config
            .file_provider_authority(self.host.package_name());
        let uri = self.host.uri_for_file(&authority, path).await?;
        let intent = Intent::view_package(uri).add_flags(FLAG_GRANT_READ_URI_PERMISSION);
        log::info!("Launching package installer for {}", path.display());
        self.host.start_activity(&intent).await
    }

    async fn request_install_permission(&self, path: PathBuf) -> CoreResult<()> {
        let sdk_int = self.host.sdk_int();
        if sdk_int < sdk::O {
            return Err(CoreError::UnsupportedOsVersion(format!(
                "SDK {sdk_int} has no unknown-sources settings screen (requires {})",
                sdk::O
            )));
        }

        let intent = Intent::new(ACTION_MANAGE_UNKNOWN_APP_SOURCES)
            .with_data(format!("package:{}", self.host.package_name()))
            .put_extra(EXTRA_RETURN_RESULT, true)
            .add_flags(FLAG_ACTIVITY_NEW_TASK);

        self.pending.lock().await.push(path.clone());
        log::info!(
            "Install permission missing, deferring {} until the user allows it",
            path.display()
        );

        if let Err(e) = self
            .host
            .start_activity_for_result(&intent, self.config.request_code)
            .await
        {
            let mut pending = self.pending.lock().await;
            if let Some(pos) = pending.iter().rposition(|p| *p == path) {
                pending.remove(pos);
            }
            return Err(e);
        }

        Ok(())
    }
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// `file://` URI for a local path, as `Uri.fromFile` builds it.
fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let encoded = absolute
        .to_string_lossy()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("file://{encoded}")
}
