//! 安装包与系统版本相关类型

use serde::{Deserialize, Serialize};

/// Android API level thresholds used by the installer
pub mod sdk {
    /// Android 7.0, content URIs are required for sharing files
    pub const N: u32 = 24;
    /// Android 8.0, per-app "install unknown apps" permission
    pub const O: u32 = 26;
    /// Android 9, `longVersionCode` is available
    pub const P: u32 = 28;
}

/// Raw package metadata as reported by the OS package parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageArchiveInfo {
    pub version_name: Option<String>,
    /// 32-bit `versionCode`, the only field before API 28
    pub version_code: i32,
    /// `longVersionCode`, includes `versionCodeMajor` in the upper bits
    #[serde(default)]
    pub long_version_code: i64,
}

/// 安装包信息（返回给调用方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApkInfo {
    pub version_name: String,
    /// 十进制版本号，与系统版本无关
    pub version_code: String,
}

impl ApkInfo {
    /// Normalize the OS view, picking the field width the running SDK exposes.
    #[must_use]
    pub fn from_archive(info: PackageArchiveInfo, sdk_int: u32) -> Self {
        let version_code = if sdk_int >= sdk::P {
            info.long_version_code.to_string()
        } else {
            info.version_code.to_string()
        };
        Self {
            version_name: info.version_name.unwrap_or_default(),
            version_code,
        }
    }
}

/// Whether the app may install packages from unknown sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// The OS generation has no such permission
    NotApplicable,
    Granted,
    Denied,
}

/// 安装方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStrategy {
    /// Raw `file://` URI, before API 24
    Legacy,
    /// Content URI from the app's `FileProvider`
    FileProvider,
    /// Send the user to the unknown-sources settings screen first
    RequestPermission,
}

impl InstallStrategy {
    /// Whether the permission state must be queried on this SDK.
    #[must_use]
    pub fn needs_permission_check(sdk_int: u32) -> bool {
        sdk_int > sdk::O
    }

    /// Decision table over SDK level and permission state.
    #[must_use]
    pub fn select(sdk_int: u32, permission: PermissionState) -> Self {
        if sdk_int < sdk::N {
            return Self::Legacy;
        }
        match permission {
            PermissionState::NotApplicable | PermissionState::Granted => Self::FileProvider,
            PermissionState::Denied => Self::RequestPermission,
        }
    }
}
