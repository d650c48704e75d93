//! 类型定义模块

mod intent;
mod package;
mod user_agent;

pub use intent::{
    ACTION_MANAGE_UNKNOWN_APP_SOURCES, ACTION_VIEW, APK_MIME_TYPE, ActivityResult,
    EXTRA_RETURN_RESULT, FLAG_ACTIVITY_NEW_TASK, FLAG_GRANT_READ_URI_PERMISSION, Intent,
    RESULT_CANCELED, RESULT_OK,
};
pub use package::{ApkInfo, InstallStrategy, PackageArchiveInfo, PermissionState, sdk};
pub use user_agent::{BundleVersion, UserAgentComponents, trim_control};
