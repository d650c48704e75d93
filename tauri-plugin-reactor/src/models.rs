//! Payloads exchanged with the Kotlin side of the plugin
//!
//! `ReactorPlugin` (Kotlin) exposes these commands:
//!
//! | Command | Request | Response |
//! |---|---|---|
//! | `getSdkInt` | none | [`SdkIntResponse`] |
//! | `getPackageName` | none | [`PackageNameResponse`] |
//! | `canRequestPackageInstalls` | none | [`CanRequestPackageInstallsResponse`] |
//! | `getUriForFile` | [`UriForFileRequest`] | [`UriResponse`] |
//! | `startActivity` | [`StartActivityRequest`] | empty |
//! | `startActivityForResult` | [`StartActivityForResultRequest`] | empty, then [`ActivityResultResponse`] on `onResult` |
//! | `getPackageArchiveInfo` | [`PathRequest`] | [`PackageArchiveInfoResponse`] |
//! | `getSystemProperty` | [`SystemPropertyRequest`] | [`SystemPropertyResponse`] |

use reactor_native_core::types::{ActivityResult, Intent, PackageArchiveInfo};
use serde::{Deserialize, Serialize};
use tauri::ipc::{Channel, InvokeResponseBody};

pub const PLUGIN_IDENTIFIER: &str = "ru.alimzanibekov.reactor.plugin";
pub const PLUGIN_CLASS: &str = "ReactorPlugin";

/// Kotlin command names
pub mod command {
    pub const GET_SDK_INT: &str = "getSdkInt";
    pub const GET_PACKAGE_NAME: &str = "getPackageName";
    pub const CAN_REQUEST_PACKAGE_INSTALLS: &str = "canRequestPackageInstalls";
    pub const GET_URI_FOR_FILE: &str = "getUriForFile";
    pub const START_ACTIVITY: &str = "startActivity";
    pub const START_ACTIVITY_FOR_RESULT: &str = "startActivityForResult";
    pub const GET_PACKAGE_ARCHIVE_INFO: &str = "getPackageArchiveInfo";
    pub const GET_SYSTEM_PROPERTY: &str = "getSystemProperty";

    pub const ALL: [&str; 8] = [
        GET_SDK_INT,
        GET_PACKAGE_NAME,
        CAN_REQUEST_PACKAGE_INSTALLS,
        GET_URI_FOR_FILE,
        START_ACTIVITY,
        START_ACTIVITY_FOR_RESULT,
        GET_PACKAGE_ARCHIVE_INFO,
        GET_SYSTEM_PROPERTY,
    ];
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkIntResponse {
    pub sdk_int: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageNameResponse {
    pub package_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanRequestPackageInstallsResponse {
    pub allowed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriForFileRequest {
    pub authority: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriResponse {
    pub uri: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartActivityRequest {
    pub intent: Intent,
}

/// The Kotlin call resolves once the activity is launched; the result code
/// arrives later on `on_result`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartActivityForResultRequest {
    pub intent: Intent,
    pub request_code: i32,
    pub on_result: Channel,
}

/// Message sent on `on_result` when the launched activity finishes
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResultResponse {
    pub result_code: i32,
}

/// Decode an `on_result` message into the result for `request_code`.
pub fn decode_activity_result(
    request_code: i32,
    body: &InvokeResponseBody,
) -> serde_json::Result<ActivityResult> {
    let response: ActivityResultResponse = match body {
        InvokeResponseBody::Json(json) => serde_json::from_str(json)?,
        InvokeResponseBody::Raw(bytes) => serde_json::from_slice(bytes)?,
    };
    Ok(ActivityResult {
        request_code,
        result_code: response.result_code,
    })
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageArchiveInfoResponse {
    /// `None` when `getPackageArchiveInfo` returned null
    pub info: Option<PackageArchiveInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPropertyRequest {
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPropertyResponse {
    pub value: Option<String>,
}
