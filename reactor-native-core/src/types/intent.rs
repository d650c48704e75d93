//! OS intent description passed to the host for launching

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `Intent.ACTION_VIEW`
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";
/// `Settings.ACTION_MANAGE_UNKNOWN_APP_SOURCES`
pub const ACTION_MANAGE_UNKNOWN_APP_SOURCES: &str = "android.settings.MANAGE_UNKNOWN_APP_SOURCES";
/// `Intent.EXTRA_RETURN_RESULT`
pub const EXTRA_RETURN_RESULT: &str = "android.intent.extra.RETURN_RESULT";

/// `Intent.FLAG_ACTIVITY_NEW_TASK`
pub const FLAG_ACTIVITY_NEW_TASK: u32 = 0x1000_0000;
/// `Intent.FLAG_GRANT_READ_URI_PERMISSION`
pub const FLAG_GRANT_READ_URI_PERMISSION: u32 = 0x0000_0001;

/// MIME type of an Android package archive
pub const APK_MIME_TYPE: &str = "application/vnd.android.package-archive";

/// `Activity.RESULT_OK`
pub const RESULT_OK: i32 = -1;
/// `Activity.RESULT_CANCELED`
pub const RESULT_CANCELED: i32 = 0;

/// Intent to be started by the host activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub flags: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Intent {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: None,
            mime_type: None,
            flags: 0,
            extras: BTreeMap::new(),
        }
    }

    /// `ACTION_VIEW` on a package archive URI, launched in a new task.
    #[must_use]
    pub fn view_package(uri: impl Into<String>) -> Self {
        Self::new(ACTION_VIEW)
            .with_data_and_type(uri, APK_MIME_TYPE)
            .add_flags(FLAG_ACTIVITY_NEW_TASK)
    }

    #[must_use]
    pub fn with_data(mut self, uri: impl Into<String>) -> Self {
        self.data = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_data_and_type(mut self, uri: impl Into<String>, mime_type: &str) -> Self {
        self.data = Some(uri.into());
        self.mime_type = Some(mime_type.to_string());
        self
    }

    #[must_use]
    pub fn add_flags(mut self, flags: u32) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn put_extra(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.extras.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag == flag
    }
}

/// Result delivered back to the activity after `startActivityForResult`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResult {
    pub request_code: i32,
    pub result_code: i32,
}

impl ActivityResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_OK
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_view_package_sets_type_and_new_task() {
        let intent = Intent::view_package("file:///sdcard/a.apk");
        assert_eq!(intent.action, ACTION_VIEW);
        assert_eq!(intent.data.as_deref(), Some("file:///sdcard/a.apk"));
        assert_eq!(intent.mime_type.as_deref(), Some(APK_MIME_TYPE));
        assert!(intent.has_flag(FLAG_ACTIVITY_NEW_TASK));
        assert!(!intent.has_flag(FLAG_GRANT_READ_URI_PERMISSION));
    }

    #[test]
    fn test_intent_serializes_camel_case_and_skips_empty() {
        let intent = Intent::new(ACTION_MANAGE_UNKNOWN_APP_SOURCES)
            .with_data("package:ru.example")
            .put_extra(EXTRA_RETURN_RESULT, true);
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["action"], ACTION_MANAGE_UNKNOWN_APP_SOURCES);
        assert_eq!(json["extras"][EXTRA_RETURN_RESULT], true);
        assert!(json.get("mimeType").is_none());
    }

    #[test]
    fn test_activity_result_ok() {
        let ok = ActivityResult {
            request_code: 1,
            result_code: RESULT_OK,
        };
        let cancelled = ActivityResult {
            request_code: 1,
            result_code: RESULT_CANCELED,
        };
        assert!(ok.is_ok());
        assert!(!cancelled.is_ok());
    }
}
