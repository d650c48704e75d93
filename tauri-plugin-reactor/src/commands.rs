use reactor_native_core::channel::Method;
use reactor_native_core::types::ApkInfo;
use reactor_native_core::{MethodCall, MethodResponse};
use serde_json::{Value, json};
use tauri::{AppHandle, Runtime, command};

use crate::ReactorExt;

/// Raw channel call: `{ method, arguments }` in, tagged `MethodResponse` out
#[command]
pub async fn invoke<R: Runtime>(
    app: AppHandle<R>,
    method: String,
    arguments: Option<Value>,
) -> MethodResponse {
    app.reactor()
        .call(MethodCall::new(method, arguments.unwrap_or_default()))
        .await
}

#[command]
pub async fn get_user_agent<R: Runtime>(app: AppHandle<R>) -> crate::Result<String> {
    app.reactor()
        .call_typed(MethodCall::new(Method::GetUserAgent.as_str(), Value::Null))
        .await
}

/// 安装 APK 文件
///
/// Resolves once the installer or the permission screen has been launched.
#[command]
pub async fn install_apk<R: Runtime>(app: AppHandle<R>, path: String) -> crate::Result<()> {
    let _: bool = app
        .reactor()
        .call_typed(MethodCall::new(
            Method::InstallApk.as_str(),
            json!({ "filePath": path }),
        ))
        .await?;
    Ok(())
}

#[command]
pub async fn get_apk_info<R: Runtime>(app: AppHandle<R>, path: String) -> crate::Result<ApkInfo> {
    app.reactor()
        .call_typed(MethodCall::new(
            Method::GetApkInfo.as_str(),
            json!({ "filePath": path }),
        ))
        .await
}
