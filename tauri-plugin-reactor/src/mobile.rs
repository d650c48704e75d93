use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reactor_native_core::types::{ActivityResult, Intent, PackageArchiveInfo};
use reactor_native_core::{AndroidHost, ApkInstallerService, CoreError, CoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tauri::{
    Runtime,
    ipc::Channel,
    plugin::{PluginApi, PluginHandle},
};
use tokio::sync::mpsc;

use crate::config::PluginConfig;
use crate::models::{
    CanRequestPackageInstallsResponse, PLUGIN_CLASS, PLUGIN_IDENTIFIER,
    PackageArchiveInfoResponse, PackageNameResponse, PathRequest, SdkIntResponse,
    StartActivityForResultRequest, StartActivityRequest, SystemPropertyRequest,
    SystemPropertyResponse, UriForFileRequest, UriResponse, command, decode_activity_result,
};

/// Android 宿主实现，转发到 Kotlin `ReactorPlugin`
pub struct AndroidBridge<R: Runtime> {
    handle: PluginHandle<R>,
    sdk_int: u32,
    package_name: String,
    results: mpsc::UnboundedSender<ActivityResult>,
}

impl<R: Runtime> AndroidBridge<R> {
    /// Register the Kotlin plugin and read the static device facts once.
    ///
    /// The receiver yields every result of `startActivityForResult`.
    pub fn register(
        api: PluginApi<R, Option<PluginConfig>>,
    ) -> crate::Result<(Self, mpsc::UnboundedReceiver<ActivityResult>)> {
        let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, PLUGIN_CLASS)?;
        let SdkIntResponse { sdk_int }: SdkIntResponse =
            handle.run_mobile_plugin(command::GET_SDK_INT, ())?;
        let PackageNameResponse { package_name }: PackageNameResponse =
            handle.run_mobile_plugin(command::GET_PACKAGE_NAME, ())?;
        log::info!("Android bridge ready: {package_name} on SDK {sdk_int}");

        let (results, receiver) = mpsc::unbounded_channel();
        Ok((
            Self {
                handle,
                sdk_int,
                package_name,
                results,
            },
            receiver,
        ))
    }

    fn run<T: DeserializeOwned>(&self, command: &str, payload: impl Serialize) -> CoreResult<T> {
        self.handle
            .run_mobile_plugin(command, payload)
            .map_err(|e| CoreError::OsInvocationError(e.to_string()))
    }
}

#[async_trait]
impl<R: Runtime> AndroidHost for AndroidBridge<R> {
    fn sdk_int(&self) -> u32 {
        self.sdk_int
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    async fn can_request_package_installs(&self) -> CoreResult<bool> {
        let response: CanRequestPackageInstallsResponse =
            self.run(command::CAN_REQUEST_PACKAGE_INSTALLS, ())?;
        Ok(response.allowed)
    }

    async fn uri_for_file(&self, authority: &str, path: &Path) -> CoreResult<String> {
        let response: UriResponse = self.run(
            command::GET_URI_FOR_FILE,
            UriForFileRequest {
                authority: authority.to_string(),
                path: path.to_string_lossy().into_owned(),
            },
        )?;
        Ok(response.uri)
    }

    async fn start_activity(&self, intent: &Intent) -> CoreResult<()> {
        self.run::<serde_json::Value>(
            command::START_ACTIVITY,
            StartActivityRequest {
                intent: intent.clone(),
            },
        )?;
        Ok(())
    }

    async fn start_activity_for_result(
        &self,
        intent: &Intent,
        request_code: i32,
    ) -> CoreResult<()> {
        let results = self.results.clone();
        let on_result = Channel::new(move |body| {
            match decode_activity_result(request_code, &body) {
                Ok(result) => {
                    if results.send(result).is_err() {
                        log::warn!("Activity result {request_code} arrived after shutdown");
                    }
                }
                Err(e) => log::error!("Malformed activity result for {request_code}: {e}"),
            }
            Ok(())
        });

        // Resolves once the activity is launched; launch failures surface here
        self.run::<serde_json::Value>(
            command::START_ACTIVITY_FOR_RESULT,
            StartActivityForResultRequest {
                intent: intent.clone(),
                request_code,
                on_result,
            },
        )?;
        Ok(())
    }

    async fn package_archive_info(&self, path: &Path) -> CoreResult<Option<PackageArchiveInfo>> {
        let response: PackageArchiveInfoResponse = self
            .run(
                command::GET_PACKAGE_ARCHIVE_INFO,
                PathRequest {
                    path: path.to_string_lossy().into_owned(),
                },
            )
            .map_err(|e| CoreError::ParseFailure(e.to_string()))?;
        Ok(response.info)
    }

    async fn system_property(&self, key: &str) -> CoreResult<Option<String>> {
        let response: SystemPropertyResponse = self.run(
            command::GET_SYSTEM_PROPERTY,
            SystemPropertyRequest {
                key: key.to_string(),
            },
        )?;
        Ok(response.value)
    }
}

/// Feed activity results into the installer for the lifetime of the app.
pub fn spawn_result_listener(
    installer: Arc<ApkInstallerService>,
    mut results: mpsc::UnboundedReceiver<ActivityResult>,
) {
    tauri::async_runtime::spawn(async move {
        while let Some(result) = results.recv().await {
            let outcome = installer.handle_activity_result(result).await;
            log::debug!("Activity result {result:?}: {outcome:?}");
        }
    });
}
