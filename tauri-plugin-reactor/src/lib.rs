//! Tauri Reactor Plugin
//!
//! Exposes `channel:reactor`: installs APK files on Android through the
//! SDK-appropriate mechanism and reports the app's user agent on every platform.

use std::sync::Arc;

use reactor_native_core::{MethodCall, MethodError, MethodResponse, ReactorChannel};
use tauri::{
    AppHandle, Manager, Runtime,
    plugin::{Builder, PluginApi, TauriPlugin},
};

mod commands;
mod config;
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
mod models;

#[cfg(target_os = "android")]
mod mobile;
#[cfg(not(target_os = "android"))]
mod native;

pub use config::PluginConfig;
pub use models::*;

/// 插件错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(target_os = "android")]
    #[error("Plugin invoke error: {0}")]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),

    #[error(transparent)]
    Method(#[from] MethodError),

    #[error("Unexpected channel result: {0}")]
    UnexpectedResult(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

/// Managed state holding the channel handler
pub struct Reactor {
    channel: ReactorChannel,
}

impl Reactor {
    fn new(channel: ReactorChannel) -> Self {
        Self { channel }
    }

    /// Dispatch one call through `channel:reactor`.
    pub async fn call(&self, call: MethodCall) -> MethodResponse {
        self.channel.handle(call).await
    }

    /// Dispatch and decode a successful result.
    pub async fn call_typed<T: serde::de::DeserializeOwned>(&self, call: MethodCall) -> Result<T> {
        let value = self.call(call).await.into_result()?;
        Ok(serde_json::from_value(value)?)
    }
}

/// 为 AppHandle 扩展 Reactor 方法
pub trait ReactorExt<R: Runtime> {
    fn reactor(&self) -> &Reactor;
}

impl<R: Runtime, T: Manager<R>> ReactorExt<R> for T {
    fn reactor(&self) -> &Reactor {
        self.state::<Reactor>().inner()
    }
}

#[cfg(target_os = "android")]
fn build_channel<R: Runtime>(
    _app: &AppHandle<R>,
    api: PluginApi<R, Option<PluginConfig>>,
) -> Result<ReactorChannel> {
    use reactor_native_core::{ApkInstallerService, SystemPropertyUserAgent};

    let config = api.config().clone().unwrap_or_default();
    let (bridge, results) = mobile::AndroidBridge::register(api)?;
    let bridge = Arc::new(bridge);

    let installer = Arc::new(ApkInstallerService::new(bridge.clone(), config.installer));
    mobile::spawn_result_listener(installer.clone(), results);

    Ok(
        ReactorChannel::new(Arc::new(SystemPropertyUserAgent::new(bridge)))
            .with_installer(installer),
    )
}

#[cfg(not(target_os = "android"))]
fn build_channel<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<PluginConfig>>,
) -> Result<ReactorChannel> {
    use reactor_native_core::AssembledUserAgent;
    use reactor_native_core::types::BundleVersion;

    let config = api.config().clone().unwrap_or_default();
    let package_info = app.package_info();
    let environment = native::NativeEnvironment::new(
        BundleVersion::new(package_info.name.clone(), package_info.version.to_string()),
        config.network_stack(),
    );

    Ok(ReactorChannel::new(Arc::new(AssembledUserAgent::new(
        Arc::new(environment),
    ))))
}

/// 初始化插件
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<PluginConfig>> {
    Builder::<R, Option<PluginConfig>>::new("reactor")
        .invoke_handler(tauri::generate_handler![
            commands::invoke,
            commands::get_user_agent,
            commands::install_apk,
            commands::get_apk_info
        ])
        .setup(|app, api| {
            let channel = build_channel(app, api)?;
            log::debug!("{} registered", channel.name());
            app.manage(Reactor::new(channel));
            Ok(())
        })
        .build()
}
