//! Environment probe backed by the running process: `uname`, `tauri-plugin-os`
//! and the app's package info.

use reactor_native_core::types::BundleVersion;
use reactor_native_core::{CoreError, CoreResult, EnvironmentProbe};

/// 本机环境探测
pub struct NativeEnvironment {
    app: BundleVersion,
    network_stack: BundleVersion,
}

impl NativeEnvironment {
    #[must_use]
    pub fn new(app: BundleVersion, network_stack: BundleVersion) -> Self {
        Self { app, network_stack }
    }
}

impl EnvironmentProbe for NativeEnvironment {
    fn app_bundle(&self) -> CoreResult<BundleVersion> {
        if self.app.name.is_empty() || self.app.version.is_empty() {
            return Err(CoreError::ManifestUnavailable("main bundle".to_string()));
        }
        Ok(self.app.clone())
    }

    fn machine(&self) -> CoreResult<String> {
        #[cfg(unix)]
        {
            let uts = nix::sys::utsname::uname()
                .map_err(|e| CoreError::OsInvocationError(format!("uname: {e}")))?;
            Ok(uts.machine().to_string_lossy().into_owned())
        }

        #[cfg(not(unix))]
        {
            Ok(tauri_plugin_os::arch().to_string())
        }
    }

    fn os_version(&self) -> CoreResult<BundleVersion> {
        Ok(BundleVersion::new(
            os_display_name(tauri_plugin_os::platform()),
            tauri_plugin_os::version().to_string(),
        ))
    }

    fn network_stack(&self) -> CoreResult<BundleVersion> {
        if self.network_stack.version.is_empty() {
            return Err(CoreError::ManifestUnavailable(format!(
                "{} version",
                self.network_stack.name
            )));
        }
        Ok(self.network_stack.clone())
    }

    fn kernel_family(&self) -> String {
        kernel_family().to_string()
    }

    fn kernel_release(&self) -> CoreResult<String> {
        #[cfg(unix)]
        {
            let uts = nix::sys::utsname::uname()
                .map_err(|e| CoreError::OsInvocationError(format!("uname: {e}")))?;
            Ok(uts.release().to_string_lossy().into_owned())
        }

        #[cfg(not(unix))]
        {
            Ok(tauri_plugin_os::version().to_string())
        }
    }
}

/// OS name as the platform itself spells it (`UIDevice.systemName` style).
fn os_display_name(platform: &str) -> String {
    match platform {
        "ios" => "iOS".to_string(),
        "macos" => "macOS".to_string(),
        "android" => "Android".to_string(),
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => other.to_string(),
    }
}

fn kernel_family() -> &'static str {
    if cfg!(any(target_os = "ios", target_os = "macos")) {
        "Darwin"
    } else if cfg!(target_os = "windows") {
        "WindowsNT"
    } else {
        "Linux"
    }
}
