//! Reactor Native Core Library
//!
//! Platform-independent half of the Reactor native glue:
//! - APK installation with SDK- and permission-dependent strategy selection
//! - User agent assembly
//! - `channel:reactor` method dispatch
//!
//! Host OS access is abstracted through traits so the same logic serves the
//! Tauri plugin on Android, iOS and desktop, and the mock hosts in tests.

pub mod channel;
pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use channel::{CHANNEL_NAME, MethodCall, MethodError, MethodResponse, ReactorChannel};
pub use config::InstallerConfig;
pub use error::{CoreError, CoreResult};
pub use services::{ApkInstallerService, AssembledUserAgent, SystemPropertyUserAgent};
pub use traits::{AndroidHost, EnvironmentProbe, UserAgentProvider};
