//! 业务逻辑服务层

mod apk_installer_service;
mod user_agent_service;

pub use apk_installer_service::{ActivityResultOutcome, ApkInstallerService};
pub use user_agent_service::{AssembledUserAgent, HTTP_AGENT_PROPERTY, SystemPropertyUserAgent};
