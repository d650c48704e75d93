//! 宿主平台抽象 trait 定义

mod android_host;
mod environment_probe;
mod user_agent_provider;

pub use android_host::AndroidHost;
pub use environment_probe::EnvironmentProbe;
pub use user_agent_provider::UserAgentProvider;
