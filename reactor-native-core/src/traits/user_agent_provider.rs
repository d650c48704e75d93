//! User agent provider Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Source of the user agent string answered on `getUserAgent`.
///
/// 实现:
/// - `SystemPropertyUserAgent`: OS-maintained `http.agent` (Android)
/// - `AssembledUserAgent`: built from environment facts (iOS and native targets)
#[async_trait]
pub trait UserAgentProvider: Send + Sync {
    async fn user_agent(&self) -> CoreResult<String>;
}
