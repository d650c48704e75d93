//! Method channel dispatch
//!
//! Single entry point for calls crossing the UI embedding boundary. Every
//! [`CoreError`] is turned into a `(code, message)` pair here; nothing below
//! this layer knows about the wire shape.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::{CoreError, CoreResult};
use crate::services::ApkInstallerService;
use crate::traits::UserAgentProvider;

/// Channel name shared by every platform implementation
pub const CHANNEL_NAME: &str = "channel:reactor";

/// Incoming call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    #[must_use]
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Channel reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    Success { result: Value },
    Error { code: String, message: String },
    NotImplemented,
}

impl From<CoreError> for MethodResponse {
    fn from(err: CoreError) -> Self {
        Self::Error {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Non-success reply, for callers that want a `Result`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MethodError {
    #[error("{code}: {message}")]
    Failed { code: String, message: String },

    #[error("Method not implemented")]
    NotImplemented,
}

impl MethodResponse {
    pub fn into_result(self) -> Result<Value, MethodError> {
        match self {
            Self::Success { result } => Ok(result),
            Self::Error { code, message } => Err(MethodError::Failed { code, message }),
            Self::NotImplemented => Err(MethodError::NotImplemented),
        }
    }
}

/// Methods the channel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GetUserAgent,
    InstallApk,
    GetApkInfo,
}

impl Method {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "getUserAgent" => Some(Self::GetUserAgent),
            "installApk" => Some(Self::InstallApk),
            "getApkInfo" => Some(Self::GetApkInfo),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetUserAgent => "getUserAgent",
            Self::InstallApk => "installApk",
            Self::GetApkInfo => "getApkInfo",
        }
    }
}

/// `channel:reactor` handler
///
/// Built without an installer on platforms that only answer `getUserAgent`.
pub struct ReactorChannel {
    user_agent: Arc<dyn UserAgentProvider>,
    installer: Option<Arc<ApkInstallerService>>,
}

impl ReactorChannel {
    #[must_use]
    pub fn new(user_agent: Arc<dyn UserAgentProvider>) -> Self {
        Self {
            user_agent,
            installer: None,
        }
    }

    #[must_use]
    pub fn with_installer(mut self, installer: Arc<ApkInstallerService>) -> Self {
        self.installer = Some(installer);
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    pub fn installer(&self) -> Option<&Arc<ApkInstallerService>> {
        self.installer.as_ref()
    }

    pub async fn handle(&self, call: MethodCall) -> MethodResponse {
        let Some(method) = Method::parse(&call.method) else {
            log::debug!("{CHANNEL_NAME}: method {} not implemented", call.method);
            return MethodResponse::NotImplemented;
        };

        match self.dispatch(method, &call.arguments).await {
            Ok(Some(result)) => MethodResponse::Success { result },
            Ok(None) => MethodResponse::NotImplemented,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{CHANNEL_NAME}: {} failed: {e}", method.as_str());
                } else {
                    log::error!("{CHANNEL_NAME}: {} failed: {e}", method.as_str());
                }
                e.into()
            }
        }
    }

    async fn dispatch(&self, method: Method, arguments: &Value) -> CoreResult<Option<Value>> {
        match method {
            Method::GetUserAgent => {
                let agent = self.user_agent.user_agent().await?;
                Ok(Some(Value::String(agent)))
            }
            Method::InstallApk => {
                let Some(installer) = &self.installer else {
                    return Ok(None);
                };
                let file_path = file_path_argument(arguments)?;
                installer.install_apk(&file_path).await?;
                Ok(Some(Value::Bool(true)))
            }
            Method::GetApkInfo => {
                let Some(installer) = &self.installer else {
                    return Ok(None);
                };
                let file_path = file_path_argument(arguments)?;
                let info = installer.get_apk_info(&file_path).await?;
                let value = serde_json::to_value(info)
                    .map_err(|e| CoreError::ParseFailure(e.to_string()))?;
                Ok(Some(value))
            }
        }
    }
}

fn file_path_argument(arguments: &Value) -> CoreResult<String> {
    match arguments.get("filePath") {
        None | Some(Value::Null) => Err(CoreError::MissingArgument("filePath".to_string())),
        Some(Value::String(path)) => Ok(path.clone()),
        Some(other) => Err(CoreError::InvalidArgument(format!(
            "filePath must be a string, got {other}"
        ))),
    }
}
