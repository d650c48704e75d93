//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The package file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The running OS generation cannot perform the requested mechanism
    #[error("Unsupported OS version: {0}")]
    UnsupportedOsVersion(String),

    /// The OS refused an intent launch or had no handler for it
    #[error("OS invocation failed: {0}")]
    OsInvocationError(String),

    /// Package archive metadata could not be read
    #[error("Failed to parse package archive: {0}")]
    ParseFailure(String),

    /// A required method-call argument was absent
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A method-call argument had the wrong shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A bundle manifest needed for the user agent is absent
    #[error("Manifest unavailable: {0}")]
    ManifestUnavailable(String),
}

impl CoreError {
    /// Stable error code reported across the method channel.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FileNotFound",
            Self::UnsupportedOsVersion(_) => "UnsupportedOsVersion",
            Self::OsInvocationError(_) => "OsInvocationError",
            Self::ParseFailure(_) => "ParseFailure",
            Self::MissingArgument(_) => "MissingArgument",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::ManifestUnavailable(_) => "ManifestUnavailable",
        }
    }

    /// Variant payload alone, without the `Display` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::FileNotFound(m)
            | Self::UnsupportedOsVersion(m)
            | Self::OsInvocationError(m)
            | Self::ParseFailure(m)
            | Self::MissingArgument(m)
            | Self::InvalidArgument(m)
            | Self::ManifestUnavailable(m) => m,
        }
    }

    /// Whether it is expected behavior (caller input, missing file, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound(_)
                | Self::ParseFailure(_)
                | Self::MissingArgument(_)
                | Self::InvalidArgument(_)
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
