//! Error types for platform profile operations.

use std::path::PathBuf;

use crate::profile::IntegerKind;

/// Errors that can occur while resolving, loading or storing profiles.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// A native maximum matched neither the 32-bit nor the 64-bit sentinel.
    #[error("maximum of `{kind}` ({max}) matches neither the 32-bit nor the 64-bit sentinel")]
    UnsupportedMax {
        /// The integer kind being resolved.
        kind: IntegerKind,
        /// The maximum that failed to match.
        max: i128,
    },

    /// An unsigned native maximum matched neither the 32-bit nor the 64-bit
    /// sentinel.
    #[error("maximum of `{kind}` ({max}) matches neither the 32-bit nor the 64-bit sentinel")]
    UnsupportedUnsignedMax {
        /// The integer kind being resolved.
        kind: IntegerKind,
        /// The maximum that failed to match.
        max: u128,
    },

    /// A declared width is not 4 or 8 bytes.
    #[error("width of `{kind}` must be 4 or 8 bytes, got {bytes}")]
    UnsupportedWidth {
        /// The integer kind being resolved.
        kind: IntegerKind,
        /// The rejected width in bytes.
        bytes: u32,
    },

    /// Unknown data model name.
    #[error("unknown data model: '{name}' (expected ilp32, lp64 or llp64)")]
    UnknownDataModel {
        /// The name that was given.
        name: String,
    },

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading/writing target files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Target file not found.
    #[error("target file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
