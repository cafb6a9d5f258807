//! Error types shared by the renderer, the batch driver and profile loading.

use std::path::PathBuf;

/// Errors produced while rendering icons or loading their configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested icon size was zero.
    #[error("icon size must be positive")]
    InvalidSize,

    /// A color string could not be parsed.
    #[error("invalid color `{input}`: {reason}")]
    InvalidColor { input: String, reason: String },

    /// Encoding or writing a single icon failed.
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A profile file could not be read.
    #[error("failed to read profile {}: {source}", path.display())]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A profile could not be (de)serialized.
    #[error("malformed profile: {0}")]
    Profile(#[from] serde_json::Error),

    /// A profile was well-formed but inconsistent.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
