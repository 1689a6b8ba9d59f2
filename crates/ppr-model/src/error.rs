use std::path::PathBuf;

use thiserror::Error;

/// Error taxonomy for the registry analysis pipeline.
///
/// Row-level problems (null identifiers, failed casts) are never errors;
/// they only reduce the surviving row count. Everything here is fatal for
/// the run that raises it.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The source file is missing, unreadable, or not decodable as a
    /// UTF-16 delimited table.
    #[error("failed to load registry {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// A required column is absent from the parsed header.
    #[error("required column missing from registry: {0}")]
    Schema(String),

    /// Statistics were requested over zero county groups.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Artifact directory creation or file write failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// Build a load error for the given source path.
    pub fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
