use std::path::PathBuf;

use thiserror::Error;

use crate::tasks::TaskSpecError;

/// Exit status for a missing scenario or a bad `--tasks` value.
pub const USAGE_EXIT_CODE: u8 = 2;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("scenario not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Tasks(#[from] TaskSpecError),
    #[error("Scenario IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl PatchError {
    /// Exit status for errors reported as a one-line diagnostic. `None` means
    /// the error is fatal and goes out through the regular error report.
    pub fn exit_code(&self) -> Option<u8> {
        match self {
            PatchError::NotFound(_) | PatchError::Tasks(_) => Some(USAGE_EXIT_CODE),
            PatchError::Io(_) | PatchError::Parse(_) | PatchError::Serialize(_) => None,
        }
    }
}
