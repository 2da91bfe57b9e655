//! Error type for the command-line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        source: vr_project::ProjectError,
    },

    #[error("Failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        source: vr_project::ProjectError,
    },

    #[error("Value ranges are invalid ({issues} issue(s))")]
    InvalidRanges { issues: usize },

    #[error("No range contains {value}")]
    NoMatch { value: f64 },

    #[error(transparent)]
    Builder(#[from] vr_builder::BuilderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
