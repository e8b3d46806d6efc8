use crate::loader::LoadError;
use thiserror::Error;

/// Top-level errors of the `sidediff` binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("{0}\n\nUsage: sidediff [BASELINE] [WORKING]\n       sidediff --json BASELINE WORKING")]
    Usage(String),
}
