use thiserror::Error;

use ccg_catalog::{PageStatus, UnknownCategory};
use ccg_gateway::LoadError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The catalog could not be fetched or parsed
    #[error("{0}")]
    Load(#[from] LoadError),

    /// The category hint is not in the alias table
    #[error("{0}")]
    UnknownCategory(#[from] UnknownCategory),

    /// A listing or game page ended in an error state
    #[error("{0}")]
    Page(PageStatus),

    /// Settings file could not be read or written
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Output serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
