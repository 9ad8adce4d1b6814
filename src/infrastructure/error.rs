//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Application errors plus failures writing rendered graphs to the terminal.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("failed to write {what}")]
    Output {
        what: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn output(what: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            what: what.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
