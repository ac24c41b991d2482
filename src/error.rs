use std::path::PathBuf;

use thiserror::Error;

pub type AbundanceResult<T> = Result<T, AbundanceError>;

#[derive(Error, Debug)]
pub enum AbundanceError {
    #[error("Malformed abundance table: {reason}")]
    MalformedInput { reason: String },

    #[error("Element '{element}' must appear exactly once in the table (found {matches})")]
    ElementNotFound { element: String, matches: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl AbundanceError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        AbundanceError::MalformedInput {
            reason: reason.into(),
        }
    }
}
