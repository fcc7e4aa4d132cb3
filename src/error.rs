use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConcatError>;

/// Everything that can stop a run. Every variant is terminal.
#[derive(Debug, Error)]
pub enum ConcatError {
    #[error("invalid input {path:?}: {reason}")]
    Validation {
        path: PathBuf,
        reason: ValidationReason,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to {path:?}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to emit {path:?}: {source}")]
    Emit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("aggregation into {path:?} already failed")]
    AlreadyFailed { path: PathBuf },

    #[error("i/o worker stopped before acknowledging a request")]
    WorkerGone,
}

#[derive(Debug, Error)]
pub enum ValidationReason {
    #[error("no such file")]
    Missing,
    #[error("not a regular file")]
    NotAFile,
    #[error("{0}")]
    Inaccessible(io::Error),
}

impl ConcatError {
    /// Process exit code for this error: 2 for bad input, 1 for I/O failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConcatError::Validation { .. } => 2,
            _ => 1,
        }
    }
}
