//! Extraction-specific error types.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

use crate::mapper::MapError;

/// Result type for extraction operations.
pub type DpkgResult<T> = Result<T, DpkgError>;

/// Errors that can occur while extracting package metadata.
#[derive(Error, Debug)]
pub enum DpkgError {
    /// The field table was malformed or disagreed with a row.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The query tool could not be started at all.
    #[error("failed to run dpkg-query: {0}")]
    Spawn(#[source] io::Error),

    /// The query tool ran but exited non-zero. Its stderr has already
    /// been surfaced through the diagnostic sink; a copy is kept here
    /// for callers that inspect the error directly.
    #[error("dpkg-query exited with {status}")]
    QueryFailed {
        /// Exit status of the child process.
        status: ExitStatus,
        /// Captured standard error text.
        stderr: String,
    },

    /// A row carried more fields than the compiled query requested,
    /// so the field table and the tool's output disagree structurally.
    #[error("row has {unconsumed} more fields than the compiled query requested")]
    RowMismatch {
        /// Values left over after the whole field table was filled.
        unconsumed: usize,
    },
}
