// This module defines the error type for the host-facing side of asmdoc using the
// thiserror crate. The generators themselves never fail: malformed lines are skipped and
// missing fields fall back to placeholder text. What can fail is getting the source text
// in the first place, so DocError covers reading a source file and reading stdin, each
// carrying the underlying io::Error. DocResult<T> is the matching Result alias.

//! Error types for asmdoc.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting source text for the generators.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),
}

/// Result type alias for host-side operations.
pub type DocResult<T> = Result<T, DocError>;
