//! Error types for the `probe-core` crate.

use std::path::PathBuf;

/// Errors produced while materialising an input buffer from a file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer whole elements were available than the program requires.
    #[error("Required {required} of {element}, only read {actual}.")]
    ShortRead {
        element: &'static str,
        required: usize,
        actual: usize,
    },

    /// Reading failed for a reason other than end of file.
    #[error("failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

/// The argument vector did not contain exactly one input path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("usage: {program} input")]
pub struct UsageError {
    /// Program name shown in the usage line.
    pub program: String,
}

/// Configuration errors the harness reports before any target runs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HarnessError {
    /// Wrong argument count.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Missing, unreadable, or undersized input file.
    #[error(transparent)]
    Load(#[from] LoadError),
}
