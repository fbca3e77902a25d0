//! Unified error types for the namspill workspace.
//!
//! Discovery absorbs most of these internally: a per-task failure means the
//! task is gone, not that something went wrong. Only checker misuse and
//! failed uniformity assertions reach the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NamspillError {
    /// An I/O operation on the procfs tree failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A namespace link did not have the form `<type>:[<id>]`.
    #[error("malformed namespace handle: {handle:?}")]
    MalformedHandle {
        /// The offending link text.
        handle: String,
    },

    /// The uniformity check was handed something it cannot judge.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description including the received value.
        message: String,
    },

    /// Tasks are attached to diverging namespaces.
    #[error("{report}")]
    NotUniform {
        /// Rendering of the leader and all other tasks.
        report: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, NamspillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_handle_quotes_link_text() {
        let err = NamspillError::MalformedHandle {
            handle: "net:4026531840".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed namespace handle: \"net:4026531840\""
        );
    }

    #[test]
    fn not_uniform_displays_report_verbatim() {
        let err = NamspillError::NotUniform {
            report: "Expected\n    Task Leader PID: 1".into(),
        };
        assert_eq!(err.to_string(), "Expected\n    Task Leader PID: 1");
    }
}
