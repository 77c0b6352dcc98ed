//! Error types for the session layer.
//!
//! Deliberately small: per the session contract, `login`, `logout` and
//! `check_token_validity` have no failure path, and token decoding
//! failures are modeled as [`TokenStatus::Malformed`](crate::TokenStatus)
//! rather than errors. The only fallible step is opening a file-backed
//! credential store.

/// Errors that can occur in the session layer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The credential store file could not be read.
    /// A missing file is fine (fresh start); this is for real IO
    /// failures like permission problems.
    #[error("credential store open failed: {0}")]
    StoreOpen(#[source] std::io::Error),

    /// The credential store file exists but isn't valid JSON.
    /// Surfaced at open time so the caller can decide whether to wipe
    /// the file or abort — silently discarding credentials would log
    /// the user out with no explanation.
    #[error("credential store corrupt: {0}")]
    StoreCorrupt(#[source] serde_json::Error),
}
