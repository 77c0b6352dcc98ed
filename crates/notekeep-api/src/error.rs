//! Error types for the API gateway client.

/// Errors that can occur talking to the Notekeep backend.
///
/// Three buckets, matching the three ways a call goes wrong:
/// the request never completed, the backend said no, or the backend
/// answered with something we couldn't read.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request failed at the transport level — DNS, connect,
    /// timeout, TLS. Nothing useful came back from the backend.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status and a parseable error
    /// body. `message` is the backend's own wording, surfaced verbatim
    /// to the UI.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// A response body (success or error) wasn't the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}
