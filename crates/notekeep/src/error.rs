//! Unified error type for the Notekeep client core.

use notekeep_api::ApiError;
use notekeep_session::SessionError;

/// Top-level error that wraps the crate-specific errors.
///
/// When using the `notekeep` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum NotekeepError {
    /// A session-layer error (credential store open/corrupt).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An API-layer error (transport, backend rejection, bad body).
    #[error(transparent)]
    Api(#[from] ApiError),
}
