//! Session state and token lifecycle for the Notekeep client.
//!
//! This crate answers one question — "who is logged in right now?" —
//! without a network round trip:
//!
//! 1. **Token inspection** — decoding the bearer token's payload locally
//!    to check expiry ([`check_token`], [`token_info`])
//! 2. **Durable credentials** — the [`CredentialStore`] seam and its
//!    file/memory implementations
//! 3. **The session itself** — [`SessionStore`], the single authoritative
//!    in-memory copy of the current user and token
//!
//! # How it fits in the stack
//!
//! ```text
//! notekeep (facade, above)  ← reads the token here, attaches it to API calls
//!     ↕
//! Session layer (this crate)  ← owns identity, token, validity
//!     ↕
//! notekeep-types (below)  ← provides User, AuthGrant
//! ```
//!
//! The API client never depends on this crate; the token always travels
//! through the caller. That keeps the two halves of the core testable in
//! isolation.

mod error;
mod persist;
mod session;
mod token;

pub use error::SessionError;
pub use persist::{CredentialStore, FileStore, MemoryStore, TOKEN_KEY, USER_KEY};
pub use session::{SessionConfig, SessionStore};
pub use token::{check_token, now_unix, token_info, TokenInfo, TokenStatus};
