//! Domain and wire types for the Notekeep client.
//!
//! Everything in this crate crosses a boundary — either the HTTP wire
//! (requests and responses exchanged with the backend) or the durable
//! credential store. Nothing here performs I/O; these are plain data
//! types plus the bilingual [`Outcome`] result that every mutating API
//! operation resolves to.
//!
//! # How it fits in the stack
//!
//! ```text
//! notekeep (facade, above)   ← wires session + api together
//!     ↕
//! notekeep-session / notekeep-api   ← both depend on these types
//!     ↕
//! notekeep-types (this crate)   ← no dependencies besides serde
//! ```

mod outcome;
mod types;

pub use outcome::{Notice, Outcome, OutcomeCode, OutcomeKey};
pub use types::{
    AccountDetails, AuthGrant, Credentials, ErrorBody, Note, NoteDraft,
    NotePatch, NoteSummary, NotesEnvelope, PageInfo, RecoveryProof,
    RecoveryRequest, User,
};
