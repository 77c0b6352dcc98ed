//! Typed HTTP client for the Notekeep backend API.
//!
//! Every route the backend exposes gets one method on [`ApiClient`], and
//! every method declares its failure policy in its signature:
//!
//! - **Mutations** (`create_account`, `create_note`, …) resolve to a
//!   bilingual [`Outcome`](notekeep_types::Outcome) and never raise —
//!   the UI renders the outcome either way.
//! - **Single-entity reads** (`login`, `get_user`, `get_note`, …) return
//!   `Result<T, ApiError>` — there is no neutral value to fall back to.
//! - **The listing** (`get_notes`) degrades to an empty vector on any
//!   failure — an empty list screen beats an error dialog.
//!
//! Internally all three go through the same `Result`-returning request
//! helpers; the policy is applied only at the public boundary, so adding
//! a route means writing one thin method and choosing its edge.
//!
//! The client holds no session state. The bearer token is a parameter on
//! every authenticated method, supplied by the caller (normally read
//! from `notekeep-session`). This crate and the session crate only meet
//! in the facade above them.

mod client;
mod error;

pub use client::{ApiClient, NotesQuery};
pub use error::ApiError;
