//! # Notekeep
//!
//! Client core for the Notekeep note-taking app: session/token lifecycle
//! plus typed access to the REST backend.
//!
//! The meta-crate re-exports the sub-crates and adds the [`Notekeep`]
//! facade, which is all most apps need:
//!
//! ```rust,no_run
//! use notekeep::prelude::*;
//!
//! # async fn run() -> Result<(), NotekeepError> {
//! let store = FileStore::open("credentials.json")?;
//! let mut app = Notekeep::new(
//!     "https://notekeep.example.com/api",
//!     store,
//!     SessionConfig::default(),
//! );
//!
//! if !app.initialize() {
//!     let credentials = Credentials {
//!         username: "ana".into(),
//!         password: "secret".into(),
//!     };
//!     app.login(&credentials).await?;
//! }
//!
//! for note in app.get_notes(&NotesQuery::default()).await {
//!     println!("{}", note.title);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::Notekeep;
pub use error::NotekeepError;

pub use notekeep_api as api;
pub use notekeep_session as session;
pub use notekeep_types as types;

/// The commonly-used surface in one import.
pub mod prelude {
    pub use crate::{Notekeep, NotekeepError};
    pub use notekeep_api::{ApiClient, ApiError, NotesQuery};
    pub use notekeep_session::{
        check_token, token_info, CredentialStore, FileStore, MemoryStore,
        SessionConfig, SessionStore, TokenStatus,
    };
    pub use notekeep_types::{
        AccountDetails, AuthGrant, Credentials, Note, NoteDraft, NotePatch,
        NoteSummary, Outcome, OutcomeCode, RecoveryProof, RecoveryRequest,
        User,
    };
}
