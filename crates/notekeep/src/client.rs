//! The facade: one object that wires the session store to the API
//! client.
//!
//! The two core crates deliberately don't know about each other — the
//! API client takes tokens as parameters, the session store never makes
//! requests. [`Notekeep`] is where they meet: it reads the token out of
//! the session for authenticated calls, and commits login results back
//! into it.
//!
//! Apps that need finer control (custom token routing, multiple
//! accounts) can skip the facade and compose the sub-crates directly;
//! nothing here is privileged.

use tracing::info;

use notekeep_api::{ApiClient, NotesQuery};
use notekeep_session::{CredentialStore, SessionConfig, SessionStore, TokenInfo};
use notekeep_types::{
    AccountDetails, Credentials, Note, NoteDraft, NotePatch, NoteSummary,
    Outcome, RecoveryProof, RecoveryRequest, User,
};

use crate::NotekeepError;

/// A complete Notekeep client: API access plus session state.
///
/// Generic over the [`CredentialStore`] so tests run fully in memory
/// and apps pick where credentials live.
#[derive(Debug)]
pub struct Notekeep<S> {
    api: ApiClient,
    session: SessionStore<S>,
}

impl<S: CredentialStore> Notekeep<S> {
    /// Creates a client against `base_url` with a logged-out session
    /// over `store`. Call [`initialize`](Self::initialize) to pick up a
    /// previously persisted session.
    pub fn new(base_url: impl Into<String>, store: S, config: SessionConfig) -> Self {
        Self {
            api: ApiClient::new(base_url),
            session: SessionStore::new(store, config),
        }
    }

    /// Hydrates the session from durable storage and returns whether a
    /// valid token was found.
    pub fn initialize(&mut self) -> bool {
        self.session.initialize()
    }

    // -- Session access ----------------------------------------------------

    /// The current user; anonymous when logged out.
    pub fn user(&self) -> &User {
        self.session.user()
    }

    /// The validity flag as of the last check or login.
    pub fn is_token_valid(&self) -> bool {
        self.session.is_token_valid()
    }

    /// Re-checks token validity locally (rehydrate + decode).
    pub fn check_token_validity(&mut self) -> bool {
        self.session.check_token_validity()
    }

    /// Diagnostic view of the current token.
    pub fn token_info(&self) -> Option<TokenInfo> {
        self.session.token_info()
    }

    /// Direct access to the underlying API client, for calls the facade
    /// doesn't wrap (e.g. fetching a public note while logged in as
    /// someone else).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // -- Auth flows --------------------------------------------------------

    /// Logs in: authenticates against the backend and, on success,
    /// commits the grant to the session (which persists it).
    ///
    /// # Errors
    /// Propagates the API error on rejection or transport failure; the
    /// session is left untouched in that case.
    pub async fn login(
        &mut self,
        credentials: &Credentials,
    ) -> Result<(), NotekeepError> {
        let grant = self.api.login(credentials).await?;
        self.session.login(grant);
        info!(user = %self.session.user().username, "login committed to session");
        Ok(())
    }

    /// Logs out locally. The backend keeps no session state, so there
    /// is nothing to tell it.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// `POST /auth/register`. No session change — the new account still
    /// has to log in.
    pub async fn create_account(&self, details: &AccountDetails) -> Outcome {
        self.api.create_account(details).await
    }

    /// Starts the password-recovery flow.
    pub async fn send_recovery_code(&self, request: &RecoveryRequest) -> Outcome {
        self.api.send_recovery_code(request).await
    }

    /// Completes the password-recovery flow.
    pub async fn verify_recovery_code(&self, proof: &RecoveryProof) -> Outcome {
        self.api.verify_recovery_code(proof).await
    }

    // -- Authenticated operations ------------------------------------------
    //
    // These attach the session's current token. If the session is
    // logged out the token is empty and the backend rejects the call;
    // the facade doesn't pre-empt that locally, matching the "backend
    // is the authority" rule everywhere else.

    /// Fetches the logged-in user's profile.
    pub async fn profile(&self) -> Result<User, NotekeepError> {
        Ok(self.api.get_user(self.session.token()).await?)
    }

    /// Updates the logged-in user's profile.
    pub async fn update_profile(&self, details: &AccountDetails) -> Outcome {
        self.api.update_user(details, self.session.token()).await
    }

    /// Creates a note.
    pub async fn create_note(&self, draft: &NoteDraft) -> Outcome {
        self.api.create_note(draft, self.session.token()).await
    }

    /// Updates a note's title/content.
    pub async fn update_note(&self, patch: &NotePatch, id: &str) -> Outcome {
        self.api.update_note(patch, id, self.session.token()).await
    }

    /// Deletes a note.
    pub async fn delete_note(&self, id: &str) -> Outcome {
        self.api.delete_note(id, self.session.token()).await
    }

    /// Toggles a note's public visibility.
    pub async fn publish_note(&self, id: &str) -> Outcome {
        self.api.publish_note(id, self.session.token()).await
    }

    /// Fetches one of the logged-in user's notes.
    pub async fn get_note(&self, id: &str) -> Result<Note, NotekeepError> {
        Ok(self.api.get_note(id, self.session.token()).await?)
    }

    /// Lists the logged-in user's notes. Degrades to empty on failure,
    /// like the underlying client.
    pub async fn get_notes(&self, query: &NotesQuery) -> Vec<NoteSummary> {
        self.api.get_notes(self.session.token(), query).await
    }
}
