//! The API client: one method per backend route.
//!
//! Construction is cheap (a `reqwest::Client` is an `Arc` over a
//! connection pool), and the client is `Clone` for the same reason.
//! The base URL includes the `/api` prefix, e.g.
//! `https://notekeep.example.com/api`.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::warn;

use notekeep_types::{
    AccountDetails, AuthGrant, Credentials, ErrorBody, Note, NoteDraft,
    NotePatch, NoteSummary, NotesEnvelope, Outcome, OutcomeKey, RecoveryProof,
    RecoveryRequest, User,
};

use crate::ApiError;

// ---------------------------------------------------------------------------
// NotesQuery
// ---------------------------------------------------------------------------

/// Pagination and search parameters for the notes listing.
///
/// `NotesQuery::default()` matches the backend's expectations for "just
/// show me my notes": first page, generous limit, no filter.
#[derive(Debug, Clone)]
pub struct NotesQuery {
    /// 1-based page number.
    pub page: u32,
    /// Entries per page.
    pub limit: u32,
    /// Free-text filter; percent-encoded into the query string.
    /// `None` (or empty) means no filter.
    pub search: Option<String>,
}

impl Default for NotesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 100,
            search: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// A typed wrapper around the Notekeep REST backend.
///
/// Holds no session state; authenticated methods take the bearer token
/// as a parameter. See the crate docs for the per-operation failure
/// policy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against `base_url` (including the `/api`
    /// prefix). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Adds the headers every authenticated call carries.
    fn authed(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token)
    }

    // -- Internal normalization -------------------------------------------
    //
    // Every route funnels through these helpers, so all public methods
    // see the same three-way ApiError split and only differ in what they
    // do with it at the boundary.

    /// Sends the request and maps every backend outcome onto
    /// `Result<Response, ApiError>`. A non-2xx status is parsed into
    /// [`ApiError::Backend`] carrying the backend's own message.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let parsed: ErrorBody =
            serde_json::from_str(&body).map_err(ApiError::Decode)?;
        Err(ApiError::Backend {
            status: status.as_u16(),
            message: parsed.message,
        })
    }

    /// Reads a 2xx response body as JSON.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    /// The mutation boundary: run the request, discard any success
    /// payload, fold the result into a bilingual [`Outcome`].
    async fn mutate(&self, builder: RequestBuilder, key: OutcomeKey) -> Outcome {
        match self.send(builder).await {
            Ok(_) => Outcome::success(key),
            Err(err) => Outcome::error(err.to_string()),
        }
    }

    // -- Accounts ----------------------------------------------------------

    /// `POST /auth/register`. Mutation: resolves to an [`Outcome`],
    /// never raises.
    pub async fn create_account(&self, details: &AccountDetails) -> Outcome {
        let builder = self.http.post(self.url("/auth/register")).json(details);
        self.mutate(builder, OutcomeKey::AccountCreated).await
    }

    /// `POST /auth/login`. Raises on failure — there is no neutral
    /// "empty grant" to return.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthGrant, ApiError> {
        let builder = self.http.post(self.url("/auth/login")).json(credentials);
        let response = self.send(builder).await?;
        self.read_json(response).await
    }

    /// `POST /auth/send-code` — emails a password-recovery code.
    pub async fn send_recovery_code(&self, request: &RecoveryRequest) -> Outcome {
        let builder = self.http.post(self.url("/auth/send-code")).json(request);
        self.mutate(builder, OutcomeKey::RecoveryCodeSent).await
    }

    /// `POST /auth/verify-code` — exchanges the recovery code for a new
    /// password.
    pub async fn verify_recovery_code(&self, proof: &RecoveryProof) -> Outcome {
        let builder = self.http.post(self.url("/auth/verify-code")).json(proof);
        self.mutate(builder, OutcomeKey::PasswordUpdated).await
    }

    /// `GET /users/profile`. Raises on failure.
    pub async fn get_user(&self, token: &str) -> Result<User, ApiError> {
        let builder = self.authed(self.http.get(self.url("/users/profile")), token);
        let response = self.send(builder).await?;
        self.read_json(response).await
    }

    /// `PUT /users/profile`. Mutation.
    pub async fn update_user(
        &self,
        details: &AccountDetails,
        token: &str,
    ) -> Outcome {
        let builder = self
            .authed(self.http.put(self.url("/users/profile")), token)
            .json(details);
        self.mutate(builder, OutcomeKey::ProfileUpdated).await
    }

    // -- Notes -------------------------------------------------------------

    /// `POST /notes`. Mutation.
    pub async fn create_note(&self, draft: &NoteDraft, token: &str) -> Outcome {
        let builder = self
            .authed(self.http.post(self.url("/notes")), token)
            .json(draft);
        self.mutate(builder, OutcomeKey::NoteCreated).await
    }

    /// `PATCH /notes/{id}`. Mutation.
    pub async fn update_note(
        &self,
        patch: &NotePatch,
        id: &str,
        token: &str,
    ) -> Outcome {
        let builder = self
            .authed(self.http.patch(self.url(&format!("/notes/{id}"))), token)
            .json(patch);
        self.mutate(builder, OutcomeKey::NoteUpdated).await
    }

    /// `DELETE /notes/{id}`. Mutation.
    pub async fn delete_note(&self, id: &str, token: &str) -> Outcome {
        let builder =
            self.authed(self.http.delete(self.url(&format!("/notes/{id}"))), token);
        self.mutate(builder, OutcomeKey::NoteDeleted).await
    }

    /// `PATCH /notes/{id}/toggle-public`. Mutation.
    pub async fn publish_note(&self, id: &str, token: &str) -> Outcome {
        let builder = self.authed(
            self.http
                .patch(self.url(&format!("/notes/{id}/toggle-public"))),
            token,
        );
        self.mutate(builder, OutcomeKey::NoteVisibilityChanged).await
    }

    /// `GET /notes/{id}` with auth. Raises on failure.
    pub async fn get_note(&self, id: &str, token: &str) -> Result<Note, ApiError> {
        let builder =
            self.authed(self.http.get(self.url(&format!("/notes/{id}"))), token);
        let response = self.send(builder).await?;
        self.read_json(response).await
    }

    /// `GET /notes/{id}` without auth — public share links. Raises on
    /// failure.
    pub async fn get_public_note(&self, id: &str) -> Result<Note, ApiError> {
        let builder = self
            .http
            .get(self.url(&format!("/notes/{id}")))
            .header(CONTENT_TYPE, "application/json");
        let response = self.send(builder).await?;
        self.read_json(response).await
    }

    /// `GET /notes?page&limit&search`. Degrades: every failure —
    /// transport, non-2xx, undecodable body — logs a warning and returns
    /// an empty list.
    pub async fn get_notes(
        &self,
        token: &str,
        query: &NotesQuery,
    ) -> Vec<NoteSummary> {
        match self.list_notes(token, query).await {
            Ok(notes) => notes,
            Err(err) => {
                warn!(%err, "notes listing failed, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn list_notes(
        &self,
        token: &str,
        query: &NotesQuery,
    ) -> Result<Vec<NoteSummary>, ApiError> {
        let mut url = format!(
            "{}?page={}&limit={}",
            self.url("/notes"),
            query.page,
            query.limit
        );
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(search));
        }

        let builder = self.authed(self.http.get(&url), token);
        let response = self.send(builder).await?;
        let envelope: NotesEnvelope = self.read_json(response).await?;
        Ok(envelope.notes)
    }
}

// =========================================================================
// Tests
// =========================================================================
