//! Core wire types: the structures exchanged with the Notekeep backend.
//!
//! The backend speaks JSON with camelCase field names, so most structs
//! carry `#[serde(rename_all = "camelCase")]`. Timestamps arrive as
//! RFC 3339 strings and are kept as strings — the client never does
//! date arithmetic on them, it only displays them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A user account as reported by `GET /users/profile` and the login
/// response.
///
/// The unauthenticated state is represented by [`User::anonymous`], an
/// all-empty sentinel, rather than an `Option` — the session layer always
/// has *a* user, it's just sometimes nobody. This mirrors how the rest of
/// the client treats "logged out" as a value, not an absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier (opaque string).
    pub id: String,
    pub username: String,
    pub email: String,
    /// Absent for accounts that have never logged in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// The logged-out sentinel: every field empty.
    pub fn anonymous() -> Self {
        Self {
            id: String::new(),
            username: String::new(),
            email: String::new(),
            last_login_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// True if this is the logged-out sentinel.
    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty()
    }
}

/// Login request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account payload for `POST /auth/register` and `PUT /users/profile`.
///
/// Password-length validation is the UI's job; the client sends whatever
/// it is given and lets the backend reject bad input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDetails {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login response: who you are plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthGrant {
    pub user: User,
    /// Opaque three-segment signed token. The session layer decodes its
    /// middle segment locally to check expiry; it never verifies the
    /// signature (that's the backend's job on every request).
    pub token: String,
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// A full note, returned by the single-entity fetch routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A note as it appears in listings — the backend omits the content
/// body to keep list responses small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for `POST /notes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub is_public: bool,
}

/// Body for `PATCH /notes/{id}`. Visibility is changed through the
/// dedicated toggle route, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotePatch {
    pub title: String,
    pub content: String,
}

/// The paginated listing envelope from `GET /notes`.
///
/// `notes` defaults to empty so a response missing the field (or an
/// older backend that names it differently) deserializes to "no notes"
/// instead of failing — the list operation degrades, it never raises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesEnvelope {
    #[serde(default)]
    pub notes: Vec<NoteSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

/// Pagination block accompanying a notes listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub pages: u32,
}

// ---------------------------------------------------------------------------
// Password recovery
// ---------------------------------------------------------------------------

/// Body for `POST /auth/send-code`: asks the backend to email a
/// one-time recovery code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryRequest {
    pub email: String,
}

/// Body for `POST /auth/verify-code`: exchanges the emailed code for a
/// password reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryProof {
    pub code: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Backend errors
// ---------------------------------------------------------------------------

/// The JSON body the backend sends with a non-2xx status.
///
/// The real body may carry more fields; `message` is the only one the
/// client consumes, so it's the only one modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

// =========================================================================
// Tests
// =========================================================================
