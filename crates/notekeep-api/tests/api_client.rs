//! Integration tests for `ApiClient` against a local stub backend.
//!
//! Each test builds a tiny axum router with exactly the routes it needs,
//! binds it to an ephemeral port, and points a real `ApiClient` at it —
//! so the full reqwest → network → parse path is exercised, not a mock.
//!
//! "Unreachable host" tests bind a listener to grab a free port and then
//! drop it, so connecting gets refused immediately instead of timing out.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use notekeep_api::{ApiClient, ApiError, NotesQuery};
use notekeep_types::{
    AccountDetails, Credentials, NoteDraft, NotePatch, OutcomeCode,
    RecoveryProof, RecoveryRequest,
};

// =========================================================================
// Helpers
// =========================================================================

const TOKEN: &str = "tok-123";

/// Mounts `routes` under `/api` on an ephemeral port and returns the
/// base URL to hand to `ApiClient::new`.
async fn serve(routes: Router) -> String {
    let app = Router::new().nest("/api", routes);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}/api")
}

/// A base URL whose port nothing is listening on.
async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}

fn user_json() -> Value {
    json!({
        "id": "u-1",
        "username": "ana",
        "email": "ana@example.com",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

fn note_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "groceries",
        "content": "<p>milk</p>",
        "isPublic": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn details() -> AccountDetails {
    AccountDetails {
        username: "ana".into(),
        email: "ana@example.com".into(),
        password: "secret".into(),
    }
}

// =========================================================================
// create_account
// =========================================================================

#[tokio::test]
async fn test_create_account_success_uses_fixed_bilingual_messages() {
    let base = serve(Router::new().route(
        "/auth/register",
        post(|| async { (StatusCode::CREATED, Json(user_json())) }),
    ))
    .await;

    let outcome = ApiClient::new(base).create_account(&details()).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.pt.message, "Usuário criado com sucesso");
    assert_eq!(outcome.en.message, "User created successfully");
}

#[tokio::test]
async fn test_create_account_conflict_echoes_backend_message_in_both_locales() {
    // The backend's message is not translated — both locale slots echo
    // it verbatim, with code Error.
    let base = serve(Router::new().route(
        "/auth/register",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({"message": "user already exists"})),
            )
        }),
    ))
    .await;

    let outcome = ApiClient::new(base).create_account(&details()).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.pt.message, "user already exists");
    assert_eq!(outcome.en.message, "user already exists");
    assert_eq!(outcome.pt.code, OutcomeCode::Error);
    assert_eq!(outcome.en.code, OutcomeCode::Error);
}

#[tokio::test]
async fn test_create_account_unreachable_host_resolves_to_error_outcome() {
    // Mutations never raise — a transport failure becomes an Outcome too.
    let base = unreachable_base().await;

    let outcome = ApiClient::new(base).create_account(&details()).await;

    assert!(!outcome.is_success());
    assert!(!outcome.en.message.is_empty());
}

// =========================================================================
// login
// =========================================================================

#[tokio::test]
async fn test_login_success_returns_grant() {
    let base = serve(Router::new().route(
        "/auth/login",
        post(|| async {
            Json(json!({ "user": user_json(), "token": "h.p.s" }))
        }),
    ))
    .await;

    let credentials = Credentials {
        username: "ana".into(),
        password: "secret".into(),
    };
    let grant = ApiClient::new(base)
        .login(&credentials)
        .await
        .expect("login should succeed");

    assert_eq!(grant.user.username, "ana");
    assert_eq!(grant.token, "h.p.s");
}

#[tokio::test]
async fn test_login_rejected_raises_backend_error() {
    let base = serve(Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "invalid credentials"})),
            )
        }),
    ))
    .await;

    let credentials = Credentials {
        username: "ana".into(),
        password: "wrong".into(),
    };
    let err = ApiClient::new(base)
        .login(&credentials)
        .await
        .expect_err("login should fail");

    assert!(
        matches!(
            &err,
            ApiError::Backend { status: 401, message } if message == "invalid credentials"
        ),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_login_unreachable_host_raises_transport_error() {
    let base = unreachable_base().await;

    let credentials = Credentials {
        username: "ana".into(),
        password: "secret".into(),
    };
    let err = ApiClient::new(base)
        .login(&credentials)
        .await
        .expect_err("should fail");

    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

// =========================================================================
// profile
// =========================================================================

#[tokio::test]
async fn test_get_user_attaches_bearer_and_content_type() {
    let base = serve(Router::new().route(
        "/users/profile",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            if auth == format!("Bearer {TOKEN}")
                && content_type == "application/json"
            {
                (StatusCode::OK, Json(user_json()))
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"message": "missing auth"})),
                )
            }
        }),
    ))
    .await;

    let user = ApiClient::new(base)
        .get_user(TOKEN)
        .await
        .expect("headers should satisfy the stub");

    assert_eq!(user.id, "u-1");
}

#[tokio::test]
async fn test_update_user_success_is_bilingual() {
    let base = serve(Router::new().route(
        "/users/profile",
        put(|| async { Json(user_json()) }),
    ))
    .await;

    let outcome = ApiClient::new(base).update_user(&details(), TOKEN).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.pt.message, "Perfil atualizado com sucesso");
    assert_eq!(outcome.en.message, "Profile updated successfully");
}

// =========================================================================
// notes — mutations
// =========================================================================

#[tokio::test]
async fn test_create_note_success_is_bilingual_success() {
    let base = serve(Router::new().route(
        "/notes",
        post(|| async { (StatusCode::CREATED, Json(note_json("n-1"))) }),
    ))
    .await;

    let draft = NoteDraft {
        title: "groceries".into(),
        content: "<p>milk</p>".into(),
        is_public: false,
    };
    let outcome = ApiClient::new(base).create_note(&draft, TOKEN).await;

    assert_eq!(outcome.pt.code, OutcomeCode::Success);
    assert_eq!(outcome.en.code, OutcomeCode::Success);
    assert_eq!(outcome.pt.message, "Nota criada com sucesso");
    assert_eq!(outcome.en.message, "Note created successfully");
}

#[tokio::test]
async fn test_update_note_patches_note_by_id() {
    let base = serve(Router::new().route(
        "/notes/{id}",
        patch(|Path(id): Path<String>| async move {
            assert_eq!(id, "n-7");
            Json(note_json("n-7"))
        }),
    ))
    .await;

    let note_patch = NotePatch {
        title: "t".into(),
        content: "c".into(),
    };
    let outcome = ApiClient::new(base)
        .update_note(&note_patch, "n-7", TOKEN)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.en.message, "Note updated successfully");
}

#[tokio::test]
async fn test_delete_note_success_and_backend_error() {
    let base = serve(Router::new().route(
        "/notes/{id}",
        delete(|Path(id): Path<String>| async move {
            if id == "n-1" {
                (StatusCode::OK, Json(json!({})))
            } else {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"message": "note not found"})),
                )
            }
        }),
    ))
    .await;
    let client = ApiClient::new(base);

    let ok = client.delete_note("n-1", TOKEN).await;
    assert!(ok.is_success());
    assert_eq!(ok.pt.message, "Nota deletada com sucesso");

    let missing = client.delete_note("n-2", TOKEN).await;
    assert!(!missing.is_success());
    assert_eq!(missing.en.message, "note not found");
}

#[tokio::test]
async fn test_publish_note_hits_toggle_route() {
    let base = serve(Router::new().route(
        "/notes/{id}/toggle-public",
        patch(|Path(id): Path<String>| async move {
            assert_eq!(id, "n-3");
            Json(note_json("n-3"))
        }),
    ))
    .await;

    let outcome = ApiClient::new(base).publish_note("n-3", TOKEN).await;

    assert!(outcome.is_success());
    assert_eq!(
        outcome.en.message,
        "Note visibility changed successfully"
    );
}

// =========================================================================
// notes — reads
// =========================================================================

#[tokio::test]
async fn test_get_note_returns_parsed_note() {
    let base = serve(Router::new().route(
        "/notes/{id}",
        get(|Path(id): Path<String>| async move { Json(note_json(&id)) }),
    ))
    .await;

    let note = ApiClient::new(base)
        .get_note("n-1", TOKEN)
        .await
        .expect("should parse");

    assert_eq!(note.id, "n-1");
    assert_eq!(note.title, "groceries");
    assert!(!note.is_public);
}

#[tokio::test]
async fn test_get_note_not_found_raises_backend_error() {
    let base = serve(Router::new().route(
        "/notes/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"message": "note not found"})),
            )
        }),
    ))
    .await;

    let err = ApiClient::new(base)
        .get_note("abc", TOKEN)
        .await
        .expect_err("should raise");

    assert!(
        matches!(err, ApiError::Backend { status: 404, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_get_note_unreachable_host_raises() {
    // Single-entity reads raise; they never resolve to a sentinel.
    let base = unreachable_base().await;

    let result = ApiClient::new(base).get_note("abc", TOKEN).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_public_note_works_without_auth_header() {
    let base = serve(Router::new().route(
        "/notes/{id}",
        get(|headers: HeaderMap, Path(id): Path<String>| async move {
            assert!(
                headers.get("authorization").is_none(),
                "public fetch must not send auth"
            );
            Json(note_json(&id))
        }),
    ))
    .await;

    let note = ApiClient::new(base)
        .get_public_note("n-9")
        .await
        .expect("should parse");

    assert_eq!(note.id, "n-9");
}

// =========================================================================
// notes — listing
// =========================================================================

#[tokio::test]
async fn test_get_notes_returns_entries_from_envelope() {
    let base = serve(Router::new().route(
        "/notes",
        get(|| async {
            Json(json!({
                "notes": [
                    {
                        "id": "n-1",
                        "title": "groceries",
                        "isPublic": false,
                        "createdAt": "2024-01-01T00:00:00Z",
                        "updatedAt": "2024-01-01T00:00:00Z"
                    },
                    {
                        "id": "n-2",
                        "title": "travel",
                        "isPublic": true,
                        "createdAt": "2024-01-02T00:00:00Z",
                        "updatedAt": "2024-01-02T00:00:00Z"
                    }
                ],
                "pagination": { "page": 1, "limit": 100, "total": 2, "pages": 1 }
            }))
        }),
    ))
    .await;

    let notes = ApiClient::new(base)
        .get_notes(TOKEN, &NotesQuery::default())
        .await;

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "groceries");
    assert!(notes[1].is_public);
}

#[tokio::test]
async fn test_get_notes_unreachable_host_returns_empty() {
    let base = unreachable_base().await;

    let notes = ApiClient::new(base)
        .get_notes(TOKEN, &NotesQuery::default())
        .await;

    assert!(notes.is_empty(), "listing must degrade, not raise");
}

#[tokio::test]
async fn test_get_notes_backend_error_returns_empty() {
    let base = serve(Router::new().route(
        "/notes",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "boom"})),
            )
        }),
    ))
    .await;

    let notes = ApiClient::new(base)
        .get_notes(TOKEN, &NotesQuery::default())
        .await;

    assert!(notes.is_empty());
}

#[tokio::test]
async fn test_get_notes_search_term_is_percent_encoded() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();

    let base = serve(Router::new().route(
        "/notes",
        get(move |RawQuery(raw): RawQuery| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = raw;
                Json(json!({ "notes": [] }))
            }
        }),
    ))
    .await;

    let query = NotesQuery {
        page: 2,
        limit: 10,
        search: Some("café com leite".into()),
    };
    ApiClient::new(base).get_notes(TOKEN, &query).await;

    let raw = seen.lock().unwrap().clone().expect("stub saw the query");
    assert!(raw.contains("page=2"), "raw query: {raw}");
    assert!(raw.contains("limit=10"), "raw query: {raw}");
    assert!(
        raw.contains("search=caf%C3%A9%20com%20leite"),
        "search must be percent-encoded, raw query: {raw}"
    );
}

// =========================================================================
// password recovery
// =========================================================================

#[tokio::test]
async fn test_recovery_flow_outcomes() {
    let base = serve(
        Router::new()
            .route("/auth/send-code", post(|| async { Json(json!({})) }))
            .route("/auth/verify-code", post(|| async { Json(json!({})) })),
    )
    .await;
    let client = ApiClient::new(base);

    let sent = client
        .send_recovery_code(&RecoveryRequest {
            email: "ana@example.com".into(),
        })
        .await;
    assert!(sent.is_success());
    assert_eq!(sent.en.message, "Recovery code sent");

    let updated = client
        .verify_recovery_code(&RecoveryProof {
            code: "123456".into(),
            password: "new-secret".into(),
        })
        .await;
    assert!(updated.is_success());
    assert_eq!(updated.pt.message, "Senha atualizada com sucesso");
}
