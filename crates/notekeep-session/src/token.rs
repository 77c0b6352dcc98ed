//! Local bearer-token inspection: decode, never verify.
//!
//! The backend issues three-segment signed tokens
//! (`header.payload.signature`). The client can't check the signature —
//! it doesn't hold the key, and doesn't need to: the backend re-verifies
//! on every request. What the client *can* do locally is decode the
//! payload segment and read the `exp` claim, which is enough to know
//! whether presenting the token is pointless.
//!
//! Everything here is pure and infallible in the "never panics, never
//! returns Err" sense: a token that can't be decoded is simply
//! [`TokenStatus::Malformed`]. Callers pattern-match instead of catching.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// TokenStatus
// ---------------------------------------------------------------------------

/// The result of locally inspecting a bearer token.
///
/// ```text
/// check_token() ──→ Valid { expires_at }   (well-formed, exp in future)
///               ──→ Expired { expired_at } (well-formed, exp passed)
///               ──→ Malformed              (anything else, at any step)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// The token decodes and its expiry is strictly in the future.
    Valid { expires_at: i64 },
    /// The token decodes but its expiry has passed (or is now).
    Expired { expired_at: i64 },
    /// Wrong segment count, undecodable payload, non-JSON payload, or a
    /// missing/non-numeric `exp` claim. Deliberately one bucket: the
    /// session layer treats every flavor of broken the same way.
    Malformed,
}

impl TokenStatus {
    /// True only for [`TokenStatus::Valid`].
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

// ---------------------------------------------------------------------------
// Claims
// ---------------------------------------------------------------------------

/// The subset of payload claims the client reads. Every field is
/// optional at the serde level; `check_token` decides what's required.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
    iat: Option<i64>,
    sub: Option<String>,
    /// Some backend versions put the id here instead of `sub`.
    #[serde(rename = "userId")]
    user_id: Option<String>,
    username: Option<String>,
    email: Option<String>,
}

/// Splits the token and decodes the payload segment into [`Claims`].
///
/// Returns `None` on any failure: wrong segment count, bad base64,
/// non-JSON payload. JWTs use the url-safe base64 alphabet, but some
/// issuers emit the standard alphabet — we accept both.
fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;

    serde_json::from_slice(&bytes).ok()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The current unix time in seconds. Claims use second precision, so
/// this is the clock every validity check compares against.
pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Inspects `token` against the given clock reading.
///
/// A token is valid iff it has exactly three dot-separated segments, the
/// middle segment decodes to JSON with a numeric `exp` claim, and
/// `exp > now`. Any failure along the way is [`TokenStatus::Malformed`];
/// this function never panics and never returns an error.
pub fn check_token(token: &str, now: i64) -> TokenStatus {
    let Some(claims) = decode_claims(token) else {
        return TokenStatus::Malformed;
    };
    let Some(exp) = claims.exp else {
        return TokenStatus::Malformed;
    };

    if exp > now {
        TokenStatus::Valid { expires_at: exp }
    } else {
        TokenStatus::Expired { expired_at: exp }
    }
}

/// A decoded, human-readable view of a token — for diagnostics and
/// "session expires in N minutes" UI, not for authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// `sub` claim, falling back to `userId`.
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    /// `iat` claim, when present.
    pub issued_at: Option<i64>,
    pub expires_at: i64,
    pub is_expired: bool,
    /// Negative once the token has expired.
    pub seconds_until_expiry: i64,
}

/// Decodes `token` into a [`TokenInfo`], or `None` if decoding fails at
/// any step (including a missing `exp` claim — without an expiry there
/// is nothing useful to report).
pub fn token_info(token: &str, now: i64) -> Option<TokenInfo> {
    let claims = decode_claims(token)?;
    let exp = claims.exp?;

    Some(TokenInfo {
        user_id: claims.sub.or(claims.user_id),
        username: claims.username,
        email: claims.email,
        issued_at: claims.iat,
        expires_at: exp,
        is_expired: exp <= now,
        seconds_until_expiry: exp - now,
    })
}

// =========================================================================
// Tests
// =========================================================================
