//! The session store: the single authoritative "who is logged in".
//!
//! One [`SessionStore`] is constructed per app instance and handed (by
//! reference) to whatever needs it — there is no global singleton. The
//! store is deliberately synchronous and single-owner, like a plain
//! struct behind whatever sharing the embedding app chooses; every
//! mutation is a field assignment followed by a write to the durable
//! [`CredentialStore`].
//!
//! # Lifecycle
//!
//! ```text
//! new() ──→ initialize() ──→ login() ⇄ logout()
//!               │                │
//!               └── hydrate ─────┴── check_token_validity() (any time)
//! ```
//!
//! `new` has no side effects; `initialize` performs the one-time
//! hydration from durable storage plus an initial validity check.

use std::time::Duration;
use tracing::{info, warn};

use notekeep_types::{AuthGrant, User};

use crate::persist::{CredentialStore, TOKEN_KEY, USER_KEY};
use crate::token::{check_token, now_unix, token_info, TokenInfo};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for session persistence.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Retention window for the persisted user/token entries.
    ///
    /// This is how long the credential *cache* is kept, not how long the
    /// session is trusted — token expiry is always re-checked from the
    /// token's own `exp` claim. The default mirrors the historical
    /// 5000-day window; apps that want "forget me after a week" set it
    /// here.
    pub persist_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist_ttl: Duration::from_secs(5000 * 24 * 60 * 60),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// In-memory session state backed by a durable [`CredentialStore`].
///
/// Generic over the store so tests run against
/// [`MemoryStore`](crate::MemoryStore) and apps use
/// [`FileStore`](crate::FileStore) or their own implementation.
#[derive(Debug)]
pub struct SessionStore<S> {
    user: User,
    token: String,
    /// Cached result of the last validity check. `login` sets it true
    /// unconditionally (the grant was just accepted by the backend);
    /// everything else derives it from the token.
    token_valid: bool,
    config: SessionConfig,
    store: S,
}

impl<S: CredentialStore> SessionStore<S> {
    /// Creates a logged-out session over `store`. No storage access
    /// happens here; call [`initialize`](Self::initialize) to pick up a
    /// persisted session.
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self {
            user: User::anonymous(),
            token: String::new(),
            token_valid: false,
            config,
            store,
        }
    }

    /// Hydrates from durable storage and runs one validity check.
    ///
    /// Call once at startup. Returns the resulting validity so callers
    /// can route straight to a login screen when it's `false`.
    pub fn initialize(&mut self) -> bool {
        let valid = self.check_token_validity();
        info!(
            valid,
            user = %self.user.username,
            "session initialized"
        );
        valid
    }

    // -- Accessors ---------------------------------------------------------

    /// The current user; [`User::anonymous`] when logged out.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The current bearer token; empty when logged out.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The validity flag as of the last check or login.
    pub fn is_token_valid(&self) -> bool {
        self.token_valid
    }

    /// Decoded diagnostic view of the current token, or `None` when
    /// logged out or the token doesn't decode.
    pub fn token_info(&self) -> Option<TokenInfo> {
        token_info(&self.token, now_unix())
    }

    // -- Mutations ---------------------------------------------------------

    /// Installs a fresh login.
    ///
    /// The caller has already confirmed the grant with the backend, so
    /// the token is trusted as-is: no re-validation, validity is set
    /// true, and both entries are persisted with the configured
    /// retention window. Infallible.
    pub fn login(&mut self, grant: AuthGrant) {
        self.user = grant.user;
        self.token = grant.token;
        self.persist();
        self.token_valid = true;
        info!(user = %self.user.username, "logged in");
    }

    /// Clears the session: anonymous user, empty token, persisted
    /// entries removed, validity false. Infallible, idempotent.
    pub fn logout(&mut self) {
        self.user = User::anonymous();
        self.token = String::new();
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
        self.token_valid = false;
        info!("logged out");
    }

    /// Re-reads durable storage, then recomputes validity by decoding
    /// the token locally. No network call, never raises.
    ///
    /// The rehydrate-first step means another instance sharing the same
    /// store (a second app window, say) that logged in more recently
    /// wins — this check picks up its credentials.
    pub fn check_token_validity(&mut self) -> bool {
        self.hydrate();

        self.token_valid = !self.token.is_empty()
            && check_token(&self.token, now_unix()).is_valid();
        self.token_valid
    }

    // -- Persistence -------------------------------------------------------

    /// Replaces in-memory state from durable storage.
    ///
    /// Both entries must be present; with either one missing (expired
    /// retention, partial wipe) the in-memory state is left untouched
    /// rather than half-replaced or force-cleared.
    fn hydrate(&mut self) {
        let (Some(user_json), Some(token)) =
            (self.store.get(USER_KEY), self.store.get(TOKEN_KEY))
        else {
            return;
        };

        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => {
                self.user = user;
                self.token = token;
            }
            Err(err) => {
                warn!(%err, "persisted user entry is not valid JSON, keeping in-memory state");
            }
        }
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.user) {
            Ok(user_json) => {
                self.store.set(USER_KEY, &user_json, self.config.persist_ttl);
            }
            Err(err) => {
                warn!(%err, "failed to serialize user for persistence");
            }
        }
        self.store.set(TOKEN_KEY, &self.token, self.config.persist_ttl);
    }
}

// =========================================================================
// Tests
// =========================================================================
