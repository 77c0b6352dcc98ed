//! The durable credential store: where the session survives restarts.
//!
//! The session owns exactly two persisted entries — the serialized user
//! identity and the raw bearer token — each with its own expiry. The
//! storage medium is behind the [`CredentialStore`] trait so the session
//! logic doesn't care whether it's a JSON file on disk ([`FileStore`]),
//! a test map ([`MemoryStore`]), or some platform keychain a downstream
//! app plugs in.
//!
//! Entry expiry here is a retention window for the cached credentials,
//! not a security timeout — the token carries its own `exp` claim and
//! validity is always re-derived from that.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::SessionError;

/// Store key for the JSON-serialized user identity.
pub const USER_KEY: &str = "user";
/// Store key for the raw bearer token string.
pub const TOKEN_KEY: &str = "token";

// ---------------------------------------------------------------------------
// CredentialStore
// ---------------------------------------------------------------------------

/// A tiny string key-value store with per-entry expiry.
///
/// # Contract
///
/// - `get` returns `None` for missing *and* expired entries — callers
///   never see a stale value.
/// - `set` and `remove` are infallible from the caller's point of view.
///   Implementations that can fail (disk full, permissions) log and
///   carry on, because `login`/`logout` have no failure path to
///   propagate into.
pub trait CredentialStore: Send + Sync + 'static {
    /// Reads an entry, or `None` if absent or past its expiry.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes an entry that expires `ttl` from now.
    fn set(&mut self, key: &str, value: &str, ttl: Duration);

    /// Deletes an entry. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);
}

/// One stored value with its absolute expiry (unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    value: String,
    expires_at: i64,
}

impl Entry {
    fn new(value: &str, ttl: Duration) -> Self {
        Self {
            value: value.to_string(),
            expires_at: unix_now() + ttl.as_secs() as i64,
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at <= unix_now()
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// An in-memory [`CredentialStore`]. Nothing survives the process —
/// useful for tests and for "don't remember me" sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) {
        self.entries.insert(key.to_string(), Entry::new(value, ttl));
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// A [`CredentialStore`] backed by a single JSON file.
///
/// The whole map is held in memory and rewritten on every mutation —
/// with two small entries that's cheaper than being clever. Reads never
/// touch the disk after `open`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, Entry>,
}

impl FileStore {
    /// Opens (or creates) the store at `path`.
    ///
    /// # Errors
    /// - [`SessionError::StoreOpen`] — the file exists but can't be read
    /// - [`SessionError::StoreCorrupt`] — the file isn't valid JSON
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(SessionError::StoreCorrupt)?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                HashMap::new()
            }
            Err(err) => return Err(SessionError::StoreOpen(err)),
        };

        Ok(Self { path, entries })
    }

    /// Rewrites the backing file from the in-memory map. Failures are
    /// logged, not returned — the in-memory state stays authoritative
    /// for this process either way.
    fn save(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize credential store");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!(%err, path = %self.path.display(), "failed to write credential store");
        }
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) {
        self.entries.insert(key.to_string(), Entry::new(value, ttl));
        self.save();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.save();
    }
}

// =========================================================================
// Tests
// =========================================================================
