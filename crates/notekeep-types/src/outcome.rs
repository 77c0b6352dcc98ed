//! The bilingual operation result returned by every mutating API call.
//!
//! The backend serves a Portuguese-speaking audience but the client UI
//! can render in either language, so a mutating operation resolves to an
//! [`Outcome`] carrying one [`Notice`] per locale. Both notices always
//! describe the same logical result — same [`OutcomeCode`], different
//! message text — and callers branch on one locale's code.
//!
//! Success messages come from a fixed table keyed by [`OutcomeKey`], so
//! the two translations can never drift apart per call site. Error
//! messages are whatever the backend (or the transport layer) said,
//! echoed verbatim into both slots: the backend reports in one language
//! and the client has no translation table for arbitrary server text.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OutcomeCode / Notice
// ---------------------------------------------------------------------------

/// Whether an operation succeeded or failed.
///
/// Serialized as the exact strings `"Success"` / `"Error"` — this is the
/// field UI code keys off, so the spelling is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeCode {
    Success,
    Error,
}

/// One locale's view of an operation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub code: OutcomeCode,
}

// ---------------------------------------------------------------------------
// OutcomeKey — the success-message table
// ---------------------------------------------------------------------------

/// Keys into the fixed success-message table.
///
/// Each mutating operation owns exactly one key. Adding an operation
/// means adding a key here and a row in [`OutcomeKey::messages`] — the
/// compiler's exhaustiveness check keeps the table complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKey {
    AccountCreated,
    ProfileUpdated,
    NoteCreated,
    NoteUpdated,
    NoteDeleted,
    NoteVisibilityChanged,
    RecoveryCodeSent,
    PasswordUpdated,
}

impl OutcomeKey {
    /// Returns the (Portuguese, English) message pair for this key.
    pub fn messages(self) -> (&'static str, &'static str) {
        match self {
            Self::AccountCreated => {
                ("Usuário criado com sucesso", "User created successfully")
            }
            Self::ProfileUpdated => (
                "Perfil atualizado com sucesso",
                "Profile updated successfully",
            ),
            Self::NoteCreated => {
                ("Nota criada com sucesso", "Note created successfully")
            }
            Self::NoteUpdated => {
                ("Nota atualizada com sucesso", "Note updated successfully")
            }
            Self::NoteDeleted => {
                ("Nota deletada com sucesso", "Note deleted successfully")
            }
            Self::NoteVisibilityChanged => (
                "Visibilidade da nota alterada com sucesso",
                "Note visibility changed successfully",
            ),
            Self::RecoveryCodeSent => (
                "Código de recuperação enviado",
                "Recovery code sent",
            ),
            Self::PasswordUpdated => {
                ("Senha atualizada com sucesso", "Password updated successfully")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The bilingual result of a mutating operation.
///
/// Invariant: `pt.code == en.code`. Both constructors uphold it, and the
/// fields are public only because the type is a wire shape — treat the
/// codes as one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub pt: Notice,
    pub en: Notice,
}

impl Outcome {
    /// A success outcome with the fixed localized messages for `key`.
    pub fn success(key: OutcomeKey) -> Self {
        let (pt, en) = key.messages();
        Self {
            pt: Notice {
                message: pt.to_string(),
                code: OutcomeCode::Success,
            },
            en: Notice {
                message: en.to_string(),
                code: OutcomeCode::Success,
            },
        }
    }

    /// An error outcome echoing `message` into both locale slots.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            pt: Notice {
                message: message.clone(),
                code: OutcomeCode::Error,
            },
            en: Notice {
                message,
                code: OutcomeCode::Error,
            },
        }
    }

    /// True if the operation succeeded. Checks one locale — the
    /// constructors guarantee both codes agree.
    pub fn is_success(&self) -> bool {
        self.en.code == OutcomeCode::Success
    }
}

// =========================================================================
// Tests
// =========================================================================
