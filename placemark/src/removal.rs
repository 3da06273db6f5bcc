//! Removing a location from the catalog.
//!
//! The sequence is confirm, then delete, then report. The store, the
//! signed-in session and the confirmation prompt are injected so the flow
//! runs the same against a real backend and in tests.

use std::fmt;
use thiserror::Error;

/// Identifier of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors reported by a [`LocationStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No row with this id belongs to the user.
    #[error("location '{0}' not found")]
    NotFound(String),

    /// The backend refused or failed the request.
    #[error("store request failed: {0}")]
    Backend(String),
}

/// Why a removal did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemovalError {
    #[error("no user is signed in")]
    NotSignedIn,

    #[error("failed to delete location: {0}")]
    Store(#[from] StoreError),
}

/// Persistent location storage.
pub trait LocationStore {
    /// Delete the location `id` owned by `user_id`, photos included.
    fn delete(&self, id: &str, user_id: &UserId) -> Result<(), StoreError>;
}

/// Source of the signed-in user.
pub trait Session {
    fn current_user(&self) -> Option<UserId>;
}

/// Yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Result of [`remove_location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    Cancelled,
    Failed(RemovalError),
}

impl RemovalOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RemovalOutcome::Removed)
    }

    pub fn error(&self) -> Option<&RemovalError> {
        match self {
            RemovalOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// The question asked before removing `title` (Czech, as shown in the catalog UI).
pub fn removal_prompt(title: &str) -> String {
    format!(
        "Opravdu chcete odstranit lokaci \"{}\"?\n\nAkci nelze vrátit zpět. Budou smazány i všechny související fotografie.",
        title
    )
}

/// Ask for confirmation, then delete location `id` for the signed-in user.
///
/// Nothing is deleted when the prompt is declined or no user is signed in.
pub fn remove_location(
    id: &str,
    title: &str,
    confirm: &dyn Confirm,
    session: &dyn Session,
    store: &dyn LocationStore,
) -> RemovalOutcome {
    if !confirm.confirm(&removal_prompt(title)) {
        return RemovalOutcome::Cancelled;
    }

    let Some(user) = session.current_user() else {
        return RemovalOutcome::Failed(RemovalError::NotSignedIn);
    };

    match store.delete(id, &user) {
        Ok(()) => RemovalOutcome::Removed,
        Err(err) => RemovalOutcome::Failed(err.into()),
    }
}
