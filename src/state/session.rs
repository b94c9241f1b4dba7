//! Session store: the single source of truth for "who is logged in".
//!
//! ARCHITECTURE
//! ============
//! The store owns the in-memory [`Session`] exclusively; durable storage is
//! a mirror written through on every transition, never a second owner. The
//! storage backend is injected so the store can run against real
//! `localStorage` in the browser and an in-memory map in native tests.
//!
//! STATE MACHINE
//! =============
//! Two states, two transitions:
//!
//! ```text
//!   Anonymous ──login(valid)──→ Authenticated ──logout()──→ Anonymous
//!                                    │  ↑
//!                                    └──┘ login(valid) replaces identity
//! ```
//!
//! `login` with a malformed identity fails and leaves the state untouched;
//! there is no third state reachable by bad input.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::storage::StorageBackend;

/// localStorage key for the bearer token.
pub const TOKEN_KEY: &str = "tracker_auth_token";
/// localStorage key for the serialized [`UserRef`].
pub const USER_KEY: &str = "tracker_auth_user";

/// Role assigned by the server at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Identity of the authenticated user, as issued by the server.
///
/// The whole struct is persisted verbatim so a restart restores the
/// server-issued role instead of re-deriving it client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub display_name: String,
    pub role: Role,
}

/// Current authentication status of the running client.
///
/// An enum rather than flag-plus-options: a session that claims to be
/// authenticated without a user or token is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user: UserRef, token: String },
}

/// Errors raised by local session transitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// `login` was called with an empty user id or empty token.
    #[error("login requires a non-empty user id and a non-empty token")]
    InvalidCredentialsShape,
}

/// Owns the in-memory [`Session`] and mirrors it to durable storage.
///
/// Exactly one instance exists per process, created by [`initialize`]
/// before any routing decision and shared via context as the single
/// writer on the single execution thread.
///
/// [`initialize`]: SessionStore::initialize
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

impl<S: StorageBackend> SessionStore<S> {
    /// Build the store from persisted state, if any.
    ///
    /// A token is only trusted when the persisted identity alongside it
    /// deserializes to a [`UserRef`] with a non-empty id. Anything less
    /// resolves to `Anonymous` and wipes the stale keys, so corruption is
    /// recovered silently rather than producing a partially-valid session.
    pub fn initialize(storage: S) -> Self {
        let session = match (storage.get(TOKEN_KEY), storage.get(USER_KEY)) {
            (Some(token), Some(user_json)) if !token.is_empty() => {
                match serde_json::from_str::<UserRef>(&user_json) {
                    Ok(user) if !user.id.is_empty() => Session::Authenticated { user, token },
                    Ok(_) => {
                        log::warn!("persisted user has an empty id; resetting to anonymous");
                        Session::Anonymous
                    }
                    Err(err) => {
                        log::warn!("persisted user is unreadable ({err}); resetting to anonymous");
                        Session::Anonymous
                    }
                }
            }
            (None, None) => Session::Anonymous,
            _ => {
                log::warn!("partial persisted auth state; resetting to anonymous");
                Session::Anonymous
            }
        };

        if session == Session::Anonymous {
            storage.remove(TOKEN_KEY);
            storage.remove(USER_KEY);
        }

        Self { session, storage }
    }

    /// Transition to `Authenticated` with the given identity and token.
    ///
    /// Re-login while already authenticated replaces the prior identity and
    /// token outright. The user record is persisted before the token so a
    /// persisted token always implies a reconstructable identity.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentialsShape`] if `user.id` or `token` is
    /// empty; the prior session and persisted state are left unchanged.
    pub fn login(&mut self, user: UserRef, token: String) -> Result<(), AuthError> {
        if user.id.is_empty() || token.is_empty() {
            return Err(AuthError::InvalidCredentialsShape);
        }

        // UserRef serialization cannot fail; guard anyway so storage is
        // never left holding a token without an identity.
        match serde_json::to_string(&user) {
            Ok(user_json) => {
                self.storage.set(USER_KEY, &user_json);
                self.storage.set(TOKEN_KEY, &token);
            }
            Err(err) => {
                log::error!("failed to serialize user for persistence: {err}");
                self.storage.remove(TOKEN_KEY);
                self.storage.remove(USER_KEY);
            }
        }

        self.session = Session::Authenticated { user, token };
        Ok(())
    }

    /// Reset to `Anonymous` and drop all persisted auth data.
    ///
    /// Idempotent: logging out while already anonymous is a no-op.
    pub fn logout(&mut self) {
        self.session = Session::Anonymous;
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Pure read of the current state; safe on every render.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated { .. })
    }

    /// The authenticated user, or `None` while anonymous.
    #[must_use]
    pub fn current_user(&self) -> Option<&UserRef> {
        match &self.session {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }

    /// The bearer token, or `None` while anonymous.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match &self.session {
            Session::Authenticated { token, .. } => Some(token.as_str()),
            Session::Anonymous => None,
        }
    }
}
