//! Wire types for the tracker backend's auth endpoints.
//!
//! The backend answers with one declared shape per endpoint. Mapping into
//! the client's [`UserRef`] happens here, at the boundary, and either
//! yields a well-formed `(UserRef, token)` pair or fails with a named
//! error — the session store never sees an ambiguous response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::session::{Role, UserRef};

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
///
/// No role field: the server assigns roles and the client persists what
/// it is told at login.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub login: String,
    pub password: String,
}

/// User identity as the server serializes it.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiUser {
    pub id: String,
    pub login: String,
    pub role: Role,
}

/// Successful login response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: ApiUser,
    pub access_token: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Failures at the network boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the request; `detail` is its own message.
    #[error("server error {code}: {detail}")]
    Status { code: u16, detail: String },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response that does not satisfy the declared shape.
    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),
    /// Stubbed off-browser builds.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Most specific message available, for display in the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail, .. } if !detail.is_empty() => detail.clone(),
            Self::Network(_) | Self::Status { .. } | Self::MalformedResponse(_) | Self::Unavailable => {
                "Authentication failed. Check your credentials and try again.".to_owned()
            }
        }
    }
}

impl LoginResponse {
    /// Validate and convert into the pair the session store accepts.
    ///
    /// # Errors
    ///
    /// [`ApiError::MalformedResponse`] when the user id or token is empty;
    /// nothing is guessed from other fields.
    pub fn into_authenticated(self) -> Result<(UserRef, String), ApiError> {
        if self.user.id.is_empty() {
            return Err(ApiError::MalformedResponse("empty user id"));
        }
        if self.access_token.is_empty() {
            return Err(ApiError::MalformedResponse("empty access token"));
        }
        let user = UserRef {
            id: self.user.id,
            display_name: self.user.login,
            role: self.user.role,
        };
        Ok((user, self.access_token))
    }
}
