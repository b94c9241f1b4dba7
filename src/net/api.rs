//! REST calls to the auth endpoints.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::Unavailable`] since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are turned into [`ApiError::Status`] carrying the
//! backend's `detail` message when one parses, so the form can show the
//! most specific text available and fall back to a generic line.

#![allow(clippy::unused_async)]

use super::types::{ApiError, LoginRequest, LoginResponse, RegisterRequest};

#[cfg(feature = "hydrate")]
use super::types::ErrorBody;

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let code = resp.status();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .map(|body| body.detail)
        .unwrap_or_default();
    ApiError::Status { code, detail }
}

/// Authenticate against `POST /api/auth/login`.
///
/// # Errors
///
/// [`ApiError`] when the request fails, the server rejects the
/// credentials, or the success body does not parse.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| ApiError::MalformedResponse("login body did not parse"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// Success carries no session: the caller switches to the login form
/// rather than authenticating.
///
/// # Errors
///
/// [`ApiError`] when the request fails or the server rejects it.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}
