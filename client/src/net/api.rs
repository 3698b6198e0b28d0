//! REST API helpers for communicating with the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The variants keep rejected
//! statuses apart from transport and decode failures so callers can log the
//! difference even when they react to all three the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use thiserror::Error;

use super::types::UserInfo;
use crate::state::guard::Validator;

pub const PRIVATE_ENDPOINT: &str = "/api/private";
pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A success status arrived with a body we could not decode.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Rejected` error, preferring the backend's `msg` when present.
    pub fn rejected(status: u16, backend_msg: Option<String>) -> Self {
        let message = backend_msg
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| rejected_status_message(status));
        Self::Rejected { status, message }
    }

    /// `true` when the failure was the network rather than the backend.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

fn rejected_status_message(status: u16) -> String {
    format!("request rejected: {status}")
}

/// `Authorization` header value for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn backend_url(path: &str) -> String {
    crate::config::endpoint(crate::config::backend_base_url(), path)
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let msg = resp.json::<super::types::ApiMessage>().await.ok().map(|m| m.msg);
    ApiError::rejected(status, msg)
}

/// Validate `token` via `GET /api/private` and return the caller's identity.
///
/// # Errors
///
/// `Transport` if the request cannot be sent, `Rejected` for any non-success
/// status, `Decode` if the success body has no `name`.
pub async fn fetch_private(token: &str) -> Result<UserInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&backend_url(PRIVATE_ENDPOINT))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<UserInfo>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Exchange credentials for a bearer token via `POST /api/login`.
///
/// # Errors
///
/// `Rejected` carries the backend's message (e.g. wrong password).
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(&backend_url(LOGIN_ENDPOINT))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let body: super::types::LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.token.is_empty() {
            return Err(ApiError::Decode("empty token".to_owned()));
        }
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/register`. Returns the backend message.
///
/// # Errors
///
/// `Rejected` carries the backend's message (e.g. duplicate email).
pub async fn register(email: &str, name: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::RegisterRequest { email, name, password };
        let resp = gloo_net::http::Request::post(&backend_url(REGISTER_ENDPOINT))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let body: super::types::RegisterResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.msg)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, name, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// [`Validator`] backed by the real `/api/private` endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct BackendValidator;

impl Validator for BackendValidator {
    fn validate(&self, token: &str) -> impl Future<Output = Result<UserInfo, ApiError>> {
        fetch_private(token)
    }
}
