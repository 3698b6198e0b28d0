//! Session guard for pages that require a validated token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The private page runs [`run_guard`] once per mount. The guard reads the
//! token, validates it with exactly one backend call, and tells the page
//! whether to render or to redirect to `/login`.
//!
//! STATES
//! ======
//! ```text
//! CheckingToken --no token--> Redirecting
//! CheckingToken --token-----> Validating --ok----> Validated(user)
//!                                        --error-> Redirecting
//! ```
//!
//! A rejected status, a transport error, and an undecodable success body all
//! clear the token and redirect. There are no retries and no timeout.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::future::Future;

use crate::net::api::ApiError;
use crate::net::types::UserInfo;
use crate::state::session::SessionState;
use crate::util::lifetime::MountLifetime;

/// Current position in the guard state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    CheckingToken,
    Validating,
    Validated(UserInfo),
    Redirecting,
}

/// Input that moves the guard between phases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardEvent {
    TokenMissing,
    TokenFound,
    ValidationSucceeded(UserInfo),
    ValidationFailed,
}

impl GuardPhase {
    /// Apply `event`. Events that do not fit the current phase leave it
    /// unchanged; `Validated` and `Redirecting` are terminal.
    #[must_use]
    pub fn on(self, event: GuardEvent) -> Self {
        match (self, event) {
            (Self::CheckingToken, GuardEvent::TokenMissing) => Self::Redirecting,
            (Self::CheckingToken, GuardEvent::TokenFound) => Self::Validating,
            (Self::Validating, GuardEvent::ValidationSucceeded(user)) => Self::Validated(user),
            (Self::Validating, GuardEvent::ValidationFailed) => Self::Redirecting,
            (phase, _) => phase,
        }
    }

    /// `true` while the page should show its loading indicator.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::CheckingToken | Self::Validating)
    }

    /// The validated identity; `None` in every other phase.
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Self::Validated(user) => Some(user),
            _ => None,
        }
    }
}

/// What the page should do once the guard settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render(UserInfo),
    Redirect,
    /// The page unmounted mid-validation; nothing was written.
    Cancelled,
}

/// Checks a bearer token against the backend.
pub trait Validator {
    fn validate(&self, token: &str) -> impl Future<Output = Result<UserInfo, ApiError>>;
}

/// Drive the guard for one mount.
///
/// `publish` receives each phase as it is entered. On failure the token is
/// cleared before `Redirect` is returned. If `lifetime` is cancelled while
/// the validation is in flight, the result is dropped: no token write, no
/// further `publish`, and `Cancelled` is returned.
pub async fn run_guard<V, F>(
    session: SessionState,
    validator: &V,
    lifetime: &MountLifetime,
    mut publish: F,
) -> GuardOutcome
where
    V: Validator,
    F: FnMut(&GuardPhase),
{
    let phase = GuardPhase::CheckingToken;
    publish(&phase);

    let Some(token) = session.token_untracked() else {
        publish(&phase.on(GuardEvent::TokenMissing));
        return GuardOutcome::Redirect;
    };

    let phase = phase.on(GuardEvent::TokenFound);
    publish(&phase);

    let result = validator.validate(&token).await;
    if lifetime.is_cancelled() {
        return GuardOutcome::Cancelled;
    }

    match result {
        Ok(user) => {
            publish(&phase.on(GuardEvent::ValidationSucceeded(user.clone())));
            GuardOutcome::Render(user)
        }
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("session validation failed (transport: {}): {err}", err.is_transport());
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            session.clear_token();
            publish(&phase.on(GuardEvent::ValidationFailed));
            GuardOutcome::Redirect
        }
    }
}
