//! Shared navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard, the navbar, and the private page all leave through the same
//! door: a history-replacing redirect to `/login`, so the back button never
//! returns to an authenticated view.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos_router::NavigateOptions;

use crate::state::guard::GuardOutcome;
use crate::state::session::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PRIVATE_PATH: &str = "/private";

/// Navigation options that replace the current history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login`, replacing history.
pub fn redirect_to_login<F>(navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(LOGIN_PATH, replace_options());
}

/// Drop the session token and redirect to `/login`. Safe with or without a
/// token present.
pub fn logout<F>(session: SessionState, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    session.clear_token();
    redirect_to_login(navigate);
}

/// Act on a settled guard: only `Redirect` navigates. A rendered or
/// cancelled guard leaves history alone.
pub fn settle<F>(outcome: &GuardOutcome, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if *outcome == GuardOutcome::Redirect {
        redirect_to_login(navigate);
    }
}
