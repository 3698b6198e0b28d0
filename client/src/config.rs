//! Build-time frontend configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is baked into the bundle when the client is compiled
//! (`BACKEND_URL=https://api.example.com cargo leptos build`). When unset the
//! client talks to its own origin with relative `/api/...` paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Base URL of the authentication backend, without a trailing slash.
pub fn backend_base_url() -> &'static str {
    normalize_base_url(BACKEND_URL.unwrap_or_default())
}

/// Trim whitespace and trailing slashes so endpoint joins never double up.
pub(crate) fn normalize_base_url(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}

/// Join `path` onto `base`, yielding exactly one `/` between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", normalize_base_url(base), path.trim_start_matches('/'))
}
