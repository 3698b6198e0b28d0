//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the JSON bodies exchanged
//! with the backend.

pub mod api;
pub mod types;
