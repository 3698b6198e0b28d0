//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, the session
//! guard) and leaves shared chrome to `components`.

pub mod home;
pub mod login;
pub mod private;
pub mod register;
