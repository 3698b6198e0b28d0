//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the bearer token and notifies readers when it changes;
//! `guard` is the validation state machine the private page drives.

pub mod guard;
pub mod session;
