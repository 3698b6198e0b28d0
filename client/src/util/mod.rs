//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `nav` keeps redirect/logout behavior identical across components and
//! `lifetime` ties async work to a mounted component.

pub mod lifetime;
pub mod nav;
