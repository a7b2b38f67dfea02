//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`) and provided through Leptos
//! context so pages and the dashboard chrome read the same signals.

pub mod auth;
pub mod theme;
