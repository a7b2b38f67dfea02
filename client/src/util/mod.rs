//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod geo;
pub mod issue_metrics;
pub mod jurisdictions;
pub mod poll;
pub mod theme;
pub mod time;
