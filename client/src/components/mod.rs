//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (dashboard frame, landing navbar/footer)
//! and display widgets reused across pages, reading shared state from Leptos
//! context providers.

pub mod charts;
pub mod dashboard_layout;
pub mod doc_section;
pub mod footer;
pub mod navbar;
pub mod risk_map;
pub mod status_badge;
