//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, polling) and
//! delegates rendering details to `components`. Pure helpers that decide
//! what a page shows live next to the page and are unit-tested there.

pub mod accountability;
pub mod analytics;
pub mod authority_dashboard;
pub mod community;
pub mod cri_map;
pub mod ethics;
pub mod how_cri_works;
pub mod issue_detail;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod report;
pub mod system_status;
