//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues same-origin HTTP requests (forwarded to the backend by the
//! host) and `types` defines the wire schema those requests exchange.

pub mod api;
pub mod types;
