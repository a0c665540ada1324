//! Networking modules for the trip planner endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /get_summary` call and `types` defines
//! the request/response schema shared with the host.

pub mod api;
pub mod types;
