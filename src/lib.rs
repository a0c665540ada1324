//! # nologynav
//!
//! Axum host for the NologyNav trip summary client. Server-renders the
//! Leptos app from the `client` crate, serves its compiled bundle, and
//! forwards `POST /get_summary` to the external trip planner.

pub mod config;
pub mod routes;
pub mod state;
pub mod upstream;
