//! ENGN-F1 marketing site server.
//!
//! Wires the lead store and showcase data from `engn-core` into an Axum
//! application. Serves the JSON API at `/api/*` and the front-end build at
//! every other path.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
