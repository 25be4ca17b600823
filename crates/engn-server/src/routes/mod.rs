//! HTTP route handlers for the ENGN-F1 server.
//!
//! - `leads`: demo-request intake and listing
//! - `metrics`: randomized dashboard numbers
//! - `use_cases`: static industry showcase
//! - `ui`: the built front-end with SPA fallback

pub mod leads;
pub mod metrics;
pub mod ui;
pub mod use_cases;
