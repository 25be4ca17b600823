//! Core library for the ENGN-F1 lead service.
//!
//! Contains the lead data model, the request schema that turns untyped JSON
//! into a [`model::NewLead`], the lead and user stores, and the decorative
//! showcase fixtures (random metrics, static use cases). This crate depends
//! on `engn-storage` for the storage backend trait and knows nothing about
//! HTTP.

pub mod error;
pub mod lead;
pub mod model;
pub mod phone;
pub mod schema;
pub mod showcase;
pub mod user;
