//! Request and response types of the HTTP API.
//!
//! Field names are camelCase on the wire.

pub mod admin;
pub mod api;
pub mod catalog;
pub mod shopify;
