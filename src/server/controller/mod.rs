//! HTTP controller endpoints for the catalog API.
//!
//! Axum handlers annotated with utoipa for OpenAPI documentation. Handlers extract and
//! validate path parameters and JSON bodies, delegate to services and map results to JSON
//! responses; errors convert into responses through [`crate::server::error::Error`].

pub mod admin;
pub mod auth;
pub mod geography;
pub mod health;
pub mod list;
pub mod shopify;
pub mod util;
