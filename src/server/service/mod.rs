//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories (inside a transaction where a write spans
//! several tables) and convert database models into the DTOs returned by the API.

pub mod catalog;
pub mod shopify;
