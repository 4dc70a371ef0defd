//! Shared test harness for the catalog service.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, and the [`TestContext`] it builds exposes the in-memory SQLite database, a
//! session backed by an in-memory store, and fixture helpers for inserting more rows.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_TOKEN, TEST_SHOPIFY_STORE_URL},
        TestBuilder, TestContext, TestError,
    };
}
