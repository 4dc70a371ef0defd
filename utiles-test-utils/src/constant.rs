//! Configuration constants shared by tests.
//!
//! These values are placeholders used to build application state for tests and are not
//! tied to any real storefront or credential.

/// Store domain used when building cart URLs in tests.
pub static TEST_SHOPIFY_STORE_URL: &str = "shop.example.com";

/// Admin bearer token accepted by the application state built for tests.
pub static TEST_ADMIN_TOKEN: &str = "test-admin-token";
