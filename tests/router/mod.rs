//! End-to-end tests through the full router.
//!
//! Requests go through routing, the admin middleware, the session layer and the JSON
//! extractors exactly as in production, against an in-memory SQLite database.

mod admin;
mod catalog;
mod shopify;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use utiles_test_utils::prelude::*;

use crate::util::{body_json, get, post_json, post_json_as, session_cookie};
use crate::TestContextExt;
