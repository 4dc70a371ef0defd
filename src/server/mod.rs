//! Server application core modules.
//!
//! HTTP routing, admin authorization, database access and the Shopify integration for the
//! school-supply list catalog.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
