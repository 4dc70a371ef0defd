//! Server application models and type definitions.
//!
//! This module contains the application state shared by handlers, database model type
//! aliases, and typed wrappers around session data.

pub mod app;
pub mod db;
pub mod session;
