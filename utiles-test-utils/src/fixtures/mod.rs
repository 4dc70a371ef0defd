//! Database fixtures for tests.
//!
//! - `catalog` - regions, communes, school lists, assignments, products and list lines

pub mod catalog;
