//! Data access layer repositories.
//!
//! One repository per catalog table. Repositories are generic over `ConnectionTrait` so the
//! same queries run on a pooled connection or inside a transaction.

pub mod comuna;
pub mod list_assignment;
pub mod list_product;
pub mod product;
pub mod region;
pub mod school_list;

#[cfg(test)]
mod tests;
