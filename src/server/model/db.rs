//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Region of Chile, seeded reference data.
pub type RegionModel = entity::region::Model;

/// Commune (comuna) belonging to a region, seeded reference data.
pub type ComunaModel = entity::comuna::Model;

/// School-supply list created by an administrator.
///
/// # Fields (from `entity::school_list::Model`)
/// - `id` - Primary key
/// - `name` - Display name, never empty
/// - `description` - Free text, may be empty
/// - `created_by` - Name of the administrator that created the list
/// - `created_at` - Timestamp when the list was created
/// - `updated_at` - Timestamp of the last list update
pub type SchoolListModel = entity::school_list::Model;

/// Catalog product keyed by its Shopify product ID.
///
/// Rows created while attaching an unknown product to a list are placeholders named
/// `Product` with zero price and stock until a product sync fills them in.
pub type ProductModel = entity::product::Model;

/// Line of a school list: a product and the quantity requested by that list.
pub type ListProductModel = entity::list_product::Model;
