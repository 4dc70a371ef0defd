//! Database model aliases used by fixtures.

pub type RegionModel = entity::region::Model;
pub type ComunaModel = entity::comuna::Model;
pub type SchoolListModel = entity::school_list::Model;
pub type ListAssignmentModel = entity::list_assignment::Model;
pub type ProductModel = entity::product::Model;
pub type ListProductModel = entity::list_product::Model;
