//! Repository tests against an in-memory SQLite database.


use utiles_test_utils::prelude::*;

use crate::server::data::{
    comuna::ComunaRepository, list_assignment::ListAssignmentRepository,
    list_product::ListProductRepository, product::ProductRepository, region::RegionRepository,
    school_list::SchoolListRepository,
};
