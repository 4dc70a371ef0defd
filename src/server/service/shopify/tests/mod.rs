mod sync_products;

use utiles_test_utils::prelude::*;

use super::*;
use crate::model::shopify::ShopifyId;
