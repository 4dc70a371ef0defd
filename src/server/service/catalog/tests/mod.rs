
use utiles_test_utils::prelude::*;

use super::*;
