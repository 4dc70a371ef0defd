use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{
        ComunaModel, ListAssignmentModel, ListProductModel, ProductModel, RegionModel,
        SchoolListModel,
    },
    TestContext,
};

impl TestContext {
    /// Fixture helpers for catalog tables.
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a region named `Region {region_id}`.
    pub async fn insert_mock_region(&self, region_id: i32) -> Result<RegionModel, TestError> {
        self.insert_region(region_id, &format!("Region {}", region_id))
            .await
    }

    pub async fn insert_region(&self, region_id: i32, name: &str) -> Result<RegionModel, TestError> {
        Ok(
            entity::prelude::Region::insert(entity::region::ActiveModel {
                id: ActiveValue::Set(region_id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a commune named `Comuna {comuna_id}`, creating its region if missing.
    pub async fn insert_mock_comuna(
        &self,
        comuna_id: i32,
        region_id: i32,
    ) -> Result<ComunaModel, TestError> {
        self.insert_comuna(comuna_id, region_id, &format!("Comuna {}", comuna_id))
            .await
    }

    pub async fn insert_comuna(
        &self,
        comuna_id: i32,
        region_id: i32,
        name: &str,
    ) -> Result<ComunaModel, TestError> {
        let region_exists = entity::prelude::Region::find_by_id(region_id)
            .one(&self.setup.db)
            .await?
            .is_some();

        if !region_exists {
            self.insert_mock_region(region_id).await?;
        }

        Ok(
            entity::prelude::Comuna::insert(entity::comuna::ActiveModel {
                id: ActiveValue::Set(comuna_id),
                name: ActiveValue::Set(name.to_string()),
                region_id: ActiveValue::Set(region_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a school list named `Lista {list_id}`.
    pub async fn insert_mock_school_list(
        &self,
        list_id: i32,
    ) -> Result<SchoolListModel, TestError> {
        self.insert_school_list(list_id, &format!("Lista {}", list_id))
            .await
    }

    pub async fn insert_school_list(
        &self,
        list_id: i32,
        name: &str,
    ) -> Result<SchoolListModel, TestError> {
        let now = Utc::now();

        Ok(
            entity::prelude::SchoolList::insert(entity::school_list::ActiveModel {
                id: ActiveValue::Set(list_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set("Test description".to_string()),
                created_by: ActiveValue::Set("admin".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an assignment row, duplicates included.
    pub async fn insert_list_assignment(
        &self,
        list_id: i32,
        comuna_id: i32,
    ) -> Result<ListAssignmentModel, TestError> {
        Ok(
            entity::prelude::ListAssignment::insert(entity::list_assignment::ActiveModel {
                list_id: ActiveValue::Set(list_id),
                comuna_id: ActiveValue::Set(comuna_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a product with real-looking attributes for `shopify_id`.
    pub async fn insert_mock_product(&self, shopify_id: &str) -> Result<ProductModel, TestError> {
        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                shopify_id: ActiveValue::Set(shopify_id.to_string()),
                name: ActiveValue::Set(format!("Cuaderno {}", shopify_id)),
                price: ActiveValue::Set(1990.0),
                stock: ActiveValue::Set(25),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a list line for the product with `shopify_id`, creating the product if missing.
    pub async fn insert_list_product(
        &self,
        list_id: i32,
        shopify_id: &str,
        quantity: i32,
    ) -> Result<ListProductModel, TestError> {
        let product = match self.find_product(shopify_id).await? {
            Some(product) => product,
            None => self.insert_mock_product(shopify_id).await?,
        };

        Ok(
            entity::prelude::ListProduct::insert(entity::list_product::ActiveModel {
                list_id: ActiveValue::Set(list_id),
                product_id: ActiveValue::Set(product.id),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn find_product(&self, shopify_id: &str) -> Result<Option<ProductModel>, TestError> {
        Ok(entity::prelude::Product::find()
            .filter(entity::product::Column::ShopifyId.eq(shopify_id))
            .one(&self.setup.db)
            .await?)
    }
}
