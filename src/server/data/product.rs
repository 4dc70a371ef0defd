use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::ProductModel;

/// Name given to products created before their catalog data has been synced
pub const PLACEHOLDER_PRODUCT_NAME: &str = "Product";

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_shopify_id(&self, shopify_id: &str) -> Result<Option<ProductModel>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::ShopifyId.eq(shopify_id))
            .one(self.db)
            .await
    }

    /// Inserts or overwrites the name, price and stock of the product with `shopify_id`
    ///
    /// A single statement, so each product upsert either fully applies or not at all. MySQL
    /// reports no insert ID when the row already existed, so the insert ID is never read.
    pub async fn upsert(
        &self,
        shopify_id: String,
        name: String,
        price: f64,
        stock: i32,
    ) -> Result<(), DbErr> {
        let product = entity::product::ActiveModel {
            shopify_id: ActiveValue::Set(shopify_id),
            name: ActiveValue::Set(name),
            price: ActiveValue::Set(price),
            stock: ActiveValue::Set(stock),
            ..Default::default()
        };

        entity::prelude::Product::insert(product)
            .on_conflict(
                OnConflict::column(entity::product::Column::ShopifyId)
                    .update_columns([
                        entity::product::Column::Name,
                        entity::product::Column::Price,
                        entity::product::Column::Stock,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Returns the product with `shopify_id`, creating a placeholder if it does not exist
    ///
    /// The placeholder is named [`PLACEHOLDER_PRODUCT_NAME`] with zero price and stock. An
    /// existing product is returned untouched. The insert resolves conflicts on the unique
    /// `shopify_id` column, so concurrent callers always end up with the same row.
    pub async fn get_or_create_placeholder(&self, shopify_id: &str) -> Result<ProductModel, DbErr> {
        let placeholder = entity::product::ActiveModel {
            shopify_id: ActiveValue::Set(shopify_id.to_string()),
            name: ActiveValue::Set(PLACEHOLDER_PRODUCT_NAME.to_string()),
            price: ActiveValue::Set(0.0),
            stock: ActiveValue::Set(0),
            ..Default::default()
        };

        // Rewriting shopify_id with itself keeps an existing row as is
        entity::prelude::Product::insert(placeholder)
            .on_conflict(
                OnConflict::column(entity::product::Column::ShopifyId)
                    .update_column(entity::product::Column::ShopifyId)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_shopify_id(shopify_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "product with Shopify ID {} missing right after insert",
                shopify_id
            ))
        })
    }
}
