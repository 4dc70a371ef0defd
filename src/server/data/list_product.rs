use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::{ListProductModel, ProductModel};

pub struct ListProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a product line to a list
    ///
    /// Lines are never merged, adding the same product twice creates two lines.
    pub async fn create(
        &self,
        list_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<ListProductModel, DbErr> {
        let line = entity::list_product::ActiveModel {
            list_id: ActiveValue::Set(list_id),
            product_id: ActiveValue::Set(product_id),
            quantity: ActiveValue::Set(quantity),
            ..Default::default()
        };

        line.insert(self.db).await
    }

    /// Gets every line of a list with its product, ordered by line ID
    pub async fn get_by_list_id(
        &self,
        list_id: i32,
    ) -> Result<Vec<(ListProductModel, Option<ProductModel>)>, DbErr> {
        entity::prelude::ListProduct::find()
            .filter(entity::list_product::Column::ListId.eq(list_id))
            .order_by_asc(entity::list_product::Column::Id)
            .find_also_related(entity::product::Entity)
            .all(self.db)
            .await
    }
}
