use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::RegionModel;

pub struct RegionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All regions ordered by name
    pub async fn get_all(&self) -> Result<Vec<RegionModel>, DbErr> {
        entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Name)
            .all(self.db)
            .await
    }
}
