use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::ComunaModel;

pub struct ComunaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComunaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Communes of a region ordered by name
    ///
    /// Returns an empty list for regions without communes, including unknown region IDs.
    pub async fn get_by_region_id(&self, region_id: i32) -> Result<Vec<ComunaModel>, DbErr> {
        entity::prelude::Comuna::find()
            .filter(entity::comuna::Column::RegionId.eq(region_id))
            .order_by_asc(entity::comuna::Column::Name)
            .all(self.db)
            .await
    }
}
