use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::SchoolListModel;

pub struct SchoolListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchoolListRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a school list with both timestamps set to now
    pub async fn create(
        &self,
        name: String,
        description: String,
        created_by: String,
    ) -> Result<SchoolListModel, DbErr> {
        let now = Utc::now();

        let school_list = entity::school_list::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        school_list.insert(self.db).await
    }

    pub async fn get_by_id(&self, list_id: i32) -> Result<Option<SchoolListModel>, DbErr> {
        entity::prelude::SchoolList::find_by_id(list_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, list_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::SchoolList::find_by_id(list_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists assigned to a commune ordered by name
    ///
    /// Filters on `id IN (subquery)` rather than joining so that duplicate assignment rows
    /// never duplicate a list in the result.
    pub async fn get_by_comuna_id(&self, comuna_id: i32) -> Result<Vec<SchoolListModel>, DbErr> {
        let assigned_list_ids = Query::select()
            .column(entity::list_assignment::Column::ListId)
            .from(entity::list_assignment::Entity)
            .and_where(entity::list_assignment::Column::ComunaId.eq(comuna_id))
            .to_owned();

        entity::prelude::SchoolList::find()
            .filter(entity::school_list::Column::Id.in_subquery(assigned_list_ids))
            .order_by_asc(entity::school_list::Column::Name)
            .order_by_asc(entity::school_list::Column::Id)
            .all(self.db)
            .await
    }
}
