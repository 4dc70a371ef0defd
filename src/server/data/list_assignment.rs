use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct ListAssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListAssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a list to a commune
    ///
    /// Always inserts a new row, assigning the same pair twice leaves two rows behind.
    pub async fn create(
        &self,
        list_id: i32,
        comuna_id: i32,
    ) -> Result<entity::list_assignment::Model, DbErr> {
        let assignment = entity::list_assignment::ActiveModel {
            list_id: ActiveValue::Set(list_id),
            comuna_id: ActiveValue::Set(comuna_id),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }
}
