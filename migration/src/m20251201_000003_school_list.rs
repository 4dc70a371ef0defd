use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolList::Table)
                    .if_not_exists()
                    .col(pk_auto(SchoolList::Id))
                    .col(string(SchoolList::Name))
                    .col(text(SchoolList::Description))
                    .col(string(SchoolList::CreatedBy))
                    .col(timestamp_with_time_zone(SchoolList::CreatedAt))
                    .col(timestamp_with_time_zone(SchoolList::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolList::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SchoolList {
    Table,
    Id,
    Name,
    Description,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
