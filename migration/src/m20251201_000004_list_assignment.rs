use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000003_school_list::SchoolList;

static IDX_LIST_ASSIGNMENT_COMUNA_ID: &str = "idx_list_assignment_comuna_id";
static FK_LIST_ASSIGNMENT_LIST_ID: &str = "fk_list_assignment_list_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on comuna_id, assignments accept any commune ID
        manager
            .create_table(
                Table::create()
                    .table(ListAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(ListAssignment::Id))
                    .col(integer(ListAssignment::ListId))
                    .col(integer(ListAssignment::ComunaId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIST_ASSIGNMENT_COMUNA_ID)
                    .table(ListAssignment::Table)
                    .col(ListAssignment::ComunaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIST_ASSIGNMENT_LIST_ID)
                    .from_tbl(ListAssignment::Table)
                    .from_col(ListAssignment::ListId)
                    .to_tbl(SchoolList::Table)
                    .to_col(SchoolList::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIST_ASSIGNMENT_LIST_ID)
                    .table(ListAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIST_ASSIGNMENT_COMUNA_ID)
                    .table(ListAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ListAssignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ListAssignment {
    Table,
    Id,
    ListId,
    ComunaId,
}
