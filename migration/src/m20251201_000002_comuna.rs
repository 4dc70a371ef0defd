use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_region::Region;

static IDX_COMUNA_REGION_ID: &str = "idx_comuna_region_id";
static FK_COMUNA_REGION_ID: &str = "fk_comuna_region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comuna::Table)
                    .if_not_exists()
                    .col(pk_auto(Comuna::Id))
                    .col(string(Comuna::Name))
                    .col(integer(Comuna::RegionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMUNA_REGION_ID)
                    .table(Comuna::Table)
                    .col(Comuna::RegionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMUNA_REGION_ID)
                    .from_tbl(Comuna::Table)
                    .from_col(Comuna::RegionId)
                    .to_tbl(Region::Table)
                    .to_col(Region::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMUNA_REGION_ID)
                    .table(Comuna::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMUNA_REGION_ID)
                    .table(Comuna::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comuna::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Comuna {
    Table,
    Id,
    Name,
    RegionId,
}
