use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251201_000003_school_list::SchoolList, m20251201_000005_product::Product};

static IDX_LIST_PRODUCT_LIST_ID: &str = "idx_list_product_list_id";
static FK_LIST_PRODUCT_LIST_ID: &str = "fk_list_product_list_id";
static FK_LIST_PRODUCT_PRODUCT_ID: &str = "fk_list_product_product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(ListProduct::Id))
                    .col(integer(ListProduct::ListId))
                    .col(integer(ListProduct::ProductId))
                    .col(integer(ListProduct::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIST_PRODUCT_LIST_ID)
                    .table(ListProduct::Table)
                    .col(ListProduct::ListId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIST_PRODUCT_LIST_ID)
                    .from_tbl(ListProduct::Table)
                    .from_col(ListProduct::ListId)
                    .to_tbl(SchoolList::Table)
                    .to_col(SchoolList::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIST_PRODUCT_PRODUCT_ID)
                    .from_tbl(ListProduct::Table)
                    .from_col(ListProduct::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIST_PRODUCT_PRODUCT_ID)
                    .table(ListProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIST_PRODUCT_LIST_ID)
                    .table(ListProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIST_PRODUCT_LIST_ID)
                    .table(ListProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ListProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ListProduct {
    Table,
    Id,
    ListId,
    ProductId,
    Quantity,
}
