//! Catalog service.
//!
//! Read path for regions, communes and school lists, and the admin write path that creates
//! lists, assigns them to communes and attaches products.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        admin::{CreateListDto, CreatedListDto},
        catalog::{ComunaDto, ListDetailDto, ListProductDto, RegionDto, SchoolListDto},
        shopify::ShopifyId,
    },
    server::{
        data::{
            comuna::ComunaRepository, list_assignment::ListAssignmentRepository,
            list_product::ListProductRepository, product::ProductRepository,
            region::RegionRepository, school_list::SchoolListRepository,
        },
        error::{catalog::CatalogError, Error},
        model::db::SchoolListModel,
    },
};

/// Service for browsing and curating school lists.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All regions ordered by name.
    pub async fn list_regions(&self) -> Result<Vec<RegionDto>, Error> {
        let regions = RegionRepository::new(self.db).get_all().await?;

        Ok(regions
            .into_iter()
            .map(|r| RegionDto {
                id: r.id,
                name: r.name,
            })
            .collect())
    }

    /// Communes of a region ordered by name, empty for unknown regions.
    pub async fn list_comunas(&self, region_id: i32) -> Result<Vec<ComunaDto>, Error> {
        let comunas = ComunaRepository::new(self.db)
            .get_by_region_id(region_id)
            .await?;

        Ok(comunas
            .into_iter()
            .map(|c| ComunaDto {
                id: c.id,
                name: c.name,
                region_id: c.region_id,
            })
            .collect())
    }

    /// Lists assigned to a commune ordered by name, each list appearing once.
    pub async fn list_school_lists(&self, comuna_id: i32) -> Result<Vec<SchoolListDto>, Error> {
        let lists = SchoolListRepository::new(self.db)
            .get_by_comuna_id(comuna_id)
            .await?;

        Ok(lists.into_iter().map(school_list_dto).collect())
    }

    /// Retrieves a list with its product lines.
    ///
    /// Produces one product entry per line, in line order, each carrying the line quantity.
    /// Adding the same product twice therefore shows it twice.
    ///
    /// # Returns
    /// - `Ok(ListDetailDto)` - List found
    /// - `Err(Error::CatalogError(CatalogError::ListNotFound))` - No list with `list_id`
    /// - `Err(Error::InternalError)` - A line references a product that does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_list_detail(&self, list_id: i32) -> Result<ListDetailDto, Error> {
        let Some(list) = SchoolListRepository::new(self.db).get_by_id(list_id).await? else {
            return Err(CatalogError::ListNotFound(list_id).into());
        };

        let lines = ListProductRepository::new(self.db)
            .get_by_list_id(list_id)
            .await?;

        let mut products = Vec::with_capacity(lines.len());
        for (line, maybe_product) in lines {
            // Only reachable if the product foreign key is not enforced
            let product = maybe_product.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find product ID {} referenced by line ID {} of list ID {}",
                    line.product_id, line.id, list_id
                ))
            })?;

            products.push(ListProductDto {
                id: product.id,
                shopify_id: ShopifyId(product.shopify_id),
                name: product.name,
                price: product.price,
                stock: product.stock,
                quantity: line.quantity,
            });
        }

        Ok(ListDetailDto {
            list: school_list_dto(list),
            products,
        })
    }

    /// Creates a school list.
    ///
    /// The name is trimmed and must not be empty. Description and author are stored as given,
    /// empty strings included.
    pub async fn create_school_list(&self, input: CreateListDto) -> Result<CreatedListDto, Error> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidInput("List name must not be empty".to_string()).into());
        }

        let list = SchoolListRepository::new(self.db)
            .create(name.to_string(), input.description, input.created_by)
            .await?;

        Ok(CreatedListDto {
            id: list.id,
            name: list.name,
            description: list.description,
        })
    }

    /// Assigns a list to a commune.
    ///
    /// The commune ID is not checked and repeated assignments are stored as duplicate rows.
    ///
    /// # Returns
    /// - `Ok(())` - Assignment stored
    /// - `Err(Error::CatalogError(CatalogError::ListNotFound))` - No list with `list_id`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn assign_list_to_comuna(&self, list_id: i32, comuna_id: i32) -> Result<(), Error> {
        if !SchoolListRepository::new(self.db).exists(list_id).await? {
            return Err(CatalogError::ListNotFound(list_id).into());
        }

        ListAssignmentRepository::new(self.db)
            .create(list_id, comuna_id)
            .await?;

        Ok(())
    }

    /// Adds a product line to a list, creating a placeholder product for unknown Shopify IDs.
    ///
    /// The list check, product resolution and line insert run in one transaction. Dropping the
    /// transaction on an early return rolls it back, so a missing list never leaves a
    /// placeholder product behind.
    ///
    /// # Returns
    /// - `Ok(i32)` - Internal ID of the product the line points at
    /// - `Err(Error::CatalogError(CatalogError::InvalidInput))` - Non-positive quantity or blank ID
    /// - `Err(Error::CatalogError(CatalogError::ListNotFound))` - No list with `list_id`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_product_to_list(
        &self,
        list_id: i32,
        shopify_id: &ShopifyId,
        quantity: i32,
    ) -> Result<i32, Error> {
        let shopify_id = shopify_id.as_str().trim();
        if shopify_id.is_empty() {
            return Err(
                CatalogError::InvalidInput("Shopify product ID must not be empty".to_string())
                    .into(),
            );
        }
        if quantity <= 0 {
            return Err(
                CatalogError::InvalidInput("Quantity must be greater than zero".to_string())
                    .into(),
            );
        }

        let txn = self.db.begin().await?;

        if !SchoolListRepository::new(&txn).exists(list_id).await? {
            return Err(CatalogError::ListNotFound(list_id).into());
        }

        let product = ProductRepository::new(&txn)
            .get_or_create_placeholder(shopify_id)
            .await?;

        ListProductRepository::new(&txn)
            .create(list_id, product.id, quantity)
            .await?;

        txn.commit().await?;

        Ok(product.id)
    }
}

fn school_list_dto(list: SchoolListModel) -> SchoolListDto {
    SchoolListDto {
        id: list.id,
        name: list.name,
        description: list.description,
        created_by: list.created_by,
        created_at: list.created_at,
        updated_at: list.updated_at,
    }
}
