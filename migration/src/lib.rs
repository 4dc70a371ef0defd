pub use sea_orm_migration::prelude::*;

mod m20251201_000001_region;
mod m20251201_000002_comuna;
mod m20251201_000003_school_list;
mod m20251201_000004_list_assignment;
mod m20251201_000005_product;
mod m20251201_000006_list_product;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_region::Migration),
            Box::new(m20251201_000002_comuna::Migration),
            Box::new(m20251201_000003_school_list::Migration),
            Box::new(m20251201_000004_list_assignment::Migration),
            Box::new(m20251201_000005_product::Migration),
            Box::new(m20251201_000006_list_product::Migration),
        ]
    }
}
