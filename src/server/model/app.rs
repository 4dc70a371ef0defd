use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Storefront domain cart URLs point at, e.g. `my-store.myshopify.com`
    pub shopify_store_url: String,
    pub admin_token: String,
}

#[cfg(test)]
impl AppState {
    /// State over `db` with the shared test storefront and admin token.
    pub fn for_test(db: &DatabaseConnection) -> Self {
        use utiles_test_utils::prelude::{TEST_ADMIN_TOKEN, TEST_SHOPIFY_STORE_URL};

        Self {
            db: db.clone(),
            shopify_store_url: TEST_SHOPIFY_STORE_URL.to_string(),
            admin_token: TEST_ADMIN_TOKEN.to_string(),
        }
    }
}
