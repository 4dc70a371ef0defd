use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sqlx::{mysql::MySqlPoolOptions, ConnectOptions as _},
    DatabaseConnection, SqlxMySqlConnector,
};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let options = config.database.connect_options()?.disable_statement_logging();
    let pool = MySqlPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    let db = SqlxMySqlConnector::from_sqlx_mysql_pool(pool);

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management for admin sessions
///
/// Sessions live in process memory and are lost on restart, admins then log in again.
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(8)))
}
