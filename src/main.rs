use std::net::SocketAddr;

use dioxus_logger::tracing::{self, Level};
use utiles::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    dioxus_logger::init(Level::INFO).expect("Failed to initialize logger");

    let db = startup::connect_to_database(&config).await.unwrap();

    let state = AppState {
        db,
        shopify_store_url: config.shopify_store_url,
        admin_token: config.admin_token,
    };

    let app = router::routes(state).layer(startup::session_layer());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app).await.unwrap();
}
