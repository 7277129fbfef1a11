use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod jwt;
mod middleware;
mod models;
mod password;
mod repositories;
mod routes;
mod services;
mod state;
mod validation;

use crate::config::ServerConfig;
use crate::jwt::{JwtConfig, JwtService};
use crate::password::Argon2Hasher;
use crate::repositories::{PgItemStore, PgUserStore};
use crate::services::{AuthService, InventoryService};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("Starting inventory service");

    // Initialize database connection pool
    let db_config = common::database::DatabaseConfig::from_env()?;
    let pool = common::database::init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    // Configuration is read once here and handed to components explicitly.
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(&jwt_config);
    let server_config = ServerConfig::from_env();

    let user_store = Arc::new(PgUserStore::new(pool.clone()));
    let item_store = Arc::new(PgItemStore::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_store,
        Arc::new(Argon2Hasher),
        jwt_service.clone(),
    ));
    let inventory_service = Arc::new(InventoryService::new(item_store));

    let app_state = AppState {
        db_pool: pool,
        jwt_service,
        auth_service,
        inventory_service,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(&server_config.addr).await?;
    info!("Inventory service listening on {}", server_config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
