//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::jwt::JwtService;
use crate::services::{AuthService, InventoryService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    pub auth_service: Arc<AuthService>,
    pub inventory_service: Arc<InventoryService>,
}
