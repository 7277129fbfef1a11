//! Inventory API routes
//!
//! Thin request boundary: JSON (de)serialization, field-level validation,
//! and translation of typed errors to HTTP responses. Business decisions
//! live in the service layer.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::{CreateItemRequest, LoginRequest, RegisterRequest, UpdateItemRequest},
    state::AppState,
    validation,
};

/// Create the router for the inventory service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/items", post(create_item).get(get_items))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected_routes);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match common::database::health_check(&state.db_pool).await {
        Ok(_) => "up",
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            "down"
        }
    };

    Json(json!({
        "status": "ok",
        "service": "inventory-api",
        "database": database,
    }))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_register(&payload).map_err(ApiError::Invalid)?;

    let user = state.auth_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticate a user and return a session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_login(&payload).map_err(ApiError::Invalid)?;

    let response = state.auth_service.login(payload).await?;

    Ok(Json(response))
}

/// Create a new inventory item
pub async fn create_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<CreateItemRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_new_item(&payload).map_err(ApiError::Invalid)?;

    info!("User {} creating item with SKU: {}", auth_user.id, payload.sku);

    let item = state.inventory_service.create_item(payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// List all items
pub async fn get_items(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let items = state.inventory_service.get_all_items().await?;

    Ok(Json(items))
}

/// Get an item by ID
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let item = state.inventory_service.get_item(id).await?;

    Ok(Json(item))
}

/// Apply a partial update to an item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_item_update(&payload).map_err(ApiError::Invalid)?;

    let item = state.inventory_service.update_item(id, payload).await?;

    Ok(Json(item))
}

/// Soft-delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    info!("User {} deleting item: {}", auth_user.id, id);

    state.inventory_service.delete_item(id).await?;

    Ok(Json(json!({
        "message": "item deleted successfully",
    })))
}
