//! Inventory business rules

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateItemRequest, Item, NewItemRecord, UpdateItemRequest};
use crate::repositories::ItemStore;

const ITEM_NOT_FOUND: &str = "item not found";

/// Inventory service
#[derive(Clone)]
pub struct InventoryService {
    items: Arc<dyn ItemStore>,
}

impl InventoryService {
    /// Create a new inventory service
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    /// Create a new inventory item
    pub async fn create_item(&self, req: CreateItemRequest) -> ApiResult<Item> {
        info!("Creating item with SKU: {}", req.sku);

        if self.items.find_by_sku(&req.sku).await?.is_some() {
            return Err(ApiError::Conflict(
                "item with this SKU already exists".to_string(),
            ));
        }

        let item = self
            .items
            .create(&NewItemRecord {
                name: req.name,
                sku: req.sku,
                description: req.description,
                quantity: req.quantity,
                price: req.price,
                category: req.category,
            })
            .await?;

        Ok(item)
    }

    /// List all non-deleted items
    pub async fn get_all_items(&self) -> ApiResult<Vec<Item>> {
        Ok(self.items.find_all().await?)
    }

    /// Get a single item by ID
    pub async fn get_item(&self, id: Uuid) -> ApiResult<Item> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ITEM_NOT_FOUND.to_string()))
    }

    /// Apply a partial update to an item
    ///
    /// Only the supplied fields change. A SKU change is re-checked for
    /// uniqueness against the other live items first.
    pub async fn update_item(&self, id: Uuid, req: UpdateItemRequest) -> ApiResult<Item> {
        let mut item = self
            .items
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ITEM_NOT_FOUND.to_string()))?;

        if let Some(sku) = req.sku {
            if sku != item.sku {
                if self.items.find_by_sku(&sku).await?.is_some() {
                    return Err(ApiError::Conflict(format!(
                        "item with SKU '{}' already exists",
                        sku
                    )));
                }
                item.sku = sku;
            }
        }

        if let Some(name) = req.name {
            item.name = name;
        }
        if let Some(description) = req.description {
            item.description = description;
        }
        if let Some(quantity) = req.quantity {
            item.quantity = quantity;
        }
        if let Some(price) = req.price {
            item.price = price;
        }
        if let Some(category) = req.category {
            item.category = category;
        }

        let item = self.items.update(&item).await?;

        Ok(item)
    }

    /// Soft-delete an item by ID
    pub async fn delete_item(&self, id: Uuid) -> ApiResult<()> {
        if self.items.find_by_id(id).await?.is_none() {
            return Err(ApiError::NotFound(ITEM_NOT_FOUND.to_string()));
        }

        Ok(self.items.delete(id).await?)
    }
}
