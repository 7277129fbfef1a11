//! Postgres-backed inventory item store
//!
//! Soft deletes set `deleted_at`; every read path filters the tombstone out.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use super::ItemStore;
use crate::models::{Item, NewItemRecord};

/// Item store over a PostgreSQL pool
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Create a new item store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn item_from_row(row: &PgRow) -> Item {
    Item {
        id: row.get("id"),
        name: row.get("name"),
        sku: row.get("sku"),
        description: row.get("description"),
        quantity: row.get("quantity"),
        price: row.get("price"),
        category: row.get("category"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        deleted_at: row.get("deleted_at"),
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, record: &NewItemRecord) -> Result<Item> {
        info!("Creating new item with SKU: {}", record.sku);

        let row = sqlx::query(
            r#"
            INSERT INTO items (name, sku, description, quantity, price, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, sku, description, quantity, price, category,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&record.name)
        .bind(&record.sku)
        .bind(&record.description)
        .bind(record.quantity)
        .bind(record.price)
        .bind(&record.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(item_from_row(&row))
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, sku, description, quantity, price, category,
                   created_at, updated_at, deleted_at
            FROM items
            WHERE deleted_at IS NULL
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, sku, description, quantity, price, category,
                   created_at, updated_at, deleted_at
            FROM items
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(item_from_row))
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Item>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, sku, description, quantity, price, category,
                   created_at, updated_at, deleted_at
            FROM items
            WHERE sku = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(item_from_row))
    }

    async fn update(&self, item: &Item) -> Result<Item> {
        info!("Updating item: {}", item.id);

        let row = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, sku = $3, description = $4, quantity = $5,
                price = $6, category = $7, updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, sku, description, quantity, price, category,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.sku)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.price)
        .bind(&item.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(item_from_row(&row))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        info!("Soft-deleting item: {}", id);

        sqlx::query(
            r#"
            UPDATE items
            SET deleted_at = now(), updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
