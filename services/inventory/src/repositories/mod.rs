//! Store capability interfaces and their Postgres implementations
//!
//! The business layer depends only on these traits. `Ok(None)` means the
//! record is absent; `Err` means the store itself failed.

pub mod item;
pub mod user;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Item, NewItemRecord, NewUserRecord, User};

pub use item::PgItemStore;
pub use user::PgUserStore;

/// Port for user persistence operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user with an already-hashed password
    async fn create(&self, record: &NewUserRecord) -> Result<User>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
}

/// Port for inventory item persistence operations
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item
    async fn create(&self, record: &NewItemRecord) -> Result<Item>;

    /// List all non-deleted items
    async fn find_all(&self) -> Result<Vec<Item>>;

    /// Find a non-deleted item by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>>;

    /// Find a non-deleted item by SKU
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Item>>;

    /// Persist every mutable field of an existing item
    async fn update(&self, item: &Item) -> Result<Item>;

    /// Soft-delete an item, hiding it from every subsequent read
    async fn delete(&self, id: Uuid) -> Result<()>;
}
