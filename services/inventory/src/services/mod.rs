//! Business rule layer
//!
//! Pure orchestration over the stores, the password hasher, and the token
//! service. Holds no state of its own.

pub mod auth;
pub mod inventory;

pub use auth::AuthService;
pub use inventory::InventoryService;
