//! Data models and request/response payloads

pub mod item;
pub mod user;

pub use item::{CreateItemRequest, Item, NewItemRecord, UpdateItemRequest};
pub use user::{LoginRequest, LoginResponse, NewUserRecord, RegisterRequest, User};
