//! Common library for the inventory system
//!
//! This crate provides infrastructure shared by the inventory service:
//! PostgreSQL connectivity, connection pooling, and database error types.

pub mod database;
pub mod error;
