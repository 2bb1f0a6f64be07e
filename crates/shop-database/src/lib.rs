//! # shop-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the shop entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{InMemoryProductRepository, ProductRepository};
