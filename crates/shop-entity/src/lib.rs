//! # shop-entity
//!
//! Domain entity models for the internet shop. Every struct in this crate
//! represents a database table row and derives `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod product;

pub use product::model::Product;
