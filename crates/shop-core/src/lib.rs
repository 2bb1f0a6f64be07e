//! # shop-core
//!
//! Core crate for the internet shop. Contains the configuration schemas,
//! the generic repository trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other shop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
