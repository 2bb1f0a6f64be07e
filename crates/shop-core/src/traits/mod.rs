//! Core traits shared across crates.

pub mod repository;

pub use repository::{Identified, Repository};
