//! Product catalog entity.

pub mod model;
