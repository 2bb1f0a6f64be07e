//! Repository implementations for the shop entities.

pub mod memory;
pub mod product;

pub use memory::InMemoryProductRepository;
pub use product::ProductRepository;
