//! Generic repository trait for soft-delete aware data access.

use std::fmt::{Debug, Display};

use async_trait::async_trait;

use crate::result::AppResult;

/// An entity whose identifier is assigned by the store.
pub trait Identified {
    /// The identifier type.
    type Id: Copy + Debug + Display + Send + Sync + 'static;

    /// The store-assigned identifier, or `None` before the entity is saved.
    fn id(&self) -> Option<Self::Id>;
}

/// Generic CRUD repository trait.
///
/// Rows are never physically removed: deleting flips a flag and every
/// read or update path skips flagged rows. Entity-specific query methods
/// are defined on the concrete repository structs.
#[async_trait]
pub trait Repository<Entity>: Send + Sync + 'static
where
    Entity: Identified + Send + Sync + 'static,
{
    /// Insert the entity and return it with its generated identifier set.
    async fn create(&self, entity: Entity) -> AppResult<Entity>;

    /// Find a live entity by identifier.
    async fn get(&self, id: Entity::Id) -> AppResult<Option<Entity>>;

    /// List every live entity in store order.
    async fn get_all(&self) -> AppResult<Vec<Entity>>;

    /// Write the entity's mutable fields and hand it back unchanged.
    ///
    /// Implementations do not check whether a live row matched, so
    /// updating a deleted or unknown identifier is a silent no-op.
    async fn update(&self, entity: Entity) -> AppResult<Entity>;

    /// Soft-delete by identifier. Returns `true` if exactly one row changed.
    async fn delete_by_id(&self, id: Entity::Id) -> AppResult<bool>;

    /// Soft-delete the given entity. Unsaved entities return `false`.
    async fn delete(&self, entity: &Entity) -> AppResult<bool> {
        match entity.id() {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }
}
