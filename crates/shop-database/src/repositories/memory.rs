//! In-memory product repository.
//!
//! Keeps the soft-delete flag alongside each row so it follows the same
//! visibility rules as the `Product` table. Useful for exercising callers
//! without a running database.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shop_core::result::AppResult;
use shop_core::traits::Repository;
use shop_entity::product::model::Product;

#[derive(Debug)]
struct StoredProduct {
    product: Product,
    deleted: bool,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, StoredProduct>,
    last_id: i64,
}

/// Product repository holding rows in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProductRepository {
    /// Create an empty repository. Identifiers start at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn create(&self, mut product: Product) -> AppResult<Product> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;

        product.id = Some(id);
        table.rows.insert(
            id,
            StoredProduct {
                product: product.clone(),
                deleted: false,
            },
        );
        Ok(product)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.product.clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|row| !row.deleted)
            .map(|row| row.product.clone())
            .collect())
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let mut table = self.table.write().await;
        let live = product
            .id
            .and_then(|id| table.rows.get_mut(&id))
            .filter(|row| !row.deleted);

        if let Some(row) = live {
            row.product.name = product.name.clone();
            row.product.price = product.price;
        }
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) if !row.deleted => {
                row.deleted = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;

    fn price(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let widget = repo
            .create(Product::new("Widget", price("9.99")))
            .await
            .unwrap();
        let gadget = repo
            .create(Product::new("Gadget", price("19.90")))
            .await
            .unwrap();

        assert_eq!(widget.id, Some(1));
        assert_eq!(gadget.id, Some(2));
    }

    #[tokio::test]
    async fn test_widget_lifecycle() {
        let repo = InMemoryProductRepository::new();

        let created = repo
            .create(Product::new("Widget", price("9.99")))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(repo.get(id).await.unwrap().is_none());
        assert!(!repo.delete_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_skips_deleted() {
        let repo = InMemoryProductRepository::new();
        let a = repo.create(Product::new("A", price("1.00"))).await.unwrap();
        let b = repo.create(Product::new("B", price("2.00"))).await.unwrap();
        repo.delete(&a).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![b]);
    }

    #[tokio::test]
    async fn test_update_changes_live_row() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo
            .create(Product::new("Widget", price("9.99")))
            .await
            .unwrap();

        product.name = "Widget Pro".to_string();
        product.price = price("12.50");
        let returned = repo.update(product.clone()).await.unwrap();

        assert_eq!(returned, product);
        let stored = repo.get(product.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.name, "Widget Pro");
        assert_eq!(stored.price, price("12.50"));
    }

    #[tokio::test]
    async fn test_update_leaves_deleted_row_untouched() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(Product::new("Widget", price("9.99")))
            .await
            .unwrap();
        let id = product.id.unwrap();
        assert!(repo.delete(&product).await.unwrap());

        let mut renamed = product.clone();
        renamed.name = "Ghost".to_string();
        renamed.price = price("0.01");
        assert_eq!(repo.update(renamed.clone()).await.unwrap(), renamed);

        let table = repo.table.read().await;
        let row = table.rows.get(&id).unwrap();
        assert!(row.deleted);
        assert_eq!(row.product.name, "Widget");
        assert_eq!(row.product.price, price("9.99"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_inserts_nothing() {
        let repo = InMemoryProductRepository::new();

        let mut unknown = Product::new("Nobody", price("1.00"));
        unknown.id = Some(999);
        assert_eq!(repo.update(unknown.clone()).await.unwrap(), unknown);

        assert!(repo.table.read().await.rows.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unsaved_product_is_false() {
        let repo = InMemoryProductRepository::new();
        let unsaved = Product::new("Draft", price("0.50"));
        assert!(!repo.delete(&unsaved).await.unwrap());
    }
}
