//! Product repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgQueryResult;
use tracing::debug;

use shop_core::error::AppError;
use shop_core::result::AppResult;
use shop_core::traits::Repository;
use shop_entity::product::model::Product;

use crate::connection::DatabasePool;

const INSERT_PRODUCT: &str = "INSERT INTO Product(Name, Price) VALUES ($1, $2) RETURNING ID";
const SELECT_PRODUCT_BY_ID: &str = "SELECT * FROM Product WHERE Deleted = false AND ID = $1";
const SELECT_ALL_PRODUCTS: &str = "SELECT * FROM Product WHERE Deleted = false";
const UPDATE_PRODUCT: &str =
    "UPDATE Product SET Name = $1, Price = $2 WHERE ID = $3 AND Deleted = false";
// Postgres counts matched rows, not changed ones, so the flag guard is what
// makes a repeated delete report zero rows.
const SOFT_DELETE_PRODUCT: &str =
    "UPDATE Product SET Deleted = true WHERE ID = $1 AND Deleted = false";

/// Repository for product CRUD backed by the `Product` table.
///
/// Each call takes its own pooled connection and returns it on exit.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: DatabasePool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, mut product: Product) -> AppResult<Product> {
        let inserted: Result<i64, sqlx::Error> = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query_scalar::<_, i64>(INSERT_PRODUCT)
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&mut *conn)
                .await
        }
        .await;

        let id = inserted.map_err(|e| {
            AppError::store_access(format!("Failed to create the product: {}", product.name), e)
        })?;

        debug!(product_id = id, name = %product.name, "Created product");
        product.id = Some(id);
        Ok(product)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Product>> {
        let fetched: Result<Option<Product>, sqlx::Error> = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query_as::<_, Product>(SELECT_PRODUCT_BY_ID)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
        }
        .await;

        fetched.map_err(|e| {
            AppError::store_access(format!("Failed to get the product with id: {id}"), e)
        })
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let fetched: Result<Vec<Product>, sqlx::Error> = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query_as::<_, Product>(SELECT_ALL_PRODUCTS)
                .fetch_all(&mut *conn)
                .await
        }
        .await;

        fetched.map_err(|e| AppError::store_access("Failed to get data", e))
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let executed: Result<PgQueryResult, sqlx::Error> = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query(UPDATE_PRODUCT)
                .bind(&product.name)
                .bind(product.price)
                .bind(product.id)
                .execute(&mut *conn)
                .await
        }
        .await;

        let result = executed.map_err(|e| {
            AppError::store_access(format!("Failed to update the product: {}", product.name), e)
        })?;

        // The caller still gets its entity back when nothing matched.
        if result.rows_affected() == 0 {
            debug!(
                product_id = ?product.id,
                "Update matched no live product row"
            );
        }

        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let executed: Result<PgQueryResult, sqlx::Error> = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query(SOFT_DELETE_PRODUCT)
                .bind(id)
                .execute(&mut *conn)
                .await
        }
        .await;

        let result = executed.map_err(|e| {
            AppError::store_access(format!("Failed to delete the product with id: {id}"), e)
        })?;

        debug!(product_id = id, rows = result.rows_affected(), "Soft-deleted product");
        Ok(result.rows_affected() == 1)
    }
}
