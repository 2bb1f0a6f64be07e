//! Product entity model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shop_core::traits::Identified;

/// A product in the catalog.
///
/// The `deleted` column is maintained by the repository and is not
/// mapped onto the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Store-assigned identifier; `None` until the product is created.
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Unit price. Non-negative by convention, not enforced here.
    pub price: Decimal,
}

impl Product {
    /// Build an unsaved product.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }
}

impl Identified for Product {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_new_product_is_unsaved() {
        let product = Product::new("Widget", Decimal::from_str("9.99").unwrap());
        assert_eq!(product.id, None);
        assert_eq!(Identified::id(&product), None);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn test_serializes_price_exactly() {
        let product = Product {
            id: Some(3),
            name: "Gadget".to_string(),
            price: Decimal::from_str("19.90").unwrap(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["price"], "19.90");
    }
}
