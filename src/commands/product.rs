//! Product catalog CLI commands.

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::output::{self, OutputFormat};
use shop_core::error::AppError;
use shop_core::traits::Repository;
use shop_database::{DatabasePool, ProductRepository};
use shop_entity::Product;

/// Product subcommands
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Add a product to the catalog
    Create {
        /// Product name
        #[arg(short, long)]
        name: String,
        /// Unit price, e.g. 9.99
        #[arg(short, long)]
        price: Decimal,
    },
    /// Show one product
    Get {
        /// Product ID
        id: i64,
    },
    /// List every live product
    List,
    /// Change a product's name and price
    Update {
        /// Product ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: String,
        /// New unit price
        #[arg(short, long)]
        price: Decimal,
    },
    /// Soft-delete a product
    Delete {
        /// Product ID
        id: i64,
    },
}

/// Execute product commands
pub async fn execute(
    command: &ProductCommand,
    pool: &DatabasePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let repo = ProductRepository::new(pool.clone());

    match command {
        ProductCommand::Create { name, price } => {
            let product = repo.create(Product::new(name.clone(), *price)).await?;
            output::print_products(&[product], format);
        }
        ProductCommand::Get { id } => match repo.get(*id).await? {
            Some(product) => output::print_products(&[product], format),
            None => output::print_warning(&format!("Product {id} not found")),
        },
        ProductCommand::List => {
            let products = repo.get_all().await?;
            output::print_products(&products, format);
        }
        ProductCommand::Update { id, name, price } => {
            let product = Product {
                id: Some(*id),
                name: name.clone(),
                price: *price,
            };
            let product = repo.update(product).await?;
            output::print_products(&[product], format);
        }
        ProductCommand::Delete { id } => {
            if repo.delete_by_id(*id).await? {
                output::print_success(&format!("Product {id} deleted."));
            } else {
                output::print_warning(&format!("Product {id} not found or already deleted"));
            }
        }
    }

    Ok(())
}
