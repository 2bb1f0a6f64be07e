//! Rendering of catalog results for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use shop_entity::Product;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One catalog line in table output
#[derive(Debug, Tabled)]
pub(crate) struct ProductRow {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Price")]
    pub(crate) price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Print products as a table or as a JSON array.
///
/// Prices keep their exact decimal form in both formats.
pub fn print_products(products: &[Product], format: OutputFormat) {
    match format {
        OutputFormat::Table if products.is_empty() => println!("No products in the catalog."),
        OutputFormat::Table => {
            let mut table = Table::new(products.iter().map(ProductRow::from));
            table.with(Style::rounded());
            println!("{table}");
        }
        OutputFormat::Json => match serde_json::to_string_pretty(products) {
            Ok(json) => println!("{json}"),
            Err(e) => print_error(&format!("Could not encode products: {e}")),
        },
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
