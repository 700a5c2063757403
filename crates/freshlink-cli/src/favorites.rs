use clap::Subcommand;

use freshlink_catalog::{Favorites, JsonFileStore};
use freshlink_core::AppConfig;

use crate::browse::load_catalogs;

/// Sub-commands available under `favorites`.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommands {
    /// List favorite products
    List,
    /// Add a product to favorites, or remove it if already there
    Toggle { product_id: u64 },
}

/// # Errors
///
/// Returns an error if the favorites file cannot be read or written, or the
/// product is not in the catalog.
pub(crate) async fn run(config: &AppConfig, command: FavoritesCommands) -> anyhow::Result<()> {
    let catalogs = load_catalogs(config).await?;
    let mut favorites = Favorites::open(JsonFileStore::new(&config.favorites_path))?;

    match command {
        FavoritesCommands::List => {
            if favorites.ids().is_empty() {
                println!("no favorites yet; add one with `favorites toggle <id>`");
                return Ok(());
            }
            for id in favorites.ids() {
                match catalogs.products.get(*id) {
                    Some(product) => println!("{id:<5}{}", product.name),
                    None => println!("{id:<5}(no longer in the catalog)"),
                }
            }
        }
        FavoritesCommands::Toggle { product_id } => {
            let product = catalogs
                .products
                .get(product_id)
                .ok_or_else(|| anyhow::anyhow!("product {product_id} not found"))?;
            if favorites.toggle(product_id)? {
                println!("added {} to favorites", product.name);
            } else {
                println!("removed {} from favorites", product.name);
            }
        }
    }

    Ok(())
}
