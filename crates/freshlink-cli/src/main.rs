mod browse;
mod favorites;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use freshlink_core::{PriceBucket, SortKey, StatusFilter};

#[derive(Debug, Parser)]
#[command(name = "freshlink-cli")]
#[command(about = "Browse the FreshLink produce catalog from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Free-text search over name, vendor and tags
        #[arg(long)]
        search: Option<String>,
        /// Category slug (e.g. frutas); "all" disables the filter
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sort: Option<SortKey>,
        /// Price range (all, up-to-50, 50-to-150, 150-to-300, above-300)
        #[arg(long)]
        price: Option<PriceBucket>,
        /// Custom minimum price, inclusive
        #[arg(long)]
        min: Option<String>,
        /// Custom maximum price, inclusive
        #[arg(long)]
        max: Option<String>,
        /// Only organic products
        #[arg(long)]
        organic: bool,
        /// Number of pages to reveal
        #[arg(long, default_value = "1")]
        pages: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List vendors within the delivery radius
    Vendors {
        #[arg(long)]
        search: Option<String>,
        /// Vendor status (all, open, popular)
        #[arg(long)]
        status: Option<StatusFilter>,
        #[arg(long)]
        sort: Option<SortKey>,
        #[arg(long, default_value = "1")]
        pages: usize,
        #[arg(long)]
        json: bool,
    },
    /// Show vendors on the map with marker positions
    Map {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Only vendors open now
        #[arg(long)]
        open: bool,
        #[arg(long)]
        sort: Option<SortKey>,
        /// User latitude; the default city center is used when omitted
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// User longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Suggest vendor names and neighbourhoods for a search term
    Suggest {
        term: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Print the detail route and WhatsApp link of a product
    Link { product_id: u64 },
    /// Manage favorite products
    Favorites {
        #[command(subcommand)]
        command: favorites::FavoritesCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = freshlink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
            price,
            min,
            max,
            organic,
            pages,
            json,
        } => {
            let filters = browse::ProductFilters {
                search,
                category,
                sort,
                price,
                min,
                max,
                organic,
            };
            browse::run_products(&config, filters, pages, json).await?;
        }
        Commands::Vendors {
            search,
            status,
            sort,
            pages,
            json,
        } => {
            browse::run_vendors(&config, search, status, sort, pages, json).await?;
        }
        Commands::Map {
            search,
            category,
            open,
            sort,
            lat,
            lng,
            json,
        } => {
            let filters = browse::MapFilters {
                search,
                category,
                open,
                sort,
                location: lat.zip(lng),
            };
            browse::run_map(&config, filters, json).await?;
        }
        Commands::Suggest { term, limit } => {
            browse::run_suggest(&config, &term, limit).await?;
        }
        Commands::Link { product_id } => {
            browse::run_link(&config, product_id).await?;
        }
        Commands::Favorites { command } => {
            favorites::run(&config, command).await?;
        }
    }

    Ok(())
}
