use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::error;

use shop_portal::config::Config;
use shop_portal::directory::ShopDirectory;
use shop_portal::error::PortalError;
use shop_portal::logging;
use shop_portal::types::ShopRecord;

#[derive(Parser)]
#[command(name = "shop_portal")]
#[command(about = "Sheet-backed directory for the local shop support portal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every shop on the sheet
    List {
        /// Print records as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Show a single shop by id
    Show {
        /// Shop id as it appears on the sheet (trailing ".0" is fine)
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_shop(shop: &ShopRecord) {
    println!("🏠 {} (id {})", shop.name, shop.id);
    println!("   状況: {}", shop.status);
    println!("   メッセージ: {}", shop.message);
    println!("   おすすめ: {}", shop.recommendation);
    println!("   通販: {}", shop.ec_url);
    println!("   地図: {}", shop.map_url);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    let config = Config::load(Path::new(&cli.config))?;
    let directory = ShopDirectory::from_config(config.sheet)?;

    match cli.command {
        Commands::List { json } => {
            println!("🔄 Fetching the shop sheet...");
            match directory.list_shops().await {
                Ok(shops) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&shops)?);
                    } else {
                        println!("\n📊 {} shops on the sheet:", shops.len());
                        for shop in &shops {
                            println!("   {} — {} ({})", shop.id, shop.name, shop.status);
                        }
                    }
                }
                Err(e) => {
                    error!("Listing shops failed: {}", e);
                    println!("❌ Could not load the sheet: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Show { id, json } => {
            match directory.get_shop(&id).await {
                Ok(shop) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&shop)?);
                    } else {
                        print_shop(&shop);
                    }
                }
                Err(PortalError::NotFound(id)) => {
                    println!("⚠️  No shop with id: {}", id);
                    std::process::exit(2);
                }
                Err(e) => {
                    error!("Shop lookup failed: {}", e);
                    println!("❌ Could not load the sheet: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
