//! Foodcart CLI - browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse pizzas under 20, cheapest first
//! foodcart catalog --category Pizza --max-price 20 --sort-by price
//!
//! # Add a catalog item and show the cart
//! foodcart add f1
//! foodcart show
//! ```
//!
//! # Commands
//!
//! - `catalog` - Query the catalog with filters
//! - `show` - Print the stored cart
//! - `add`, `remove`, `set`, `adjust`, `clear` - Cart transitions
//!
//! The cart is stored under `FOODCART_DATA_DIR` and survives between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use foodcart_core::FilterPatch;
use rust_decimal::Decimal;

mod commands;
mod config;

use commands::cart::CartCommand;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "foodcart")]
#[command(author, version, about = "Foodcart catalog and cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Catalog {
        /// Category to show ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Lowest price to include
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Highest price to include
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Sort order (`price`, `price_desc`, `name`)
        #[arg(short, long)]
        sort_by: Option<String>,

        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the cart
    Show,
    /// Add one unit of a catalog item
    Add {
        /// Food ID from the catalog
        id: String,
    },
    /// Remove an item
    Remove {
        /// Food ID
        id: String,
    },
    /// Set an item's quantity
    Set {
        /// Food ID
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Step an item's quantity up or down; removes it at zero
    Adjust {
        /// Food ID
        id: String,

        /// Amount to add (negative to subtract)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the rendered cart
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "foodcart_cli=info,foodcart_client=info,foodcart_core=info".into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    let command = match cli.command {
        Commands::Catalog {
            category,
            min_price,
            max_price,
            sort_by,
            search,
        } => {
            let patch = FilterPatch {
                category: None,
                min_price,
                max_price,
                sort_by,
                search,
            };
            commands::catalog::browse(&config, category, patch).await?;
            return Ok(());
        }
        Commands::Show => CartCommand::Show,
        Commands::Add { id } => CartCommand::Add { id },
        Commands::Remove { id } => CartCommand::Remove { id },
        Commands::Set { id, quantity } => CartCommand::Set { id, quantity },
        Commands::Adjust { id, delta } => CartCommand::Adjust { id, delta },
        Commands::Clear => CartCommand::Clear,
    };

    commands::cart::run(&config, command).await?;
    Ok(())
}
