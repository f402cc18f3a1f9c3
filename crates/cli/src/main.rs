//! Merch Store CLI - order inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # List stored orders (optionally by status)
//! merch-cli orders list
//! merch-cli orders list --status pending
//!
//! # Write the CSV artifact
//! merch-cli orders export -o orders.csv
//!
//! # Remove every stored order
//! merch-cli orders clear
//!
//! # Append demo orders for local development
//! merch-cli seed
//! ```
//!
//! All commands operate on the same JSON store file as the server, located
//! via `MERCH_ORDERS_PATH` (default `data/orders.json`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "merch-cli")]
#[command(author, version, about = "Team merch store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage stored orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Append demo orders for local development
    Seed,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Print stored orders
    List {
        /// Only show orders with this status (`pending` or `completed`)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Write the order collection as CSV
    Export {
        /// Output file path
        #[arg(short, long, default_value = "orders.csv")]
        output: std::path::PathBuf,
    },
    /// Remove every stored order
    Clear,
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Orders { action } => match action {
            OrdersAction::List { status } => commands::orders::list(status.as_deref())?,
            OrdersAction::Export { output } => commands::orders::export(&output)?,
            OrdersAction::Clear => commands::orders::clear()?,
        },
        Commands::Seed => commands::seed::run()?,
    }
    Ok(())
}
