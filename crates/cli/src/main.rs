//! Servex CLI - the storefront's command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! servex catalog list
//! servex catalog list --category app
//! servex catalog search scraper
//!
//! # Manage the cart
//! servex cart add 1
//! servex cart show
//! servex cart remove 1
//! servex cart clear
//!
//! # Session
//! servex auth login -e jane@example.com -p longenough
//! servex auth register -n Jane -e jane@example.com -p longenough
//! servex auth whoami
//! servex auth logout
//!
//! # Checkout
//! servex checkout summary
//! servex checkout pay --card-name "Jane Doe" --card-number 4242424242424242 \
//!     --expiry 12/30 --cvc 123
//! servex checkout pay --paypal
//!
//! # Dashboard (requires login)
//! servex dashboard orders
//! servex dashboard projects
//! ```
//!
//! State persists under `SERVEX_DATA_DIR` (default `./data`), so a cart
//! built across several invocations survives until checkout clears it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use servex_storefront::config::StorefrontConfig;
use servex_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "servex")]
#[command(author, version, about = "Servex storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the service catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Log in, register, or inspect the session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Review the order and submit payment
    Checkout {
        #[command(subcommand)]
        action: commands::checkout::CheckoutAction,
    },
    /// View order and project history (requires login)
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },
}

#[tokio::main]
async fn main() {
    // .env is optional; ignore a missing file
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&state, action),
        Commands::Cart { action } => commands::cart::run(&state, &action),
        Commands::Auth { action } => commands::auth::run(&state, action).await?,
        Commands::Checkout { action } => commands::checkout::run(&state, action).await?,
        Commands::Dashboard { action } => commands::dashboard::run(&state, &action)?,
    }
    Ok(())
}
