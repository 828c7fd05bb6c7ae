//! Bakehouse CLI - inventory, availability checks, production days and ingredient orders.
//!
//! # Usage
//!
//! ```bash
//! # Show the configured store's inventory
//! bakehouse inventory
//!
//! # Show what is running low at the central kitchen
//! bakehouse inventory --location ck-001 --low-stock
//!
//! # Can the store bake 50 loaves of white bread right now?
//! bakehouse check --product prod-001 --quantity 50
//!
//! # Run a whole production day from a script
//! bakehouse plan day.yaml
//!
//! # Ship ingredients from headquarters to a store
//! bakehouse send --to st-002 --item ing-001=20 --item ing-002=5 --notes "Weekly top-up"
//! ```
//!
//! # Commands
//!
//! - `inventory` - List a location's ingredients or its low-stock report
//! - `check` - Check ingredient availability for a product
//! - `plan` - Add items, start and finish a production day
//! - `send` - Submit an ingredient order from headquarters
//!
//! Results are written to stdout as JSON. Logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bakehouse_planner::{LogFormat, PlannerConfig};

mod commands;

/// Log filter used when `RUST_LOG` is not set. The binary's own target is
/// `bakehouse`; the library logs under `bakehouse_planner`.
const DEFAULT_LOG_FILTER: &str = "bakehouse=info,bakehouse_planner=info";

#[derive(Parser)]
#[command(name = "bakehouse")]
#[command(author, version, about = "Bakehouse production planning tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ingredient stock at a location
    Inventory {
        /// Location ID (defaults to the configured store)
        #[arg(short, long)]
        location: Option<String>,

        /// Only show ingredients below their low-stock threshold
        #[arg(long)]
        low_stock: bool,
    },
    /// Check whether the store can make a product right now
    Check {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// Number of units to make
        #[arg(short, long)]
        quantity: String,
    },
    /// Run a production day from a YAML script
    Plan {
        /// Path to the day script
        file: PathBuf,
    },
    /// Send ingredients from headquarters to a store or the central kitchen
    Send {
        /// Destination location ID
        #[arg(long)]
        to: String,

        /// Ingredient and quantity as `ID=QTY` (repeatable)
        #[arg(short, long = "item", value_parser = commands::send::parse_item)]
        items: Vec<(String, String)>,

        /// Notes for the receiving location
        #[arg(long)]
        notes: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = PlannerConfig::from_env();

    init_tracing(config.as_ref().map_or(LogFormat::Text, |c| c.log_format));

    let result: Result<(), Box<dyn std::error::Error>> =
        config.map_err(Into::into).and_then(|config| run(cli, &config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli, config: &PlannerConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Inventory {
            location,
            low_stock,
        } => commands::inventory::show(config, location.as_deref(), low_stock)?,
        Commands::Check { product, quantity } => {
            commands::check::availability(config, &product, &quantity)?;
        }
        Commands::Plan { file } => commands::plan::run_day(config, &file)?,
        Commands::Send { to, items, notes } => {
            commands::send::ingredient_order(config, &to, &items, notes.as_deref())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_default_filter_passes_cli_and_library_events() {
        let subscriber = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            // Events logged from this crate, including `main`'s failure report.
            assert!(tracing::enabled!(Level::INFO));
            assert!(tracing::enabled!(target: env!("CARGO_CRATE_NAME"), Level::ERROR));
            assert!(tracing::enabled!(target: "bakehouse::commands::plan", Level::INFO));
            assert!(tracing::enabled!(
                target: "bakehouse_planner::services::orders",
                Level::INFO
            ));
            assert!(!tracing::enabled!(
                target: "bakehouse_planner::store::ledger",
                Level::DEBUG
            ));
        });
    }

    #[test]
    fn test_cli_parses_repeated_items() {
        let cli = Cli::try_parse_from([
            "bakehouse",
            "send",
            "--to",
            "st-002",
            "--item",
            "ing-001=20",
            "-i",
            "ing-002=5",
        ])
        .unwrap();
        let Commands::Send { to, items, notes } = cli.command else {
            panic!("expected send command");
        };
        assert_eq!(to, "st-002");
        assert_eq!(items.len(), 2);
        assert!(notes.is_none());
    }
}
