//! Mandi CLI - Command-line interface for the farm-to-retail record ledger

use clap::{Parser, Subcommand};
use mandi::record::{NewFarmer, NewRetailer};
use mandi::registry::Registry;
use mandi::{config, ui};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mandi")]
#[command(version = "0.1.0")]
#[command(about = "Embedded farm-to-retail record ledger")]
#[command(long_about = r#"
Mandi keeps an append-only ledger for a produce distribution network:
  • Farmer intake records (produce handed to a distributor)
  • A retailer directory, seeded with defaults on first read

Example usage:
  mandi add-farmer --name "Ramesh Kumar" --quantity 500 --fertilizer 50 \
      --address "Village X" --pincode 751001
  mandi farmers
  mandi serve --port 8080
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default mandi.toml config
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Record a farmer intake entry
    AddFarmer {
        /// Farmer name
        #[arg(short, long)]
        name: String,

        /// Produce quantity in kilograms
        #[arg(short, long)]
        quantity: f64,

        /// Fertilizer issued in kilograms
        #[arg(short, long)]
        fertilizer: f64,

        /// Farmer address
        #[arg(short, long)]
        address: String,

        /// 5-6 digit postal code
        #[arg(short, long)]
        pincode: String,

        /// Path to the database file
        #[arg(short, long, default_value = "mandi.db")]
        database: PathBuf,
    },

    /// List farmer intake records, most recent first
    Farmers {
        /// Only show records with this postal code
        #[arg(short, long)]
        pincode: Option<String>,

        /// Path to the database file
        #[arg(short, long, default_value = "mandi.db")]
        database: PathBuf,
    },

    /// Add a retailer to the directory
    AddRetailer {
        /// Retailer name
        #[arg(short, long)]
        name: String,

        /// Town or city
        #[arg(short, long, default_value = "")]
        town: String,

        /// 5-6 digit postal code
        #[arg(short, long)]
        pincode: String,

        /// Path to the database file
        #[arg(short, long, default_value = "mandi.db")]
        database: PathBuf,
    },

    /// List the retailer directory, most recent first
    Retailers {
        /// Path to the database file
        #[arg(short, long, default_value = "mandi.db")]
        database: PathBuf,
    },

    /// Show record counts
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "mandi.db")]
        database: PathBuf,
    },

    /// Serve the ledger as a JSON API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Path to the database file
        #[arg(short, long, default_value = "mandi.db")]
        database: PathBuf,
    },
}

/// Let mandi.toml override the default database location, but never an
/// explicit --database argument.
fn resolve_database(database: PathBuf) -> anyhow::Result<PathBuf> {
    if database != PathBuf::from("mandi.db") {
        return Ok(database);
    }
    if let Some(cfg) = config::load_config(None)? {
        if let Some(db) = cfg.database {
            return Ok(PathBuf::from(db));
        }
    }
    Ok(database)
}

fn open_registry(database: PathBuf) -> anyhow::Result<Registry> {
    let path = resolve_database(database)?;
    config::ensure_db_dir(&path)?;
    Ok(Registry::open(&path)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { force } => {
            let path = config::default_config_path();
            let cfg = config::MandiConfig {
                database: Some(".mandi/mandi.db".to_string()),
            };
            config::write_config(&path, &cfg, force)?;
            println!("Wrote {}", path.display());
        }

        Commands::AddFarmer { name, quantity, fertilizer, address, pincode, database } => {
            let registry = open_registry(database)?;
            let draft = NewFarmer::new(name, quantity, fertilizer, address, pincode);
            let id = registry.record_farmer(&draft)?;
            println!(
                "Recorded farmer intake #{}: {} - Qty: {} kg, Fertilizer: {} kg, PIN: {}",
                id, draft.name, draft.quantity, draft.fertilizer_amount, draft.pincode
            );
        }

        Commands::Farmers { pincode, database } => {
            let registry = open_registry(database)?;
            let farmers = match pincode {
                Some(pin) => registry.farmers_by_pincode(&pin)?,
                None => registry.farmers()?,
            };
            if farmers.is_empty() {
                println!("No farmer records yet.");
            } else {
                ui::section("Farmer intake (most recent first)");
                println!("{}", ui::farmers_table(&farmers));
            }
        }

        Commands::AddRetailer { name, town, pincode, database } => {
            let registry = open_registry(database)?;
            let draft = NewRetailer::new(name, town, pincode);
            let id = registry.record_retailer(&draft)?;
            println!("Recorded retailer #{}: {}", id, draft.name);
        }

        Commands::Retailers { database } => {
            let mut registry = open_registry(database)?;
            let retailers = registry.retailers()?;
            ui::section("Retailer directory (most recent first)");
            println!("{}", ui::retailers_table(&retailers));
        }

        Commands::Stats { database } => {
            let registry = open_registry(database)?;
            let stats = registry.stats()?;
            ui::section("Ledger statistics");
            println!(
                "{}",
                ui::stats_table(&[
                    ("Farmers", stats.farmers.to_string()),
                    ("Retailers", stats.retailers.to_string()),
                ])
            );
        }

        Commands::Serve { port, database } => {
            let path = resolve_database(database)?;
            config::ensure_db_dir(&path)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(mandi::server::start_server(port, path))?;
        }
    }

    Ok(())
}
