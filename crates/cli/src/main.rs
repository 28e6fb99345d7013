//! Veloce CLI - Data seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the data directory with fixture data
//! veloce seed
//!
//! # Overwrite existing collections with fixtures
//! veloce seed --force
//!
//! # Restore one collection (or everything) to defaults
//! veloce reset cars
//! veloce reset all
//!
//! # Provision an admin account with a real password
//! veloce admin create -e admin@veloce.dev -n "Head Office" -p <password>
//!
//! # Dashboard aggregates from a running server
//! veloce stats
//! ```
//!
//! Collections live under `VELOCE_DATA_DIR` (default `data`); `stats` talks
//! to `VELOCE_BASE_URL` (default `http://localhost:4000`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "veloce")]
#[command(author, version, about = "Veloce CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the data directory with fixture data
    Seed {
        /// Overwrite collections that already exist
        #[arg(long)]
        force: bool,
    },
    /// Restore collections to their shipped defaults
    Reset {
        /// Which collection to reset
        #[arg(value_enum)]
        target: ResetTarget,
    },
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Fetch dashboard aggregates from a running server
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum ResetTarget {
    Cars,
    Users,
    Config,
    Sessions,
    All,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password (hashed with argon2id before storage)
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::seed(force)?,
        Commands::Reset { target } => match target {
            ResetTarget::Cars => commands::reset::reset(&["cars"])?,
            ResetTarget::Users => commands::reset::reset(&["users"])?,
            ResetTarget::Config => commands::reset::reset(&["config"])?,
            ResetTarget::Sessions => commands::reset::reset(&["sessions"])?,
            ResetTarget::All => commands::reset::reset_all()?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
            } => {
                commands::admin::create_admin(&email, &name, &password)?;
            }
        },
        Commands::Stats => commands::stats::show().await?,
    }
    Ok(())
}
