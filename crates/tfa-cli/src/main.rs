//! # tfa CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

use tfa_cli::session::{Session, SessionOpts};

/// Fisheries Authority Stack CLI.
///
/// Registers fishers and boats, processes seasonal permit applications,
/// records quota usage, and reports effective statuses, over a
/// JSON-file-backed registry.
#[derive(Parser, Debug)]
#[command(name = "tfa", version, about)]
struct Cli {
    /// Path to the registry file.
    #[arg(long, global = true, default_value = "registry.json")]
    registry: PathBuf,

    /// Season catalog YAML. The built-in catalog is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Reference date override, ISO `YYYY-MM-DD`. Defaults to today.
    #[arg(long, global = true)]
    on: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fisher registration and standing management.
    Fisher(tfa_cli::fisher::FisherArgs),
    /// Boat registration and license approval.
    Boat(tfa_cli::boat::BoatArgs),
    /// Seasonal permit intake, review, and quota recording.
    Permit(tfa_cli::permit::PermitArgs),
    /// Roster report with effective statuses and advisories.
    Roster(tfa_cli::roster::RosterArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let opts = SessionOpts {
        registry_path: cli.registry,
        catalog_path: cli.catalog,
        on: cli.on,
    };
    let mut session = Session::open(&opts)?;

    match cli.command {
        Commands::Fisher(args) => tfa_cli::fisher::run(&mut session, args),
        Commands::Boat(args) => tfa_cli::boat::run(&mut session, args),
        Commands::Permit(args) => tfa_cli::permit::run(&mut session, args),
        Commands::Roster(args) => tfa_cli::roster::run(&mut session, args),
    }
}
