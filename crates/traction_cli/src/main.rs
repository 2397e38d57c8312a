//! Command-line access to a Traction record store.
//!
//! # Responsibility
//! - Print the dashboard progress for a store file.
//! - Read and overwrite raw domain records for inspection and repair.

#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use traction_core::db::open_db;
use traction_core::{
    default_log_level, generate_unique_id, init_logging, LoadOutcome, ProgressService,
    RecordStore, SqliteRecordStore, StoreOptions,
};

#[derive(Parser)]
#[command(name = "traction", version, about = "EOS Traction record store CLI")]
struct Cli {
    /// SQLite file holding the records
    #[arg(long, env = "TRACTION_DB")]
    db: PathBuf,
    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "TRACTION_LOG_DIR")]
    log_dir: Option<String>,
    #[arg(long, env = "TRACTION_LOG_LEVEL")]
    log_level: Option<String>,
    /// Namespace prepended to every record key
    #[arg(long, default_value = traction_core::repo::record_repo::DEFAULT_PREFIX)]
    prefix: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-domain and overall completion
    Dashboard {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the stored JSON for a key
    Get { key: String },
    /// Replace the record under a key with the given JSON
    Set { key: String, json: String },
    /// List stored keys
    Keys,
    /// Print a fresh entry id
    NewId,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(&cli.db)?;
    let store = SqliteRecordStore::with_options(
        &conn,
        StoreOptions {
            prefix: cli.prefix,
            ..StoreOptions::default()
        },
    );

    match cli.command {
        Commands::Dashboard { json } => {
            let snapshot = ProgressService::new(&store).dashboard();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                return Ok(());
            }
            if let Some(name) = &snapshot.company_name {
                println!("{name}");
            }
            for progress in &snapshot.domains {
                println!(
                    "{:<10} {:>3}%  {:?}",
                    progress.domain.id(),
                    progress.score,
                    progress.band
                );
            }
            println!("{:<10} {:>3}%", "overall", snapshot.overall);
        }
        Commands::Get { key } => match store.load_outcome(&key) {
            LoadOutcome::Present(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            LoadOutcome::Missing => return Err(format!("no record under `{key}`").into()),
            LoadOutcome::Corrupt { reason } => {
                return Err(format!("record under `{key}` is corrupt: {reason}").into())
            }
        },
        Commands::Set { key, json } => {
            let value: Value = serde_json::from_str(&json)?;
            store.try_save(&key, &value)?;
        }
        Commands::Keys => {
            for key in store.keys()? {
                println!("{key}");
            }
        }
        Commands::NewId => println!("{}", generate_unique_id()),
    }

    Ok(())
}
