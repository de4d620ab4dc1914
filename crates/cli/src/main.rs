//! `routines-server` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    — start the API server.
//! - `migrate`  — run pending database migrations.
//! - `validate` — validate a routine JSON file.

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api::AppState;
use db::{DocumentStore, MemoryDocumentStore, PgDocumentStore, PoolSettings};

#[derive(Parser)]
#[command(
    name = "routines-server",
    about = "HTTP service for storing and listing routines",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "ROUTINES_BIND", default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
        database_url: Option<String>,
        #[arg(long, env = "ROUTINES_MAX_CONNECTIONS", default_value_t = 10)]
        max_connections: u32,
        /// Keep routines in process memory instead of Postgres.
        #[arg(long)]
        in_memory: bool,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Validate a routine JSON file.
    Validate {
        /// Path to the routine JSON file.
        path: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            database_url,
            max_connections,
            in_memory,
        } => {
            let store: Arc<dyn DocumentStore> = if in_memory {
                warn!("Using in-memory store; routines are lost on exit");
                Arc::new(MemoryDocumentStore::new())
            } else {
                let url = database_url.context("--database-url is required without --in-memory")?;
                let settings = PoolSettings::new(url).max_connections(max_connections);
                let store = PgDocumentStore::connect(&settings)
                    .await
                    .context("failed to open document database")?;
                Arc::new(store)
            };

            info!("Starting API server on {bind}");
            api::serve(&bind, AppState::new(store))
                .await
                .context("API server failed")?;
        }
        Command::Migrate { database_url } => {
            info!("Running migrations");
            let settings = PoolSettings::new(database_url).max_connections(2);
            let pool = db::pool::connect(&settings)
                .await
                .context("failed to connect to database")?;
            db::pool::migrate(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
        Command::Validate { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;

            let payload: serde_json::Value =
                serde_json::from_str(&content).context("invalid JSON")?;

            match routines::validate_routine(&payload) {
                Ok(routine) => {
                    println!("✅ Routine is valid: {}", serde_json::to_string(&routine)?);
                }
                Err(errors) => {
                    for e in errors.errors() {
                        eprintln!("❌ {}: {} ({})", e.loc.join("."), e.msg, e.kind);
                    }
                    bail!("{errors}");
                }
            }
        }
    }

    Ok(())
}
