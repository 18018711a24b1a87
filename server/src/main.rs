//! Galactic Battle API server
//!
//! Serves the people and starships collections over GraphQL.
//!
//! Usage:
//!   galactic-server --port 4000 --database galactic.db --seed data/seed.json
//!
//! Print the schema and exit:
//!   galactic-server --print-schema

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use galactic_server::{
    build_router, build_schema, export_schema_sdl, AppState, ServerConfig, GRAPHQL_PATH,
};
use galactic_storage::Database;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "galactic-server")]
#[command(about = "GraphQL API for Galactic Battle")]
struct Args {
    /// HTTP port to listen on
    #[arg(short, long, env = "PORT", default_value = "4000")]
    port: u16,

    /// SQLite database file (":memory:" for a throwaway database)
    #[arg(short, long, env = "DATABASE_URL", default_value = "galactic.db")]
    database: String,

    /// JSON seed file, loaded when the database is empty
    #[arg(short, long, env = "SEED_FILE")]
    seed: Option<PathBuf>,

    /// Serve GraphiQL on GET /graphql
    #[arg(long, env = "GRAPHQL_PLAYGROUND", default_value_t = true, action = ArgAction::Set)]
    playground: bool,

    /// Allow schema introspection
    #[arg(long, env = "GRAPHQL_INTROSPECTION", default_value_t = true, action = ArgAction::Set)]
    introspection: bool,

    /// Allowed CORS origin (repeatable)
    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5173", "http://localhost:3000"]
    )]
    cors_origins: Vec<String>,

    /// Print the schema SDL and exit
    #[arg(long)]
    print_schema: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            port: args.port,
            database: args.database,
            seed: args.seed,
            playground: args.playground,
            introspection: args.introspection,
            cors_origins: args.cors_origins,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.print_schema {
        print!("{}", export_schema_sdl());
        return Ok(());
    }

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from(args);
    info!("Galactic Battle server starting...");

    let db = Database::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database))?;
    if let Some(seed) = &config.seed {
        if db.is_empty()? {
            info!("Seeding empty database from {}", seed.display());
            db.seed_from_file(seed)
                .with_context(|| format!("Failed to seed from {}", seed.display()))?;
        } else {
            info!("Database already populated, skipping seed");
        }
    }

    let schema = build_schema(AppState::from_database(&db), &config);
    let app = build_router(schema, &config)?;

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!(
        "GraphQL endpoint: http://localhost:{}{}",
        config.port, GRAPHQL_PATH
    );
    if config.playground {
        info!("GraphiQL enabled on GET {}", GRAPHQL_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
