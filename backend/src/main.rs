//! Backend entry-point: wires REST endpoints, static assets, and OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use ecoleta_backend::domain::AssetUrlBase;
use ecoleta_backend::inbound::http::health::HealthState;
use ecoleta_backend::outbound::persistence::{run_migrations, DbPool, PoolConfig};
use server::{create_server, ServerConfig};

/// `ecoleta-backend` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ecoleta-backend",
    about = "REST backend for locating and registering recycling collection points",
    version
)]
struct CliArgs {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, value_name = "addr", default_value = "0.0.0.0:3333")]
    bind: SocketAddr,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted;
    /// without either, fixture data is served instead of a database.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Directory holding uploaded images and item icons, served at `/assets`.
    #[arg(long = "assets-dir", value_name = "path", default_value = "uploads")]
    assets_dir: PathBuf,
    /// Public base URL under which stored asset filenames resolve.
    #[arg(
        long = "asset-base-url",
        value_name = "url",
        default_value = "http://localhost:3333/assets"
    )]
    asset_base_url: String,
}

fn resolve_database_url(cli_value: Option<String>) -> Option<String> {
    cli_value.or_else(|| env::var("DATABASE_URL").ok())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let assets = AssetUrlBase::parse(&args.asset_base_url)
        .map_err(|err| std::io::Error::other(format!("invalid asset base URL: {err}")))?;

    let mut config = ServerConfig::new(args.bind, args.assets_dir, assets);
    match resolve_database_url(args.database_url) {
        Some(database_url) => {
            run_migrations(&database_url)
                .await
                .map_err(|err| std::io::Error::other(format!("migrations failed: {err}")))?;
            let pool = DbPool::new(PoolConfig::new(&database_url))
                .await
                .map_err(|err| std::io::Error::other(format!("create database pool: {err}")))?;
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("no database URL configured; serving fixture data");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind = %config.bind_addr(), "starting server");
    let server = create_server(health_state, config)?;
    server.await
}
