use anyhow::{Context, Result};
use clap::Parser;
use objectstorage_backend::{
    adapters::inbound::http::router::{AppState, create_router},
    app::{AppBuilder, AppConfig, ConfigBackend, RemoteBackend},
};
use std::{net::SocketAddr, path::PathBuf};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "objectstorage-server")]
#[command(about = "HTTP front for the S3 object storage backend", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Where backend settings are stored (memory or database)
    #[arg(long, env = "CONFIG_BACKEND", default_value = "memory")]
    config_backend: String,

    /// Database URL for the database config backend (postgres:// or sqlite:)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Remote service blobs are written to (s3, memory or local)
    #[arg(long, env = "REMOTE_BACKEND", default_value = "s3")]
    remote_backend: String,

    /// Root directory for the local remote backend
    #[arg(long, env = "LOCAL_ROOT")]
    local_root: Option<PathBuf>,

    /// JSON translation catalog for labels and messages
    #[arg(long, env = "L10N_CATALOG")]
    l10n_catalog: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let config_backend = match self.config_backend.as_str() {
            "memory" => ConfigBackend::InMemory,
            "database" | "db" => {
                let connection_string = self
                    .database_url
                    .clone()
                    .context("DATABASE_URL is required for database config backend")?;
                ConfigBackend::Database { connection_string }
            }
            _ => anyhow::bail!("Unknown config backend: {}", self.config_backend),
        };

        let remote_backend = match self.remote_backend.as_str() {
            "s3" => RemoteBackend::S3,
            "memory" => RemoteBackend::InMemory,
            "local" => {
                let root = self
                    .local_root
                    .clone()
                    .context("LOCAL_ROOT is required for local remote backend")?;
                RemoteBackend::LocalFileSystem { root }
            }
            _ => anyhow::bail!("Unknown remote backend: {}", self.remote_backend),
        };

        Ok(AppConfig {
            config_backend,
            remote_backend,
            l10n_catalog: self.l10n_catalog.clone(),
        })
    }

    fn init_logging(&self) -> Result<()> {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .context("Invalid log filter")?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to install tracing subscriber")?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    info!("Starting object storage server");
    info!("Config backend: {}", cli.config_backend);
    info!("Remote backend: {}", cli.remote_backend);

    let config = cli.to_app_config()?;
    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let router = create_router(AppState::new(app_services.manager));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "objectstorage-server",
            "--port",
            "8080",
            "--config-backend",
            "database",
            "--database-url",
            "sqlite::memory:",
            "--remote-backend",
            "memory",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.config_backend, "database");
        match cli.to_app_config().unwrap().config_backend {
            ConfigBackend::Database { connection_string } => {
                assert_eq!(connection_string, "sqlite::memory:")
            }
            _ => panic!("Expected Database config backend"),
        }
    }

    #[test]
    fn test_memory_config() {
        let cli = Cli::parse_from([
            "objectstorage-server",
            "--config-backend",
            "memory",
            "--remote-backend",
            "s3",
        ]);

        let config = cli.to_app_config().unwrap();
        assert!(matches!(config.config_backend, ConfigBackend::InMemory));
        assert!(matches!(config.remote_backend, RemoteBackend::S3));
    }

    #[test]
    fn test_local_backend_requires_root() {
        let mut cli = Cli::parse_from(["objectstorage-server", "--remote-backend", "local"]);
        cli.local_root = None;
        assert!(cli.to_app_config().is_err());
    }
}
