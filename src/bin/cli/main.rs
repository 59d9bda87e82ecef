use anyhow::{Context, Result};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use objectstorage_backend::{
    app::{AppBuilder, AppConfig, ConfigBackend, RemoteBackend},
    domain::StoreField,
    ports::WritableStorage,
    services::StorageManager,
};
use std::{collections::HashMap, io::Write, path::PathBuf, sync::Arc};

#[derive(Parser, Debug)]
#[command(name = "objectstorage-cli")]
#[command(about = "Store, fetch and configure blobs through the object storage backend", long_about = None)]
struct Cli {
    /// Storage backend to operate on
    #[arg(short, long, default_value = "ObjectStorage")]
    backend: String,

    /// Where backend settings are stored (memory or database)
    #[arg(long, env = "CONFIG_BACKEND", default_value = "database")]
    config_backend: String,

    /// Database URL for the database config backend
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://objectstorage.db?mode=rwc")]
    database_url: String,

    /// Remote service blobs are written to (s3, memory or local)
    #[arg(long, env = "REMOTE_BACKEND", default_value = "s3")]
    remote_backend: String,

    /// Root directory for the local remote backend
    #[arg(long, env = "LOCAL_ROOT")]
    local_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a file and print its reference
    Put {
        /// File path to upload
        file: PathBuf,
        /// Reference to store under, generated when omitted
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// Download a blob
    Get {
        /// Blob reference
        reference: String,
        /// Output file path, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a blob
    Delete {
        /// Blob reference
        reference: String,
    },

    /// Show the backend's settings
    Options,

    /// Validate and save the backend's settings
    Configure {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        bucket: Option<String>,
        #[arg(long)]
        prefix: Option<String>,
    },
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let config_backend = match self.config_backend.as_str() {
            "memory" => ConfigBackend::InMemory,
            "database" | "db" => ConfigBackend::Database {
                connection_string: self.database_url.clone(),
            },
            _ => anyhow::bail!("Unknown config backend: {}", self.config_backend),
        };

        let remote_backend = match self.remote_backend.as_str() {
            "s3" => RemoteBackend::S3,
            "memory" => RemoteBackend::InMemory,
            "local" => RemoteBackend::LocalFileSystem {
                root: self
                    .local_root
                    .clone()
                    .context("LOCAL_ROOT is required for local remote backend")?,
            },
            _ => anyhow::bail!("Unknown remote backend: {}", self.remote_backend),
        };

        Ok(AppConfig {
            config_backend,
            remote_backend,
            l10n_catalog: None,
        })
    }
}

fn submission(
    region: Option<String>,
    endpoint: Option<String>,
    bucket: Option<String>,
    prefix: Option<String>,
) -> HashMap<String, String> {
    [
        (StoreField::Region, region),
        (StoreField::Endpoint, endpoint),
        (StoreField::Bucket, bucket),
        (StoreField::Prefix, prefix),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field.name().to_string(), v)))
    .collect()
}

async fn run(cli: Cli, manager: StorageManager) -> Result<()> {
    match cli.command {
        Commands::Put { file, reference } => {
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let storage = storage(&manager, &cli.backend).await?;
            let reference = storage
                .put(Bytes::from(data), reference.as_deref())
                .await?;
            println!("{}", reference);
        }
        Commands::Get { reference, output } => {
            let storage = storage(&manager, &cli.backend).await?;
            let data = storage.get(&reference).await?;
            match output {
                Some(path) => tokio::fs::write(&path, &data)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => std::io::stdout().write_all(&data)?,
            }
        }
        Commands::Delete { reference } => {
            let storage = storage(&manager, &cli.backend).await?;
            storage.delete(&reference).await?;
        }
        Commands::Options => {
            let config = manager
                .storage_config(&cli.backend)
                .await?
                .with_context(|| format!("Unknown storage backend: {}", cli.backend))?;
            println!("{}", serde_json::to_string_pretty(&config.get_options())?);
        }
        Commands::Configure {
            region,
            endpoint,
            bucket,
            prefix,
        } => {
            let mut config = manager
                .storage_config(&cli.backend)
                .await?
                .with_context(|| format!("Unknown storage backend: {}", cli.backend))?;
            let errors = config
                .save_options(&submission(region, endpoint, bucket, prefix))
                .await?;
            if !errors.is_empty() {
                for (field, message) in &errors {
                    eprintln!("{}: {}", field, message);
                }
                anyhow::bail!("Settings were not saved");
            }
        }
    }

    Ok(())
}

async fn storage(manager: &StorageManager, backend: &str) -> Result<Arc<dyn WritableStorage>> {
    manager
        .storage_instance(backend)
        .await?
        .with_context(|| format!("Unknown storage backend: {}", backend))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app_services = AppBuilder::new()
        .with_config(cli.to_app_config()?)
        .build()
        .await
        .context("Failed to build application")?;

    run(cli, app_services.manager).await
}
