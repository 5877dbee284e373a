use std::path::PathBuf;

use clap::{Parser, Subcommand};

use themectl::config::validation::validate_config;
use themectl::config::{load_config, ClientConfig, ConfigError};
use themectl::observability::logging::init_logging;
use themectl::{Asset, AssetClient};

#[derive(Parser)]
#[command(name = "themectl")]
#[command(about = "Manage theme assets on a Shopify store", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shop domain (e.g. test.myshopify.com); overrides the config file
    #[arg(short, long)]
    domain: Option<String>,

    /// Access token; overrides the config file
    #[arg(short, long)]
    password: Option<String>,

    /// Outbound proxy URL
    #[arg(long)]
    proxy: Option<String>,

    /// Minimum spacing between requests, in milliseconds
    #[arg(long)]
    api_limit_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all theme assets
    List,
    /// Download a single asset and print its content
    Get { key: String },
    /// Upload a local file as an asset
    Put { key: String, file: PathBuf },
    /// Delete an asset
    Delete { key: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };

    if let Some(domain) = &cli.domain {
        config.store.domain = domain.clone();
    }
    if let Some(password) = &cli.password {
        config.store.password = password.clone();
    }
    if let Some(proxy) = &cli.proxy {
        config.transport.proxy_url = Some(proxy.clone());
    }
    if let Some(interval_ms) = cli.api_limit_ms {
        config.rate_limit.interval_ms = interval_ms;
    }

    // Flags may have filled in (or broken) what the file left out.
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.log.level);

    let client = AssetClient::from_params(config.params())?;

    match cli.command {
        Commands::List => {
            let assets = client.list().await?;
            println!("{}", serde_json::to_string_pretty(&assets)?);
        }
        Commands::Get { key } => {
            let asset = client.get(&key).await?;
            match asset.value {
                Some(value) => println!("{value}"),
                None => println!("{}", serde_json::to_string_pretty(&asset)?),
            }
        }
        Commands::Put { key, file } => {
            let value = std::fs::read_to_string(&file)?;
            let updated = client.update(&Asset::with_value(key, value)).await?;
            eprintln!("Uploaded {}", updated.key);
        }
        Commands::Delete { key } => {
            client.delete(&key).await?;
            eprintln!("Deleted {key}");
        }
    }

    Ok(())
}
