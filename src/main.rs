use anyhow::Result;
use clap::{Parser, Subcommand};
use provgate_config::Config;
use provgate_gateway::AppState;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "provgate",
    about = "provgate — stateless Google Cloud provisioning relay"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the relay gateway.
    Serve {
        /// Path to the YAML configuration file.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Override the listening port (default: 6107).
        #[arg(short, long)]
        port: Option<u16>,
        /// Override the listening address (default: 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config, port, host } => cmd_serve(config, port, host).await,
    }
}

async fn cmd_serve(
    config_path: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    let mut config = Config::load(config_path.as_deref())
        .map_err(|e| anyhow::anyhow!("config error: {e}"))?;

    if let Some(p) = port {
        config.port = p;
    }
    if let Some(h) = host {
        config.host = h;
    }
    if config.client_id.is_empty() || config.client_secret.is_empty() {
        anyhow::bail!(
            "client_id and client_secret must be configured \
             (PROVGATE_CLIENT_ID / PROVGATE_CLIENT_SECRET)"
        );
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(&config);
    let app = provgate_gateway::make_app(&config, state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, base_path = %config.base_path, "provgate listening");
    axum::serve(listener, app).await?;
    Ok(())
}
