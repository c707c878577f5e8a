//! Stream Gateway binary
//!
//! Loads the configuration, sets up logging and runs the gateway until the
//! listener fails.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stream_gateway::config::{GatewayConfig, LogFormat};
use stream_gateway::config_file::ConfigFile;
use stream_gateway::error::Result;
use stream_gateway::gateway;
use stream_gateway::registry::MemoryRegistry;
use stream_gateway::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "stream-gateway";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let (loaded, load_error) = if std::path::Path::new(&config_path).exists() {
        match ConfigFile::from_file(&config_path) {
            Ok(cf) => (cf.into_parts(), None),
            Err(e) => (ConfigFile::default_config().into_parts(), Some(e)),
        }
    } else {
        (ConfigFile::default_config().into_parts(), None)
    };
    let (config, streams) = loaded;

    init_logging(&config);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        );
    }
    tracing::info!(
        listen = %config.listen_address,
        debug = config.debug,
        demo = config.demo,
        dir = %config.dir.display(),
        "Configuration loaded"
    );

    let registry = Arc::new(MemoryRegistry::from_streams(streams));
    tracing::info!("Registered {} stream(s)", registry.len());

    let state = Arc::new(AppState::new(config, registry)?);
    gateway::start(state).await
}

/// Initialize logging with tracing
fn init_logging(config: &GatewayConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
