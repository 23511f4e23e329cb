//! hello-api: a minimal HTTP service.
//!
//! This is the application entry point. It loads the optional TOML
//! configuration, initializes tracing, builds the Axum router and runs the
//! HTTP server until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hello_api::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use hello_api::http::{shutdown_signal, start_server};
use hello_api::routes::create_router;

/// hello-api: health check and greeting over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-api", version, about)]
struct Args {
    /// Path to an optional configuration file (defaults: 0.0.0.0:5000, text logs)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_api=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first so the log format is known before tracing starts
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!(
        config_file = args.config.as_deref().unwrap_or("(none)"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config, shutdown_signal()).await?;

    Ok(())
}
