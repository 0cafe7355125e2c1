//! VolunTodo landing page server entry point.
//!
//! Initializes tracing, loads configuration from TOML, layers the process
//! environment over the configured site values, loads templates, and serves
//! the router until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voluntodo::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use voluntodo::environment::{resolve_environment, LayeredProvider, ProcessEnv};
use voluntodo::http::start_server;
use voluntodo::routes::create_router;
use voluntodo::state::AppState;
use voluntodo::templates::init_templates;

/// VolunTodo: the coming-soon landing page server
#[derive(Parser, Debug)]
#[command(name = "voluntodo", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "voluntodo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration first so the log format is known
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(path = %args.config, "Loaded configuration");

    // Process environment wins over the config file's [site] values
    let provider = LayeredProvider::new()
        .with(ProcessEnv)
        .with(config.site.as_provider());

    let environment = resolve_environment(&provider);
    tracing::info!(
        environment = environment.environment().as_str(),
        site_url = %environment.site_url,
        "Resolved deployment environment"
    );

    let tera = init_templates(&config.theme)?;
    tracing::info!(dir = %config.theme.templates_dir, "Initialized templates");

    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    let state = AppState::new(config.clone(), tera, provider);
    let app = create_router(state);

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
