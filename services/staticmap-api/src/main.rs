//! Static Map API Server
//!
//! Redirects static map requests to images rendered by the ArcGIS export web
//! map task.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use staticmap_api::build_router;
use staticmap_api::config::{
    ServiceConfig, DEFAULT_EXPORT_URL, DEFAULT_GEOCODE_URL, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STATIC_DIR,
};
use staticmap_api::state::AppState;

/// Static Map API Server
#[derive(Parser, Debug)]
#[command(name = "staticmap-api")]
#[command(about = "Static map image proxy for the ArcGIS export web map task")]
struct Args {
    /// Listen address (defaults to 0.0.0.0:$PORT)
    #[arg(short, long, env = "STATICMAP_LISTEN_ADDR")]
    listen: Option<String>,

    /// Port used when no listen address is given
    #[arg(long, default_value_t = DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Geocoder findAddressCandidates endpoint
    #[arg(long, default_value = DEFAULT_GEOCODE_URL, env = "STATICMAP_GEOCODE_URL")]
    geocode_url: String,

    /// Export web map task execute endpoint
    #[arg(long, default_value = DEFAULT_EXPORT_URL, env = "STATICMAP_EXPORT_URL")]
    export_url: String,

    /// Timeout for each outbound request, in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, env = "STATICMAP_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// Directory served under /static
    #[arg(long, default_value = DEFAULT_STATIC_DIR, env = "STATICMAP_STATIC_DIR")]
    static_dir: PathBuf,

    /// Number of worker threads
    #[arg(long, env = "STATICMAP_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

impl Args {
    fn listen_addr(&self) -> String {
        self.listen
            .clone()
            .unwrap_or_else(|| format!("0.0.0.0:{}", self.port))
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            geocode_url: self.geocode_url.clone(),
            export_url: self.export_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            static_dir: self.static_dir.clone(),
            ..ServiceConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting static map API server");

    let config = args.service_config();
    info!(
        geocode_url = %config.geocode_url,
        export_url = %config.export_url,
        timeout_secs = config.request_timeout.as_secs(),
        static_dir = %config.static_dir.display(),
        "Loaded configuration"
    );

    let state = Arc::new(AppState::new(config)?.with_metrics(prometheus_handle));
    let app = build_router(state);

    let addr: SocketAddr = args
        .listen_addr()
        .parse()
        .context("Invalid listen address")?;

    info!("Static map API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
