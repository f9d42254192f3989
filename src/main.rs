use std::env;
use std::sync::Arc;
use std::time::Duration;

use payslip_engine::api::{AppState, create_router};
use payslip_engine::config::ConfigLoader;
use payslip_engine::delivery::{DEFAULT_TRANSPORT_TIMEOUT, Dispatcher, LoggingTransport};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("PAYSLIP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config_dir =
        env::var("PAYSLIP_CONFIG_DIR").unwrap_or_else(|_| "./config/paymaster".to_string());
    let mail_timeout = Duration::from_secs(env_u64(
        "PAYSLIP_MAIL_TIMEOUT_SECS",
        DEFAULT_TRANSPORT_TIMEOUT.as_secs(),
    ));

    let config = ConfigLoader::load(&config_dir)
        .map_err(|e| format!("failed to load configuration from {config_dir}: {e}"))?;
    info!(
        config_dir = %config_dir,
        employer = %config.employer().name,
        "configuration loaded"
    );

    let dispatcher = Dispatcher::new(Arc::new(LoggingTransport)).with_timeout(mail_timeout);
    let app = create_router(AppState::new(config, dispatcher));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("payslip-engine listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
