//! HTTP server for the Reimbursement Engine.

use std::env;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use reimbursement_engine::api::{AppState, create_router};
use reimbursement_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("reimbursement_engine=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config_dir = env::var("ENGINE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return Err(err.into());
        }
    };
    info!(
        config_dir = %config_dir,
        grades = loader.config().grade_rates().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Reimbursement engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
