//! Checkout Service - HTTP API for plan purchases
//!
//! This is the main entry point for the checkout service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_service::{create_router, AppState, ServiceConfig};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,checkout_service=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Checkout Service");

    // Load configuration from environment
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        listen_addr = %config.listen_addr(),
        static_dir = %config.static_dir.display(),
        index_file = %config.index_file,
        paypal_environment = config.paypal.environment.as_str(),
        "Service configuration loaded"
    );

    if !config.index_path().is_file() {
        tracing::warn!(path = %config.index_path().display(), "Index document not found");
    }

    // Build app state
    let state = AppState::new(config.clone())?;

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr(), "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
