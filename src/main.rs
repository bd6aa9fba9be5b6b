//! Gatepass - a terminal front end for the gatepass account service.
//!
//! This binary wires the core library together: configuration from the
//! environment, an API client, a session, and the interactive shell.

mod app;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gatepass::api::ApiClient;
use gatepass::auth::Session;
use gatepass::config::ApiConfig;

use app::App;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("gatepass starting");

    let config = ApiConfig::from_env();
    info!(base_url = %config.base_url, "API configured");

    let api = ApiClient::new(config)?;
    let session = Session::new(api);
    let mut app = App::new(session);

    let result = app.run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("gatepass shutting down");
    Ok(())
}
