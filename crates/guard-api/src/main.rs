//! GroupGuard API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p guard-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use guard_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Initialize tracing, picking the format from APP_ENV when config loaded
    let tracing_config = config
        .as_ref()
        .map(|c| TracingConfig::for_environment(c.app.env))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = guard_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
