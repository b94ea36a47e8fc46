use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use cg_api::{create_app, AppState};
use cg_infra::UpstreamClient;
use cg_shared::config::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_logging(&config.logging);

    info!(
        "Starting Catalog Gateway ({} environment)",
        config.environment
    );
    info!("Forwarding to upstream: {}", config.upstream.base_url);
    if config.is_production() && config.cors.allows_any_origin() {
        warn!("CORS_ALLOWED_ORIGINS is empty; accepting requests from any origin");
    }

    let gateway = UpstreamClient::new(config.upstream.clone())
        .context("failed to build upstream HTTP client")?;
    let app_state = web::Data::new(AppState::new(Arc::new(gateway)));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let keep_alive = std::time::Duration::from_secs(config.server.keep_alive);
    let app_config = config.clone();

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(keep_alive);
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}

/// `RUST_LOG` wins over the environment's default level
fn init_logging(logging: &LoggingConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(&logging.level));
    if !logging.timestamp {
        builder.format_timestamp(None);
    }
    builder.format_module_path(logging.source_location);
    builder.init();
}
