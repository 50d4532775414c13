//! Serve command - runs the HTTP API

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::router::cors_layer;
use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::infrastructure::database;

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let secret = config
        .session
        .resolve_secret()
        .context("invalid session configuration")?;

    info!("Connecting to database...");
    let pool = database::create_pool(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    info!("Database ready");

    let state = AppState::new(pool, &config, secret);
    if !config.rate_limit.enabled {
        warn!("rate limiting is disabled");
    }
    let pruning = state.limiters.spawn_pruning(LIMITER_PRUNE_INTERVAL);

    let app = create_router(state).layer(
        cors_layer(&config.server.cors_origin)
            .with_context(|| format!("invalid CORS origin {:?}", config.server.cors_origin))?,
    );

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    pruning.abort();

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
