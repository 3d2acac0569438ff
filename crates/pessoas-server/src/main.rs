//! # Pessoas Server
//!
//! Main entry point for the pessoas service: loads configuration, builds the
//! connection pools, wires the gateways and orchestrators explicitly, and
//! serves the REST API until shutdown.

use pessoas_config::ConfigLoader;
use pessoas_core::{PessoasError, PessoasResult};
use pessoas_repository::{create_pool, PersonRepository, PgPersonRepository};
use pessoas_rest::{create_router, AppState};
use pessoas_service::{
    CacheGateway, FetchPeopleServiceImpl, RedisCacheGateway, SavePeopleServiceImpl,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting pessoas server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> PessoasResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Primary store pool: constructed once, shared by Arc, closed on exit.
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Cache pool (if enabled)
    let cache: Arc<dyn CacheGateway> = if config.redis.enabled {
        let mut redis_cfg = deadpool_redis::Config::from_url(&config.redis.url);
        redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(
            config.redis.pool_size as usize,
        ));
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| PessoasError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Arc::new(RedisCacheGateway::new(Arc::new(pool)))
    } else {
        info!("Redis disabled; every lookup falls through to the primary store");
        Arc::new(RedisCacheGateway::disabled())
    };

    // Gateways and orchestrators, wired explicitly
    let repository: Arc<dyn PersonRepository> =
        Arc::new(PgPersonRepository::new(Arc::new(db_pool.inner().clone())));

    let fetch_service = Arc::new(FetchPeopleServiceImpl::new(
        cache.clone(),
        repository.clone(),
    ));
    let save_service = Arc::new(SavePeopleServiceImpl::new(cache, repository));

    // Application state and router
    let state = AppState::new(
        fetch_service,
        save_service,
        config.validation.clone(),
        config.server.request_timeout(),
    );
    let router = create_router(state, &config.server);

    // Start the server
    let addr = config.server.addr();
    startup::print_startup_info(&addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PessoasError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PessoasError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pessoas=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
