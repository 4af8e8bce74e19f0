pub mod utility;

pub use kudipay_primitives::error::ApiError;

use crate::utility::clean_up_tasks::spawn_background_tasks;
use crate::utility::db_pool::{create_db_pool, run_migrations};
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, initialize_system, load_env};
use axum_prometheus::PrometheusMetricLayer;
use eyre::Report;
use kudipay_core::AppState;
use kudipay_primitives::models::app_config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Kudipay application...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. run pending database migrations
    run_migrations(&pool)?;

    // 6. build application state
    let state = AppState::new(pool, config)?;

    // 7. perform one-time system initialization
    initialize_system(&state).await;

    // 8. start background maintenance tasks
    spawn_background_tasks(state.clone());

    // 9. initialize metrics
    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();

    // 10. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 11. start HTTP server
    serve(app).await?;

    info!("Kudipay application shut down gracefully");
    Ok(())
}
