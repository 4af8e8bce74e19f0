use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use eyre::Report;
use http::HeaderValue;
use kudipay_core::repositories::CurrencyRepository;
use kudipay_core::AppState;
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use std::env;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub fn build_cors() -> Result<CorsLayer, Report> {
    let origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into());

    let allowed_origins = origins
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(allowed_origins))
}

pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

pub fn build_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Result<Router, Report> {
    let cors = build_cors()?;

    Ok(kudipay_api::app::create_router(state, metric_layer, metric_handle).layer(cors))
}

/// USD is the base unit; rates are units per base, scaled by 1_000_000.
const DEFAULT_RATES: &[(CurrencyCode, i64)] = &[
    (CurrencyCode::USD, 1_000_000),
    (CurrencyCode::NGN, 1_500_000_000),
    (CurrencyCode::GHS, 120_000_000),
    (CurrencyCode::KES, 129_000_000),
    (CurrencyCode::ZAR, 18_000_000),
    (CurrencyCode::GBP, 790_000),
    (CurrencyCode::EUR, 920_000),
    (CurrencyCode::CAD, 1_370_000),
];

pub async fn initialize_system(state: &Arc<AppState>) {
    if let Err(e) = seed_currency_rates(state) {
        warn!(
            "Failed to seed currency rates: {}. Continuing without preloading.",
            e
        );
    } else {
        info!("Currency rate table initialized");
    }
}

fn seed_currency_rates(state: &Arc<AppState>) -> Result<(), Report> {
    let mut conn = state.db.get()?;

    // only seed an empty table; operators manage rates afterwards
    if CurrencyRepository::count(&mut conn)? > 0 {
        return Ok(());
    }

    for (code, rate) in DEFAULT_RATES {
        CurrencyRepository::upsert(&mut conn, *code, *rate)?;
    }

    info!("Seeded {} default currency rates", DEFAULT_RATES.len());
    Ok(())
}
