use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    add_bank::add_bank, health::health_check, initiate_verification::initiate_verification,
    set_pin::set_pin, transactions::transactions, transfer::transfer,
    user_bank_accounts::user_bank_accounts, user_wallets::user_wallets,
    verify_deposits::verify_deposits, verify_otp::verify_otp, verify_pin::verify_pin,
};
use axum::routing::{get, post};
use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use kudipay_core::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    // rate limiting configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2) // 2 requests per second = 120 per minute
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    // tighter window for the credential-bearing withdrawal steps
    let auth_governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(1)
            .burst_size(3)
            .finish()
            .unwrap(),
    );

    let rate_limited = std::env::var("APP_ENV").unwrap_or_default() != "test";

    let mut withdraw_router = Router::new()
        .route("/api/withdraw/verify_pin", post(verify_pin))
        .route("/api/withdraw/verify_otp", post(verify_otp))
        .route("/api/pin", post(set_pin));
    if rate_limited {
        withdraw_router = withdraw_router.layer(GovernorLayer::new(auth_governor_conf));
    }

    let core_router = Router::new()
        .route("/api/transfer", post(transfer))
        .route(
            "/api/bank_verification/initiate",
            post(initiate_verification),
        )
        .route("/api/bank_verification/verify", post(verify_deposits))
        .route("/api/bank_accounts", post(add_bank))
        .route("/api/bank_accounts/{user_id}", get(user_bank_accounts))
        .route("/api/wallets/{user_id}", get(user_wallets))
        .route("/api/transactions/{user_id}", get(transactions));

    let public_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        );

    let mut router = Router::new()
        .merge(withdraw_router)
        .merge(core_router)
        .merge(public_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // disable rate limiting in test environment to avoid "Unable To Extract Key!" errors
    if rate_limited {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}
