use crate::config::CorsConfig;
use crate::error::PredictionError;
use crate::model::store::ModelStore;
use crate::server::{handlers, types::AppState};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(
    store: ModelStore,
    metrics: PrometheusHandle,
    cors: &CorsConfig,
) -> Result<Router, PredictionError> {
    let state = Arc::new(AppState { store, metrics });

    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/locations", get(handlers::locations))
        .route("/predict", post(handlers::predict))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Fixed origin list; methods and headers are mirrored from the preflight
/// since wildcards cannot be combined with credentials.
pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer, PredictionError> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                PredictionError::InvalidConfig(format!("invalid CORS origin '{}'", origin))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
