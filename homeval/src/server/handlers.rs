use axum::{body::Bytes, extract::State, Json};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;

use crate::error::PredictionError;
use crate::server::types::*;

pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, Friends!".to_string(),
    })
}

pub async fn locations(State(state): State<Arc<AppState>>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: state.store.locations().to_vec(),
    })
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, PredictionError> {
    // 1. Validate before touching the model; the content type is not checked
    let Json(request) = Json::<PredictionRequest>::from_bytes(&body)?;
    request.validate()?;

    // 2. Encode + infer
    let start = Instant::now();
    let estimated_price =
        state
            .store
            .predict(&request.location, request.sqft, request.bhk, request.bath)?;
    let duration = start.elapsed();

    counter!("homeval_predictions_total").increment(1);
    histogram!("homeval_prediction_duration_seconds").record(duration.as_secs_f64());
    tracing::debug!(
        location = %request.location,
        estimated_price,
        elapsed_us = duration.as_micros() as u64,
        "prediction served"
    );

    Ok(Json(PredictionResponse { estimated_price }))
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}
