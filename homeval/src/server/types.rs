use crate::error::PredictionError;
use crate::model::store::ModelStore;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

/// Shared Application State
pub struct AppState {
    pub store: ModelStore,
    pub metrics: PrometheusHandle,
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PredictionRequest {
    pub location: String,
    pub sqft: f64,
    pub bhk: u32,
    pub bath: u32,
}

impl PredictionRequest {
    /// Range checks the type system does not cover. `sqft` must also fit
    /// the f32 feature vector.
    pub fn validate(&self) -> Result<(), PredictionError> {
        if !self.sqft.is_finite() || self.sqft <= 0.0 || self.sqft > f64::from(f32::MAX) {
            return Err(PredictionError::InvalidRequest(format!(
                "sqft must be a positive number no larger than {:e}, got {}",
                f32::MAX,
                self.sqft
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PredictionResponse {
    pub estimated_price: f64,
}
