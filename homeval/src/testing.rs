//! Shared fixtures for unit and router tests.

use crate::error::PredictionError;
use crate::model::regressor::{LinearRegressor, Regressor};
use crate::model::store::ModelStore;
use crate::model::vocabulary::LocationVocabulary;
use ndarray::ArrayView1;
use std::sync::{Arc, Mutex};

/// Returns a fixed price and records every vector it is asked to score.
pub struct RecordingRegressor {
    pub seen: Arc<Mutex<Vec<Vec<f32>>>>,
    pub price: f64,
}

impl Regressor for RecordingRegressor {
    fn infer(&self, features: ArrayView1<'_, f32>) -> Result<f64, PredictionError> {
        self.seen.lock().unwrap().push(features.to_vec());
        Ok(self.price)
    }
}

/// Vocabulary used by the scenario tests.
pub fn scenario_vocabulary() -> LocationVocabulary {
    LocationVocabulary::from_names(["Whitefield", "Indiranagar"]).unwrap()
}

/// Store over [`scenario_vocabulary`] backed by a [`RecordingRegressor`].
pub fn recording_store(price: f64) -> (ModelStore, Arc<Mutex<Vec<Vec<f32>>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let regressor = RecordingRegressor {
        seen: seen.clone(),
        price,
    };
    (
        ModelStore::new(Box::new(regressor), scenario_vocabulary()),
        seen,
    )
}

/// Store over [`scenario_vocabulary`] with a real linear model:
/// `0.05*sqft + 1*bath + 2*bhk + 10*Whitefield + 20*Indiranagar + 0.3333`.
pub fn linear_store() -> ModelStore {
    let model = LinearRegressor::new(vec![0.05, 1.0, 2.0, 10.0, 20.0], 0.3333);
    ModelStore::new(Box::new(model), scenario_vocabulary())
}
