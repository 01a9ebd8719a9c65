use crate::config::ArtifactConfig;
use crate::error::PredictionError;
use crate::model::features;
use crate::model::loader;
use crate::model::regressor::Regressor;
use crate::model::vocabulary::LocationVocabulary;
use metrics::{counter, gauge};
use ndarray::Array1;

/// The trained model plus the location vocabulary it was trained against.
/// Built once at startup and read-only afterwards.
pub struct ModelStore {
    regressor: Box<dyn Regressor>,
    vocabulary: LocationVocabulary,
}

impl ModelStore {
    pub fn new(regressor: Box<dyn Regressor>, vocabulary: LocationVocabulary) -> Self {
        if let Some(width) = regressor.input_width() {
            if width != vocabulary.feature_width() {
                tracing::warn!(
                    model_width = width,
                    feature_width = vocabulary.feature_width(),
                    "model and vocabulary disagree on feature width; predictions will fail"
                );
            }
        }
        gauge!("homeval_vocabulary_size").set(vocabulary.len() as f64);

        Self {
            regressor,
            vocabulary,
        }
    }

    pub fn load(artifacts: &ArtifactConfig) -> Result<Self, PredictionError> {
        let regressor = loader::load_regressor(&artifacts.model_path)?;
        let vocabulary = LocationVocabulary::load(&artifacts.columns_path)?;
        tracing::info!(
            columns = %artifacts.columns_path,
            locations = vocabulary.len(),
            "loaded location vocabulary"
        );
        Ok(Self::new(regressor, vocabulary))
    }

    pub fn locations(&self) -> &[String] {
        self.vocabulary.names()
    }

    pub fn vocabulary(&self) -> &LocationVocabulary {
        &self.vocabulary
    }

    pub fn features(&self, location: &str, sqft: f64, bhk: u32, bath: u32) -> Array1<f32> {
        features::encode(&self.vocabulary, location, sqft, bhk, bath)
    }

    /// Estimated price rounded to 2 decimal places. Unknown locations are
    /// encoded with no location signal rather than rejected.
    pub fn predict(
        &self,
        location: &str,
        sqft: f64,
        bhk: u32,
        bath: u32,
    ) -> Result<f64, PredictionError> {
        let position = self.vocabulary.position(location);
        if position.is_none() {
            counter!("homeval_unknown_location_total").increment(1);
            tracing::debug!(location, "unknown location, predicting without location signal");
        }

        let features = features::encode_position(&self.vocabulary, position, sqft, bhk, bath);
        let price = round_price(self.regressor.infer(features.view())?);
        if !price.is_finite() {
            return Err(PredictionError::Inference(format!(
                "model produced a non-finite price for location '{}'",
                location
            )));
        }
        Ok(price)
    }
}

fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
