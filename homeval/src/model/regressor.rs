use crate::error::PredictionError;
use ndarray::{Array1, ArrayView1};
use ort::{session::Session, value::Value};
use serde::Deserialize;
use std::sync::Mutex;

/// A trained model mapping one feature vector to a scalar estimate.
pub trait Regressor: Send + Sync {
    fn infer(&self, features: ArrayView1<'_, f32>) -> Result<f64, PredictionError>;

    /// Feature width the model was trained on, if the artifact records it.
    fn input_width(&self) -> Option<usize> {
        None
    }
}

#[derive(Deserialize)]
struct LinearArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Ordinary least-squares model: `coefficients · x + intercept`.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients: Array1::from(coefficients),
            intercept,
        }
    }

    /// Parses `{"coefficients": [...], "intercept": ...}`.
    pub fn from_json(content: &str) -> Result<Self, PredictionError> {
        let artifact: LinearArtifact = serde_json::from_str(content)
            .map_err(|e| PredictionError::MalformedArtifact(format!("model: {}", e)))?;
        Ok(Self::new(artifact.coefficients, artifact.intercept))
    }
}

impl Regressor for LinearRegressor {
    fn infer(&self, features: ArrayView1<'_, f32>) -> Result<f64, PredictionError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictionError::FeatureWidthMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        let features = features.mapv(f64::from);
        Ok(self.coefficients.dot(&features) + self.intercept)
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}

/// ONNX regression graph with a single `[1, width]` f32 input.
///
/// `Session::run` takes `&mut self`, so the session sits behind a mutex.
pub struct OnnxRegressor {
    session: Mutex<Session>,
    input_name: String,
}

impl OnnxRegressor {
    pub fn new(session: Session) -> Result<Self, PredictionError> {
        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| PredictionError::MalformedArtifact("model has no inputs".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            input_name,
        })
    }
}

impl Regressor for OnnxRegressor {
    fn infer(&self, features: ArrayView1<'_, f32>) -> Result<f64, PredictionError> {
        let shape = vec![1, features.len()];
        let data = features.to_vec().into_boxed_slice();
        let input_value = Value::from_array((shape, data))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| PredictionError::Inference("session lock poisoned".to_string()))?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => input_value])?;

        let (_, data) = outputs[0].try_extract_tensor::<f32>()?;
        data.first()
            .map(|&price| f64::from(price))
            .ok_or_else(|| PredictionError::Inference("model returned an empty tensor".to_string()))
    }
}
