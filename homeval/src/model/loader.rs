use crate::error::PredictionError;
use crate::model::regressor::{LinearRegressor, OnnxRegressor, Regressor};
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::fs;
use std::path::Path;

// Registers the global ORT environment; later calls are no-ops.
pub fn init_ort() {
    let _ = ort::init().with_name("homeval").commit();
}

/// Loads a regression model from disk, choosing the format from the file
/// extension.
///
/// # Arguments
/// * `model_path` - Path to a `.json` linear model or an `.onnx` graph
pub fn load_regressor(model_path: impl AsRef<Path>) -> Result<Box<dyn Regressor>, PredictionError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(PredictionError::ArtifactNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let model = LinearRegressor::from_json(&fs::read_to_string(path)?)?;
            tracing::info!(
                path = %path.display(),
                width = model.input_width(),
                "loaded linear model"
            );
            Ok(Box::new(model))
        }
        Some("onnx") => Ok(Box::new(OnnxRegressor::new(load_session(path)?)?)),
        _ => Err(PredictionError::MalformedArtifact(format!(
            "unsupported model format: {}",
            path.display()
        ))),
    }
}

pub(crate) fn load_session(path: &Path) -> Result<Session, PredictionError> {
    init_ort();

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(1)?
        .commit_from_file(path)?;

    tracing::info!(path = %path.display(), "loaded onnx model");
    for (i, input) in session.inputs.iter().enumerate() {
        tracing::debug!("  input {}: {} ({:?})", i, input.name, input.input_type);
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_nonexistent_model() {
        match load_regressor("nonexistent_model.json") {
            Err(PredictionError::ArtifactNotFound(_)) => {}
            Err(other) => panic!("Expected ArtifactNotFound, got {:?}", other),
            Ok(_) => panic!("Expected ArtifactNotFound"),
        }
    }

    #[test]
    fn test_load_linear_model() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"coefficients": [1.0, 0.0, 0.0], "intercept": 2.0}}"#).unwrap();

        let model = load_regressor(file.path()).unwrap();
        assert_eq!(model.input_width(), Some(3));
        let price = model.infer(array![40.0f32, 1.0, 1.0].view()).unwrap();
        assert!((price - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = Builder::new().suffix(".pickle").tempfile().unwrap();
        assert!(matches!(
            load_regressor(file.path()),
            Err(PredictionError::MalformedArtifact(_))
        ));
    }

    #[test]
    fn test_corrupt_linear_model_rejected() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_regressor(file.path()),
            Err(PredictionError::MalformedArtifact(_))
        ));
    }

    #[test]
    fn test_load_onnx_model_by_extension() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/linear_price.onnx");
        let model = load_regressor(path).unwrap();
        assert_eq!(model.input_width(), None);

        let price = model.infer(array![1000.0f32, 2.0, 2.0, 1.0, 0.0].view()).unwrap();
        assert!((price - 66.3333).abs() < 1e-3);
    }

    #[test]
    fn test_corrupt_onnx_model_rejected() {
        let mut file = Builder::new().suffix(".onnx").tempfile().unwrap();
        write!(file, "not an onnx graph").unwrap();
        // Either ORT refuses the bytes or the runtime itself is unavailable.
        assert!(load_regressor(file.path()).is_err());
    }
}
