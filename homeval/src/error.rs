use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Artifact not found at path: {0}")]
    ArtifactNotFound(String),

    #[error("Malformed artifact: {0}")]
    MalformedArtifact(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Feature width mismatch: model expects {expected}, got {got}")]
    FeatureWidthMismatch { expected: usize, got: usize },

    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Inference error: {0}")]
    Inference(String),
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            PredictionError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            PredictionError::InvalidRequest(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            _ => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_not_found_error() {
        let error = PredictionError::ArtifactNotFound("model.json".to_string());
        assert_eq!(error.to_string(), "Artifact not found at path: model.json");
    }

    #[test]
    fn test_width_mismatch_error() {
        let error = PredictionError::FeatureWidthMismatch {
            expected: 5,
            got: 4,
        };
        assert_eq!(
            error.to_string(),
            "Feature width mismatch: model expects 5, got 4"
        );
    }

    #[test]
    fn test_ort_error_conversion() {
        let ort_error = ort::Error::new("test error");
        let error = PredictionError::from(ort_error);
        assert!(matches!(error, PredictionError::OrtError(_)));
    }

    #[test]
    fn test_invalid_request_is_client_error() {
        let response = PredictionError::InvalidRequest("sqft".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_inference_failures_are_server_errors() {
        let response = PredictionError::FeatureWidthMismatch {
            expected: 5,
            got: 3,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = PredictionError::Inference("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
