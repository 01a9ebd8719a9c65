use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::PredictionError;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub artifacts: ArtifactConfig,
    pub cors: CorsConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Locations of the two artifacts the model store is built from.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ArtifactConfig {
    /// `.json` linear coefficients or an `.onnx` graph.
    pub model_path: String,
    /// `{"data_columns": [...]}` file listing the feature columns.
    pub columns_path: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_path: "artifacts/model.json".to_string(),
            columns_path: "artifacts/columns.json".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Reads a YAML config file. A missing file yields the defaults; the
    /// returned flag tells the caller whether the file was found.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, bool), PredictionError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => Ok((Self::from_yaml(&content)?, true)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok((Self::default(), false)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, PredictionError> {
        serde_yaml::from_str(content)
            .map_err(|e| PredictionError::InvalidConfig(e.to_string()))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
