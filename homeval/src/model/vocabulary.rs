use crate::error::PredictionError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Number of numeric columns (sqft, bath, bhk) ahead of the location columns.
pub const NUMERIC_COLUMNS: usize = 3;

#[derive(Deserialize)]
struct ColumnsArtifact {
    data_columns: Vec<String>,
}

/// Ordered set of known location names. The position of a name is the
/// index of its one-hot column, offset by [`NUMERIC_COLUMNS`].
#[derive(Debug, Clone)]
pub struct LocationVocabulary {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl LocationVocabulary {
    pub fn from_names<I, S>(names: I) -> Result<Self, PredictionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), i).is_some() {
                return Err(PredictionError::MalformedArtifact(format!(
                    "duplicate location '{}'",
                    name
                )));
            }
        }
        Ok(Self { names, positions })
    }

    /// Parses a `{"data_columns": [...]}` document. The first
    /// [`NUMERIC_COLUMNS`] entries are skipped.
    pub fn from_columns_json(content: &str) -> Result<Self, PredictionError> {
        let artifact: ColumnsArtifact = serde_json::from_str(content)
            .map_err(|e| PredictionError::MalformedArtifact(format!("columns: {}", e)))?;

        if artifact.data_columns.len() < NUMERIC_COLUMNS {
            return Err(PredictionError::MalformedArtifact(format!(
                "columns: expected at least {} entries, got {}",
                NUMERIC_COLUMNS,
                artifact.data_columns.len()
            )));
        }

        Self::from_names(artifact.data_columns.into_iter().skip(NUMERIC_COLUMNS))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PredictionError::ArtifactNotFound(path.display().to_string()));
        }
        Self::from_columns_json(&fs::read_to_string(path)?)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Case-sensitive exact lookup.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Width of the feature vector built against this vocabulary.
    pub fn feature_width(&self) -> usize {
        NUMERIC_COLUMNS + self.names.len()
    }
}
