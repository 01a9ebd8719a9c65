//! One-hot feature encoding for a listing.
//!
//! Layout: `[sqft, bath, bhk, loc_0, loc_1, ..., loc_{n-1}]`, where `loc_i`
//! is 1 for the vocabulary entry matching the listing's location and 0
//! otherwise.

use crate::model::vocabulary::{LocationVocabulary, NUMERIC_COLUMNS};
use ndarray::{Array1, ArrayView1};

/// Builds the feature vector. An unknown location leaves every indicator at 0.
pub fn encode(
    vocabulary: &LocationVocabulary,
    location: &str,
    sqft: f64,
    bhk: u32,
    bath: u32,
) -> Array1<f32> {
    encode_position(vocabulary, vocabulary.position(location), sqft, bhk, bath)
}

/// Builds the feature vector for an already resolved vocabulary position.
/// `None` means no location signal.
pub fn encode_position(
    vocabulary: &LocationVocabulary,
    position: Option<usize>,
    sqft: f64,
    bhk: u32,
    bath: u32,
) -> Array1<f32> {
    let mut features = Array1::<f32>::zeros(vocabulary.feature_width());
    features[0] = sqft as f32;
    features[1] = bath as f32;
    features[2] = bhk as f32;

    if let Some(position) = position.filter(|&p| p < vocabulary.len()) {
        features[NUMERIC_COLUMNS + position] = 1.0;
    }

    features
}

/// Recovers the location a vector was encoded with. Returns `None` when no
/// indicator (or more than one) is set, or when the width disagrees with the
/// vocabulary.
pub fn decode_location<'a>(
    vocabulary: &'a LocationVocabulary,
    features: ArrayView1<'_, f32>,
) -> Option<&'a str> {
    if features.len() != vocabulary.feature_width() {
        return None;
    }

    let mut hot = features
        .iter()
        .skip(NUMERIC_COLUMNS)
        .enumerate()
        .filter(|(_, &v)| v == 1.0)
        .map(|(i, _)| i);

    match (hot.next(), hot.next()) {
        (Some(position), None) => vocabulary.name_at(position),
        _ => None,
    }
}
