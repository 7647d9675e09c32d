//! Weight snapshot serialization.
//!
//! The model owns no persistence: an external store snapshots weights and
//! restores them at process start. [`WeightsSnapshot`] is the serialized
//! shape of that hand-off — weights only, keyed by feature name, with
//! `BTreeMap` for deterministic JSON output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::HlrModel;

/// Errors from snapshot encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot could not be serialized to JSON.
    #[error("failed to serialize weight snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The input was not a valid snapshot document.
    #[error("failed to parse weight snapshot: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serializable snapshot of model weights.
///
/// Update counts are runtime state and are not part of the snapshot;
/// applying one to a model behaves exactly like
/// [`import_weights`](HlrModel::import_weights).
///
/// # Example
///
/// ```
/// use hlr::{FeatureVector, HlrConfig, HlrModel, WeightsSnapshot};
///
/// let mut model = HlrModel::new(HlrConfig::default());
/// let features = FeatureVector::new().with("bias", 1.0);
/// model.train_update(&features, 1.0, 0.9, None);
///
/// let json = WeightsSnapshot::from_model(&model).to_json().unwrap();
///
/// let mut restored = HlrModel::new(HlrConfig::default());
/// WeightsSnapshot::from_json(&json).unwrap().apply(&mut restored);
/// assert_eq!(restored.predict(&features, 1.0), model.predict(&features, 1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightsSnapshot {
    /// Feature name → weight.
    pub weights: BTreeMap<String, f64>,
}

impl WeightsSnapshot {
    /// Snapshot a model's current weights.
    pub fn from_model(model: &HlrModel) -> Self {
        Self {
            weights: model.export_weights(),
        }
    }

    /// Replace a model's weights with the snapshot contents.
    pub fn apply(&self, model: &mut HlrModel) {
        model.import_weights(self.weights.clone());
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Serialize)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Deserialize)
    }
}
