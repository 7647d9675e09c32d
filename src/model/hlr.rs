//! Half-life regression model.
//!
//! High-level wrapper around [`WeightStore`] and [`OnlineUpdater`]. Access
//! the hyperparameters via [`config()`](HlrModel::config) and the trained
//! state via [`export_weights()`](HlrModel::export_weights) /
//! [`update_counts()`](HlrModel::update_counts).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::curve;
use crate::features::FeatureVector;
use crate::repr::WeightStore;
use crate::training::OnlineUpdater;

use super::HlrConfig;

/// A recall/half-life prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability of recall after the elapsed time, clipped into
    /// `[0.0001, 0.9999]`.
    pub recall: f64,
    /// Predicted half-life in days, clipped into `[15/1440, 274]`.
    pub half_life: f64,
}

/// Online half-life regression model.
///
/// Holds per-feature weights and per-feature update counts, predicts recall
/// probability and memory half-life from a feature vector, and adjusts its
/// weights from single observed review outcomes.
///
/// The model is an explicitly owned value: [`predict`](Self::predict) takes
/// `&self` and is safe to run concurrently, while
/// [`train_update`](Self::train_update) and
/// [`import_weights`](Self::import_weights) take `&mut self`, so concurrent
/// callers serialize mutation through their own `Mutex`, `RwLock`, or actor
/// boundary. The model itself never locks, blocks, or performs I/O.
///
/// # Example
///
/// ```
/// use hlr::{FeatureVector, HlrConfig, HlrModel};
///
/// let mut model = HlrModel::new(HlrConfig::default());
/// let features = FeatureVector::new()
///     .with("right", 2.449)
///     .with("wrong", 1.0)
///     .with("bias", 1.0);
///
/// // Untrained model: zero weights give a one-day half-life
/// let before = model.predict(&features, 1.0);
/// assert!((before.half_life - 1.0).abs() < 1e-12);
/// assert!((before.recall - 0.5).abs() < 1e-12);
///
/// // A well-recalled review pushes the prediction up
/// model.train_update(&features, 1.0, 0.9, None);
/// let after = model.predict(&features, 1.0);
/// assert!(after.recall > before.recall);
/// ```
#[derive(Clone)]
pub struct HlrModel {
    store: WeightStore,
    updater: OnlineUpdater,
    config: HlrConfig,
}

impl HlrModel {
    /// Create a model with zero weights.
    pub fn new(config: HlrConfig) -> Self {
        let updater = OnlineUpdater::new(config.to_update_params());
        Self {
            store: WeightStore::new(),
            updater,
            config,
        }
    }

    /// Create a model seeded with externally trained weights.
    ///
    /// Update counts start at zero: the adaptive per-feature rates are not
    /// part of the exported state.
    pub fn with_weights(
        config: HlrConfig,
        initial_weights: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        let updater = OnlineUpdater::new(config.to_update_params());
        Self {
            store: WeightStore::from_weights(initial_weights),
            updater,
            config,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The model's hyperparameters.
    pub fn config(&self) -> &HlrConfig {
        &self.config
    }

    /// Number of feature names with a defined weight.
    pub fn n_weights(&self) -> usize {
        self.store.n_weights()
    }

    /// Update count for a single feature name, `0` if never trained.
    pub fn update_count(&self, name: &str) -> u64 {
        self.store.count(name)
    }

    /// Snapshot of all per-feature update counts, ordered by name.
    pub fn update_counts(&self) -> BTreeMap<String, u64> {
        self.store.export_counts()
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Predicted half-life in days for a feature vector.
    ///
    /// `hclip(2^dp)` over the weight/feature dot product; always in
    /// `[15/1440, 274]` days, even for overflowing or NaN-poisoned inputs.
    pub fn half_life(&self, features: &FeatureVector) -> f64 {
        curve::half_life_from_score(self.store.dot(features))
    }

    /// Predict recall probability and half-life after `elapsed_days`.
    ///
    /// Pure: no state is read besides the weights and nothing is mutated.
    /// `elapsed_days` must be non-negative; negative input is a caller
    /// contract violation and its result is unspecified.
    pub fn predict(&self, features: &FeatureVector, elapsed_days: f64) -> Prediction {
        let half_life = self.half_life(features);
        let recall = curve::recall_at(half_life, elapsed_days);

        tracing::debug!(
            recall,
            half_life,
            n_features = features.len(),
            elapsed_days,
            "predict"
        );

        Prediction { recall, half_life }
    }

    // =========================================================================
    // Training
    // =========================================================================

    /// Update weights from a single observed review outcome.
    ///
    /// One step of online gradient descent toward the observed
    /// `actual_recall` (in `[0, 1]`) and, when supplied, `actual_half_life`
    /// in days. Without a supplied half-life the observed one is estimated
    /// from the recall and elapsed time where possible; otherwise the
    /// half-life loss term vanishes for this step.
    ///
    /// Every feature in the vector gets its weight stepped and its update
    /// count incremented; an empty vector leaves the model untouched. A
    /// subsequent [`predict`](Self::predict) with the same features reflects
    /// the new weights.
    pub fn train_update(
        &mut self,
        features: &FeatureVector,
        elapsed_days: f64,
        actual_recall: f64,
        actual_half_life: Option<f64>,
    ) {
        self.updater.update(
            &mut self.store,
            features,
            elapsed_days,
            actual_recall,
            actual_half_life,
        );
    }

    // =========================================================================
    // Weight export/import
    // =========================================================================

    /// Snapshot of the current weights, ordered by name.
    ///
    /// Weights only: update counts are not part of the exported state.
    pub fn export_weights(&self) -> BTreeMap<String, f64> {
        self.store.export()
    }

    /// Replace the weight map wholesale.
    ///
    /// Update counts are not touched: a feature previously tracked only by
    /// the count map keeps its accumulated count (its adaptive rate stays
    /// decayed) while its weight reverts to the `0.0` default.
    pub fn import_weights(&mut self, weights: impl IntoIterator<Item = (String, f64)>) {
        self.store.import(weights);
        tracing::info!(n_weights = self.store.n_weights(), "weights imported");
    }
}

impl std::fmt::Debug for HlrModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HlrModel")
            .field("n_weights", &self.store.n_weights())
            .field("learning_rate", &self.config.learning_rate)
            .field("omit_halflife_term", &self.config.omit_halflife_term)
            .finish()
    }
}
