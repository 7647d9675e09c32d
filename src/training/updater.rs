//! Online gradient updater.
//!
//! Implements one step of gradient descent against a squared-error objective
//! that jointly penalizes recall-prediction error and half-life-prediction
//! error, plus L2 shrinkage. Each feature is updated independently with its
//! own adaptive rate, which decays as `1/sqrt(1 + count)` the more often the
//! feature has been observed.

use crate::curve::{self, LN2};
use crate::features::FeatureVector;
use crate::repr::WeightStore;

/// Hyperparameters for online weight updates.
///
/// Immutable for the lifetime of a model instance. Defaults are the standard
/// half-life-regression fit values.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    /// Base learning rate.
    pub learning_rate: f64,
    /// Weight of the half-life error term in the loss.
    pub halflife_weight: f64,
    /// L2 regularization weight.
    pub l2_weight: f64,
    /// L2 regularization scale.
    pub sigma: f64,
    /// Skip the half-life gradient term entirely.
    pub omit_halflife_term: bool,
}

impl Default for UpdateParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            halflife_weight: 0.01,
            l2_weight: 0.1,
            sigma: 1.0,
            omit_halflife_term: false,
        }
    }
}

/// Applies single-observation gradient updates to a [`WeightStore`].
#[derive(Debug, Clone)]
pub struct OnlineUpdater {
    params: UpdateParams,
}

impl OnlineUpdater {
    /// Create an updater with the given hyperparameters.
    pub fn new(params: UpdateParams) -> Self {
        Self { params }
    }

    /// The updater's hyperparameters.
    pub fn params(&self) -> &UpdateParams {
        &self.params
    }

    /// Apply one observed review outcome to the store.
    ///
    /// Computes the current prediction, derives the target half-life if none
    /// was supplied, then steps every feature's weight. Per feature, the
    /// order of adjustments is fixed: recall-loss step, half-life-loss step
    /// (unless omitted), then L2 shrinkage using the weight value the first
    /// two steps produced. Reordering changes the resulting bits.
    ///
    /// An empty feature vector leaves the store untouched.
    pub fn update(
        &self,
        store: &mut WeightStore,
        features: &FeatureVector,
        elapsed_days: f64,
        actual_recall: f64,
        actual_half_life: Option<f64>,
    ) {
        let h = curve::half_life_from_score(store.dot(features));
        let p = curve::recall_at(h, elapsed_days);

        // Supplied half-lives are trusted as-is; only the derived estimate
        // is clipped. With no usable estimate the target collapses onto the
        // prediction and the half-life gradient term vanishes.
        let target_h = actual_half_life.unwrap_or_else(|| {
            curve::observed_half_life(actual_recall, elapsed_days).unwrap_or(h)
        });

        // Loss gradients with respect to the dot product.
        let dlp = 2.0 * (p - actual_recall) * LN2.powi(2) * p * (elapsed_days / h);
        let dlh = 2.0 * (h - target_h) * LN2 * h;

        // Updates for well-recalled items are dampened.
        let damping = 1.0 / (1.0 + actual_recall);
        let sigma_sq = self.params.sigma * self.params.sigma;

        for feature in features {
            let rate = damping * self.params.learning_rate
                / (1.0 + store.count(&feature.name) as f64).sqrt();

            let mut weight = store.weight(&feature.name);
            weight -= rate * dlp * feature.value;
            if !self.params.omit_halflife_term {
                weight -= rate * self.params.halflife_weight * dlh * feature.value;
            }
            weight -= rate * self.params.l2_weight * weight / sigma_sq;

            store.set_weight(&feature.name, weight);
            store.bump_count(&feature.name);
        }

        tracing::debug!(
            elapsed_days,
            actual_recall,
            predicted_recall = p,
            predicted_half_life = h,
            n_features = features.len(),
            "online update applied"
        );
    }
}
