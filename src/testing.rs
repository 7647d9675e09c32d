//! Test-data helpers.
//!
//! Synthetic review histories for tests and benches. Not part of the
//! modeling API.

use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::features::FeatureVector;

/// A synthetic review observation: features, elapsed days, observed recall.
pub type Observation = (FeatureVector, f64, f64);

/// Feature vector for an item with `right` correct and `wrong` incorrect
/// prior reviews.
///
/// Counts enter square-root-compressed (`sqrt(1 + n)`) alongside a constant
/// bias term, the usual encoding of review histories for half-life
/// regression.
pub fn review_features(right: u32, wrong: u32) -> FeatureVector {
    FeatureVector::new()
        .with("right", (1.0 + f64::from(right)).sqrt())
        .with("wrong", (1.0 + f64::from(wrong)).sqrt())
        .with("bias", 1.0)
}

/// Generate `n` seeded random review observations.
///
/// Histories span 0–9 correct and 0–3 incorrect prior reviews, elapsed
/// times span minutes to a month, and observed recall covers the full
/// `[0, 1]` range. The same seed always yields the same stream.
pub fn random_observations(n: usize, seed: u64) -> Vec<Observation> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let right = rng.gen_range(0..10);
            let wrong = rng.gen_range(0..4);
            let elapsed = rng.gen_range(0.01..30.0);
            let recall = rng.gen_range(0.0..=1.0);
            (review_features(right, wrong), elapsed, recall)
        })
        .collect()
}
