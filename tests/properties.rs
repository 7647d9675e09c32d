//! Property tests: outputs always land inside the clipping bounds.

use proptest::prelude::*;

use hlr::curve;
use hlr::{
    FeatureVector, HlrConfig, HlrModel, MAX_HALF_LIFE, MAX_RECALL, MIN_HALF_LIFE, MIN_RECALL,
};

fn feature_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["right", "wrong", "bias", "lexeme:foo", "lexeme:bar"])
        .prop_map(str::to_owned)
}

fn feature_vector() -> impl Strategy<Value = FeatureVector> {
    prop::collection::vec((feature_name(), -50.0..50.0f64), 0..8)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .fold(FeatureVector::new(), |fv, (name, value)| fv.with(name, value))
        })
}

fn weight_map() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec((feature_name(), -100.0..100.0f64), 0..5)
}

proptest! {
    #[test]
    fn predictions_stay_in_bounds(
        weights in weight_map(),
        features in feature_vector(),
        elapsed in 0.0..10_000.0f64,
    ) {
        let model = HlrModel::with_weights(HlrConfig::default(), weights);
        let pred = model.predict(&features, elapsed);

        prop_assert!((MIN_RECALL..=MAX_RECALL).contains(&pred.recall));
        prop_assert!((MIN_HALF_LIFE..=MAX_HALF_LIFE).contains(&pred.half_life));
    }

    #[test]
    fn half_life_from_any_score_stays_in_bounds(dp in prop::num::f64::ANY) {
        let h = curve::half_life_from_score(dp);
        prop_assert!((MIN_HALF_LIFE..=MAX_HALF_LIFE).contains(&h));
    }

    #[test]
    fn observed_half_life_estimates_stay_in_bounds(
        recall in 0.0..=1.0f64,
        elapsed in 0.0..1_000.0f64,
    ) {
        if let Some(h) = curve::observed_half_life(recall, elapsed) {
            prop_assert!((MIN_HALF_LIFE..=MAX_HALF_LIFE).contains(&h));
        }
    }

    #[test]
    fn training_keeps_predictions_in_bounds(
        features in feature_vector(),
        elapsed in 0.0..100.0f64,
        recall in 0.0..=1.0f64,
    ) {
        let mut model = HlrModel::new(HlrConfig::default());
        model.train_update(&features, elapsed, recall, None);
        let pred = model.predict(&features, elapsed);

        prop_assert!((MIN_RECALL..=MAX_RECALL).contains(&pred.recall));
        prop_assert!((MIN_HALF_LIFE..=MAX_HALF_LIFE).contains(&pred.half_life));
    }

    #[test]
    fn counts_grow_by_exactly_the_vector_length(
        features in feature_vector(),
        elapsed in 0.0..100.0f64,
        recall in 0.0..=1.0f64,
    ) {
        let mut model = HlrModel::new(HlrConfig::default());
        model.train_update(&features, elapsed, recall, None);

        let total: u64 = model.update_counts().values().sum();
        prop_assert_eq!(total, features.len() as u64);
    }
}
