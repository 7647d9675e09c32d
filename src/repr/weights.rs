//! Weight and update-count storage.

use std::collections::{BTreeMap, HashMap};

use crate::features::FeatureVector;

/// Per-feature weights and update counts.
///
/// Both maps treat missing names as defaults — a weight of `0.0` and a count
/// of `0` — through explicit get-or-default accessors, so reads never
/// insert. Training keeps the two maps in lockstep: every feature name a
/// training update has touched is present in both, with a count of at
/// least 1.
///
/// # Example
///
/// ```
/// use hlr::{FeatureVector, WeightStore};
///
/// let mut store = WeightStore::new();
/// assert_eq!(store.weight("bias"), 0.0);
///
/// store.set_weight("bias", 0.2);
/// let features = FeatureVector::new().with("bias", 1.0).with("right", 2.0);
/// assert!((store.dot(&features) - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightStore {
    weights: HashMap<String, f64>,
    counts: HashMap<String, u64>,
}

impl WeightStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with initial weights. Counts start empty.
    pub fn from_weights(weights: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
            counts: HashMap::new(),
        }
    }

    /// Weight for a feature name, `0.0` if unseen.
    #[inline]
    pub fn weight(&self, name: &str) -> f64 {
        self.weights.get(name).copied().unwrap_or(0.0)
    }

    /// Update count for a feature name, `0` if unseen.
    #[inline]
    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Set the weight for a feature name.
    pub fn set_weight(&mut self, name: &str, value: f64) {
        match self.weights.get_mut(name) {
            Some(weight) => *weight = value,
            None => {
                self.weights.insert(name.to_owned(), value);
            }
        }
    }

    /// Increment the update count for a feature name.
    ///
    /// Also ensures a weight entry exists for the name, keeping the two maps
    /// in lockstep even when every gradient term was exactly zero.
    pub fn bump_count(&mut self, name: &str) {
        self.weights.entry(name.to_owned()).or_insert(0.0);
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    /// Dot product of the stored weights with a feature vector.
    ///
    /// Missing weights contribute `0.0`; duplicate names contribute one term
    /// per occurrence.
    pub fn dot(&self, features: &FeatureVector) -> f64 {
        features
            .iter()
            .map(|f| self.weight(&f.name) * f.value)
            .sum()
    }

    /// Number of feature names with a defined weight.
    pub fn n_weights(&self) -> usize {
        self.weights.len()
    }

    /// Snapshot of the weights, ordered by name.
    pub fn export(&self) -> BTreeMap<String, f64> {
        self.weights
            .iter()
            .map(|(name, &weight)| (name.clone(), weight))
            .collect()
    }

    /// Snapshot of the update counts, ordered by name.
    pub fn export_counts(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|(name, &count)| (name.clone(), count))
            .collect()
    }

    /// Replace the weight map wholesale.
    ///
    /// Counts are not touched: a feature previously tracked only by the
    /// count map keeps its accumulated count (so its adaptive learning rate
    /// stays decayed) while its weight reverts to the `0.0` default.
    pub fn import(&mut self, weights: impl IntoIterator<Item = (String, f64)>) {
        self.weights = weights.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_names_default() {
        let store = WeightStore::new();
        assert_eq!(store.weight("missing"), 0.0);
        assert_eq!(store.count("missing"), 0);
        assert_eq!(store.n_weights(), 0);
    }

    #[test]
    fn reads_never_insert() {
        let store = WeightStore::new();
        let _ = store.weight("a");
        let _ = store.count("a");
        assert_eq!(store.n_weights(), 0);
        assert!(store.export_counts().is_empty());
    }

    #[test]
    fn set_and_get() {
        let mut store = WeightStore::new();
        store.set_weight("right", 0.5);
        assert_eq!(store.weight("right"), 0.5);

        store.set_weight("right", -0.25);
        assert_eq!(store.weight("right"), -0.25);
        assert_eq!(store.n_weights(), 1);
    }

    #[test]
    fn bump_count_keeps_lockstep() {
        let mut store = WeightStore::new();
        store.bump_count("bias");

        assert_eq!(store.count("bias"), 1);
        // A weight entry must exist even though nothing set it
        assert_eq!(store.export().get("bias"), Some(&0.0));

        store.bump_count("bias");
        assert_eq!(store.count("bias"), 2);
    }

    #[test]
    fn dot_product_with_duplicates() {
        let mut store = WeightStore::new();
        store.set_weight("x", 0.3);

        let features = FeatureVector::new().with("x", 1.0).with("x", 1.0);
        assert!((store.dot(&features) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn dot_product_empty_is_zero() {
        let store = WeightStore::new();
        assert_eq!(store.dot(&FeatureVector::new()), 0.0);
    }

    #[test]
    fn export_is_name_ordered() {
        let mut store = WeightStore::new();
        store.set_weight("wrong", 1.0);
        store.set_weight("bias", 2.0);
        store.set_weight("right", 3.0);

        let names: Vec<String> = store.export().into_keys().collect();
        assert_eq!(names, ["bias", "right", "wrong"]);
    }

    #[test]
    fn import_replaces_weights_but_not_counts() {
        let mut store = WeightStore::new();
        store.set_weight("old", 1.5);
        store.bump_count("old");
        store.bump_count("old");

        store.import([("new".to_owned(), 0.7)]);

        // Weight map fully replaced
        assert_eq!(store.weight("new"), 0.7);
        assert_eq!(store.weight("old"), 0.0);
        assert_eq!(store.n_weights(), 1);

        // Counts untouched: "old" keeps its stale count
        assert_eq!(store.count("old"), 2);
        assert_eq!(store.count("new"), 0);
    }

    #[test]
    fn from_weights_has_empty_counts() {
        let store = WeightStore::from_weights([("bias".to_owned(), 0.1)]);
        assert_eq!(store.weight("bias"), 0.1);
        assert_eq!(store.count("bias"), 0);
    }
}
