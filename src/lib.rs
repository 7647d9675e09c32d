//! hlr: online half-life regression for spaced repetition.
//!
//! Predicts how likely a learner is to recall a memorized item after some
//! elapsed time, and how long that recall is expected to persist (its
//! half-life), from a named feature vector describing prior exposure. After
//! each real review the model adjusts its weights from that single outcome,
//! improving incrementally without batch retraining.
//!
//! # Key Types
//!
//! - [`HlrModel`] - Prediction and online training over a weight store
//! - [`HlrConfig`] - Hyperparameters with builder validation
//! - [`FeatureVector`] / [`Feature`] - Named model inputs
//! - [`Prediction`] - Clipped recall probability and half-life
//! - [`WeightsSnapshot`] - Serializable weight export for external stores
//!
//! # Example
//!
//! ```
//! use hlr::{FeatureVector, HlrConfig, HlrModel};
//!
//! let mut model = HlrModel::new(HlrConfig::default());
//! let features = FeatureVector::new()
//!     .with("right", 2.449)
//!     .with("wrong", 1.0)
//!     .with("bias", 1.0);
//!
//! // Estimate recall 3.5 days after the last review
//! let prediction = model.predict(&features, 3.5);
//!
//! // The learner got it right; fold the outcome back into the weights
//! model.train_update(&features, 3.5, 1.0, None);
//! assert!(model.predict(&features, 3.5).recall > prediction.recall);
//! ```
//!
//! # Concurrency
//!
//! A model is an explicitly owned value, not a global. `predict` takes
//! `&self`; `train_update` and weight import take `&mut self`. Callers that
//! share one instance across threads wrap it in a lock or confine it to a
//! single task — the model performs no internal locking, blocking, or I/O.

pub mod curve;
pub mod features;
pub mod model;
pub mod persist;
pub mod repr;
pub mod testing;
pub mod training;

// Convenience re-exports
pub use curve::{MAX_HALF_LIFE, MAX_RECALL, MIN_HALF_LIFE, MIN_RECALL};
pub use features::{Feature, FeatureVector};
pub use model::{ConfigError, HlrConfig, HlrModel, Prediction};
pub use persist::{SnapshotError, WeightsSnapshot};
pub use repr::WeightStore;
pub use training::{OnlineUpdater, UpdateParams};
