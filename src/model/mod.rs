//! High-level model API.
//!
//! [`HlrModel`] combines the weight store and the online updater behind the
//! four operations a surrounding system calls: `predict`, `train_update`,
//! `export_weights`, `import_weights`. [`HlrConfig`] carries the
//! hyperparameters with builder validation.

mod config;
mod hlr;

pub use config::{ConfigError, HlrConfig};
pub use hlr::{HlrModel, Prediction};
