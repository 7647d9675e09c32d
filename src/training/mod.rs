//! Online training.
//!
//! One observed review outcome, one gradient step. There is no batch loop:
//! the surrounding system calls [`HlrModel::train_update`] after each real
//! review and the weights improve incrementally.
//!
//! [`HlrModel::train_update`]: crate::model::HlrModel::train_update

mod updater;

pub use updater::{OnlineUpdater, UpdateParams};
