//! Model configuration with builder pattern.
//!
//! [`HlrConfig`] carries the hyperparameters of a model instance. They are
//! immutable once the model is constructed. The builder (via `bon`)
//! validates at build time; defaults are the standard half-life-regression
//! fit values.
//!
//! # Example
//!
//! ```
//! use hlr::HlrConfig;
//!
//! // All defaults
//! let config = HlrConfig::builder().build().unwrap();
//! assert!((config.learning_rate - 0.001).abs() < 1e-12);
//!
//! // Customized
//! let config = HlrConfig::builder()
//!     .learning_rate(0.01)
//!     .omit_halflife_term(true)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::training::UpdateParams;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Learning rate must be positive.
    #[error("learning_rate must be positive, got {0}")]
    InvalidLearningRate(f64),
    /// Sigma must be positive (it is squared into a divisor).
    #[error("sigma must be positive, got {0}")]
    InvalidSigma(f64),
    /// Loss-term weights must be non-negative.
    #[error("{field} must be non-negative, got {value}")]
    InvalidTermWeight {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

// =============================================================================
// HlrConfig
// =============================================================================

/// Hyperparameters for a half-life regression model.
///
/// # Example
///
/// ```
/// use hlr::{HlrConfig, HlrModel};
///
/// let config = HlrConfig::builder().l2_weight(0.05).build().unwrap();
/// let model = HlrModel::new(config);
/// # let _ = model;
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct HlrConfig {
    /// Base learning rate for online updates. Default: 0.001.
    #[builder(default = 0.001)]
    pub learning_rate: f64,

    /// Weight of the half-life error term in the loss. Default: 0.01.
    #[builder(default = 0.01)]
    pub halflife_weight: f64,

    /// L2 regularization weight. Default: 0.1.
    #[builder(default = 0.1)]
    pub l2_weight: f64,

    /// L2 regularization scale. Default: 1.0.
    #[builder(default = 1.0)]
    pub sigma: f64,

    /// Omit the half-life error term from the gradient. Default: false.
    #[builder(default = false)]
    pub omit_halflife_term: bool,
}

/// Custom finishing function that validates the config.
impl<S: hlr_config_builder::IsComplete> HlrConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `learning_rate <= 0`
    /// - `sigma <= 0`
    /// - `halflife_weight < 0` or `l2_weight < 0`
    pub fn build(self) -> Result<HlrConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl HlrConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.sigma <= 0.0 {
            return Err(ConfigError::InvalidSigma(self.sigma));
        }
        if self.halflife_weight < 0.0 {
            return Err(ConfigError::InvalidTermWeight {
                field: "halflife_weight",
                value: self.halflife_weight,
            });
        }
        if self.l2_weight < 0.0 {
            return Err(ConfigError::InvalidTermWeight {
                field: "l2_weight",
                value: self.l2_weight,
            });
        }
        Ok(())
    }

    /// Convert to updater parameters.
    pub(crate) fn to_update_params(&self) -> UpdateParams {
        UpdateParams {
            learning_rate: self.learning_rate,
            halflife_weight: self.halflife_weight,
            l2_weight: self.l2_weight,
            sigma: self.sigma,
            omit_halflife_term: self.omit_halflife_term,
        }
    }
}

impl Default for HlrConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================
