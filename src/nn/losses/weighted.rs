// src/nn/losses/weighted.rs

use crate::config::Config;
use crate::error::LossBoxError;
use crate::nn::loss::{check_inputs, Loss};

/// Sum of squared errors scaled by a constant weight:
/// `sum((predicted - target)^2) * alpha`.
///
/// The canonical custom loss: a single required hyperparameter, `alpha`,
/// read from the config at construction time.
///
/// # Example
/// ```
/// use lossbox::{Config, WeightedSquaredError};
/// use lossbox::nn::Loss;
///
/// let config = Config::new("weighted_squared_error").with("alpha", 5.0);
/// let loss = WeightedSquaredError::from_config(&config).unwrap();
/// let value = loss.evaluate(&[0.2, 0.8], &[0.0, 1.0]).unwrap();
/// assert!((value - 0.4).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSquaredError {
    alpha: f32,
}

impl WeightedSquaredError {
    /// Identifier this loss registers under.
    pub const ID: &'static str = "weighted_squared_error";

    pub fn new(alpha: f32) -> Self {
        WeightedSquaredError { alpha }
    }

    /// Builds the loss from a config.
    ///
    /// # Errors
    /// `InvalidConfig` naming `alpha` if the field is missing or not
    /// numeric.
    pub fn from_config(config: &Config) -> Result<Self, LossBoxError> {
        let alpha = config.require_f32("alpha")?;
        Ok(WeightedSquaredError::new(alpha))
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl Loss for WeightedSquaredError {
    fn evaluate(&self, predicted: &[f32], target: &[f32]) -> Result<f32, LossBoxError> {
        check_inputs(predicted, target, "WeightedSquaredError evaluate")?;
        let sum_sq: f32 = predicted
            .iter()
            .zip(target.iter())
            .map(|(p, t)| (p - t) * (p - t))
            .sum();
        Ok(sum_sq * self.alpha)
    }

    fn name(&self) -> &'static str {
        Self::ID
    }
}

#[cfg(test)]
#[path = "weighted_test.rs"]
mod tests;
