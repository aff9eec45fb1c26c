// src/nn/losses/l1.rs

use crate::config::Config;
use crate::error::LossBoxError;
use crate::nn::loss::{check_inputs, Loss};
use crate::nn::losses::mse::Reduction;

/// Mean (or summed) absolute error between predictions and targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1Loss {
    reduction: Reduction,
}

impl L1Loss {
    /// Identifier this loss registers under.
    pub const ID: &'static str = "l1";

    pub fn new(reduction: Reduction) -> Self {
        L1Loss { reduction }
    }

    /// Builds the loss from a config. The `"reduction"` key is optional
    /// and defaults to `"mean"`.
    pub fn from_config(config: &Config) -> Result<Self, LossBoxError> {
        Ok(L1Loss::new(Reduction::from_config(config)?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }
}

impl Loss for L1Loss {
    fn evaluate(&self, predicted: &[f32], target: &[f32]) -> Result<f32, LossBoxError> {
        check_inputs(predicted, target, "L1Loss evaluate")?;
        let sum_abs: f32 = predicted
            .iter()
            .zip(target.iter())
            .map(|(p, t)| (p - t).abs())
            .sum();
        Ok(self.reduction.apply(sum_abs, predicted.len()))
    }

    fn name(&self) -> &'static str {
        Self::ID
    }
}

#[cfg(test)]
#[path = "l1_test.rs"]
mod tests;
