// src/nn/losses/mse.rs

use crate::config::Config;
use crate::error::LossBoxError;
use crate::nn::loss::{check_inputs, Loss};

/// Specifies the reduction to apply to the output:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl Reduction {
    /// Parses a reduction from its config string, case-insensitively.
    pub fn from_str(s: &str) -> Result<Self, LossBoxError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(LossBoxError::invalid_config(
                "reduction",
                format!("unsupported reduction '{s}', expected 'mean' or 'sum'"),
            )),
        }
    }

    /// Reads the optional `"reduction"` key from a config, defaulting to
    /// `Mean` when absent.
    pub fn from_config(config: &Config) -> Result<Self, LossBoxError> {
        match config.get_str("reduction")? {
            Some(s) => Reduction::from_str(s),
            None => Ok(Reduction::default()),
        }
    }

    pub(crate) fn apply(&self, sum: f32, numel: usize) -> f32 {
        match self {
            Reduction::Mean => sum / numel as f32,
            Reduction::Sum => sum,
        }
    }
}

/// Computes the squared-error loss between predictions and targets,
/// reduced by mean or sum.
///
/// # Fields
/// * `reduction`: Specifies the type of reduction to apply to the output:
///   `Mean` or `Sum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    /// Identifier this loss registers under.
    pub const ID: &'static str = "mse";

    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Builds the loss from a config. The `"reduction"` key is optional
    /// and defaults to `"mean"`.
    pub fn from_config(config: &Config) -> Result<Self, LossBoxError> {
        Ok(MseLoss::new(Reduction::from_config(config)?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }
}

impl Loss for MseLoss {
    fn evaluate(&self, predicted: &[f32], target: &[f32]) -> Result<f32, LossBoxError> {
        check_inputs(predicted, target, "MseLoss evaluate")?;
        let sum_sq: f32 = predicted
            .iter()
            .zip(target.iter())
            .map(|(p, t)| (p - t) * (p - t))
            .sum();
        Ok(self.reduction.apply(sum_sq, predicted.len()))
    }

    fn name(&self) -> &'static str {
        Self::ID
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
