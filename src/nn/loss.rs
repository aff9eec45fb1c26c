use crate::config::Config;
use crate::error::LossBoxError;

/// The base trait for all loss functions.
///
/// A loss is a pure, deterministic function of its two inputs and the
/// hyperparameters captured at construction time. Implementations carry no
/// reference back to the registry that built them; ownership belongs to
/// whichever caller constructed the instance.
pub trait Loss: std::fmt::Debug + Send + Sync {
    /// Evaluates the loss over a flat slice of predictions against a flat
    /// slice of targets and returns the scalar loss value.
    ///
    /// # Arguments
    /// * `predicted`: model outputs.
    /// * `target`: ground-truth values, same length as `predicted`.
    ///
    /// # Errors
    /// `ShapeMismatch` if the slices differ in length, `EmptyInput` if they
    /// are empty.
    fn evaluate(&self, predicted: &[f32], target: &[f32]) -> Result<f32, LossBoxError>;

    /// Name of the loss function.
    fn name(&self) -> &'static str;
}

/// Constructor half of a registration record: builds a boxed [`Loss`] from
/// a [`Config`], validating that every required hyperparameter is present.
pub type BuildFn = fn(&Config) -> Result<Box<dyn Loss>, LossBoxError>;

/// Checks the common evaluate preconditions shared by all shipped losses.
pub(crate) fn check_inputs(
    predicted: &[f32],
    target: &[f32],
    operation: &str,
) -> Result<(), LossBoxError> {
    if predicted.len() != target.len() {
        return Err(LossBoxError::ShapeMismatch {
            expected: target.len(),
            actual: predicted.len(),
            operation: operation.to_string(),
        });
    }
    if predicted.is_empty() {
        return Err(LossBoxError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(())
}
