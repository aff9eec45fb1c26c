#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::LossBoxError;
    use crate::nn::loss::Loss;
    use crate::nn::losses::mse::{MseLoss, Reduction};
    use approx::assert_relative_eq;

    #[test]
    fn test_reduction_from_str_case_insensitive() -> Result<(), LossBoxError> {
        assert_eq!(Reduction::from_str("mean")?, Reduction::Mean);
        assert_eq!(Reduction::from_str("Mean")?, Reduction::Mean);
        assert_eq!(Reduction::from_str("SUM")?, Reduction::Sum);
        Ok(())
    }

    #[test]
    fn test_reduction_from_str_rejects_unknown() {
        match Reduction::from_str("median") {
            Err(LossBoxError::InvalidConfig { field, .. }) => assert_eq!(field, "reduction"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_from_config_defaults_to_mean() -> Result<(), LossBoxError> {
        let loss = MseLoss::from_config(&Config::new(MseLoss::ID))?;
        assert_eq!(loss.reduction(), Reduction::Mean);
        Ok(())
    }

    #[test]
    fn test_from_config_honours_reduction_key() -> Result<(), LossBoxError> {
        let config = Config::new(MseLoss::ID).with("reduction", "sum");
        let loss = MseLoss::from_config(&config)?;
        assert_eq!(loss.reduction(), Reduction::Sum);
        Ok(())
    }

    #[test]
    fn test_evaluate_mean() -> Result<(), LossBoxError> {
        let loss = MseLoss::new(Reduction::Mean);
        // ((1.0-1.5)^2 + (2.0-1.0)^2) / 2 = (0.25 + 1.0) / 2 = 0.625
        let value = loss.evaluate(&[1.0, 2.0], &[1.5, 1.0])?;
        assert_relative_eq!(value, 0.625f32, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_evaluate_sum() -> Result<(), LossBoxError> {
        let loss = MseLoss::new(Reduction::Sum);
        let value = loss.evaluate(&[1.0, 2.0], &[1.5, 1.0])?;
        assert_relative_eq!(value, 1.25f32, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_evaluate_mismatched_lengths() {
        let loss = MseLoss::new(Reduction::Mean);
        let result = loss.evaluate(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(LossBoxError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_evaluate_empty_input() {
        let loss = MseLoss::new(Reduction::Mean);
        assert!(matches!(
            loss.evaluate(&[], &[]),
            Err(LossBoxError::EmptyInput { .. })
        ));
    }
}
