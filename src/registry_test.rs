#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::LossBoxError;
    use crate::nn::loss::Loss;
    use crate::nn::losses::{MseLoss, WeightedSquaredError};
    use crate::registry::{register_builtin_losses, LossRegistry};
    use approx::assert_relative_eq;

    fn builtin_registry() -> LossRegistry {
        let registry = LossRegistry::new();
        register_builtin_losses(&registry).expect("builtin registration failed");
        registry
    }

    #[test]
    fn test_build_returns_instance_of_registered_type() -> Result<(), LossBoxError> {
        let registry = builtin_registry();
        let config = Config::new(WeightedSquaredError::ID).with("alpha", 5);
        let loss = registry.build(&config)?;
        assert_eq!(loss.name(), WeightedSquaredError::ID);
        Ok(())
    }

    #[test]
    fn test_build_unknown_name() {
        let registry = builtin_registry();
        let config = Config::new("nonexistent");
        match registry.build(&config) {
            Err(LossBoxError::UnknownLoss { name, registered }) => {
                assert_eq!(name, "nonexistent");
                assert!(registered.contains(&MseLoss::ID.to_string()));
            }
            other => panic!("expected UnknownLoss, got {other:?}"),
        }
    }

    #[test]
    fn test_build_missing_name_key() {
        let registry = builtin_registry();
        let config = Config::empty().with("alpha", 5);
        assert!(matches!(
            registry.build(&config),
            Err(LossBoxError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_build_propagates_constructor_validation() {
        let registry = builtin_registry();
        // alpha is required by WeightedSquaredError::from_config
        let config = Config::new(WeightedSquaredError::ID);
        match registry.build(&config) {
            Err(LossBoxError::InvalidConfig { field, .. }) => assert_eq!(field, "alpha"),
            other => panic!("expected InvalidConfig for alpha, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let registry = builtin_registry();
        let result = registry.register(MseLoss::ID, |config| {
            Ok(Box::new(MseLoss::from_config(config)?))
        });
        match result {
            Err(LossBoxError::DuplicateRegistration { name }) => assert_eq!(name, MseLoss::ID),
            other => panic!("expected DuplicateRegistration, got {other:?}"),
        }
        // The original constructor is untouched.
        assert!(registry.contains(MseLoss::ID));
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let registry = LossRegistry::new();
        let result = registry.register("", |config| {
            Ok(Box::new(MseLoss::from_config(config)?))
        });
        assert!(matches!(result, Err(LossBoxError::InvalidConfig { .. })));
    }

    #[test]
    fn test_late_registration_visible_to_subsequent_builds() -> Result<(), LossBoxError> {
        let registry = builtin_registry();
        let _ = registry.build(&Config::new(MseLoss::ID))?;

        registry.register("mse_alias", |config| {
            Ok(Box::new(MseLoss::from_config(config)?))
        })?;
        let loss = registry.build(&Config::new("mse_alias"))?;
        assert_eq!(loss.name(), MseLoss::ID);
        Ok(())
    }

    #[test]
    fn test_names_and_clear() {
        let registry = builtin_registry();
        assert_eq!(
            registry.names(),
            vec![
                "l1".to_string(),
                "mse".to_string(),
                "weighted_squared_error".to_string()
            ]
        );
        registry.clear();
        assert!(registry.names().is_empty());
        assert!(!registry.contains(MseLoss::ID));
    }

    #[test]
    fn test_end_to_end_tutorial_flow() -> Result<(), LossBoxError> {
        let registry = builtin_registry();
        let config = Config::from_json_str(
            r#"{"name": "weighted_squared_error", "alpha": 5}"#,
        )?;
        let loss = registry.build(&config)?;
        let value = loss.evaluate(&[0.2, 0.8], &[0.0, 1.0])?;
        assert_relative_eq!(value, 0.4f32, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_concurrent_builds_share_registry() {
        let registry = std::sync::Arc::new(builtin_registry());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let registry = std::sync::Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                let config = Config::new(WeightedSquaredError::ID).with("alpha", 5);
                let loss = registry.build(&config).expect("build failed");
                loss.evaluate(&[0.2, 0.8], &[0.0, 1.0]).expect("evaluate failed")
            }));
        }
        for handle in handles {
            let value = handle.join().expect("thread panicked");
            assert_relative_eq!(value, 0.4f32, epsilon = 1e-6);
        }
    }
}
