use lossbox::nn::Loss;
use lossbox::{
    build_loss, default_registry, register_builtin_losses, register_loss, Config, LossBoxError,
};

// A user-defined loss: squared error scaled by a margin hyperparameter,
// registered alongside the builtins and selected purely by config.
#[derive(Debug)]
struct HingeishLoss {
    margin: f32,
}

impl HingeishLoss {
    fn from_config(config: &Config) -> Result<Self, LossBoxError> {
        Ok(HingeishLoss {
            margin: config.require_f32("margin")?,
        })
    }
}

impl Loss for HingeishLoss {
    fn evaluate(&self, predicted: &[f32], target: &[f32]) -> Result<f32, LossBoxError> {
        if predicted.len() != target.len() {
            return Err(LossBoxError::ShapeMismatch {
                expected: target.len(),
                actual: predicted.len(),
                operation: "HingeishLoss evaluate".to_string(),
            });
        }
        let total: f32 = predicted
            .iter()
            .zip(target.iter())
            .map(|(p, t)| (self.margin - p * t).max(0.0))
            .sum();
        Ok(total)
    }

    fn name(&self) -> &'static str {
        "hingeish"
    }
}

fn main() -> Result<(), LossBoxError> {
    env_logger::init();

    // Explicit initialization phase: builtins first, then user losses.
    register_builtin_losses(default_registry())?;
    register_loss("hingeish", |config| {
        Ok(Box::new(HingeishLoss::from_config(config)?))
    })?;

    // Configs would normally come from a loaded document.
    for json in [
        r#"{"name": "weighted_squared_error", "alpha": 5}"#,
        r#"{"name": "mse", "reduction": "sum"}"#,
        r#"{"name": "hingeish", "margin": 1.0}"#,
    ] {
        let config = Config::from_json_str(json)?;
        let loss = build_loss(&config)?;
        let value = loss.evaluate(&[0.2, 0.8], &[0.0, 1.0])?;
        println!("{:<24} -> {value:.4}", loss.name());
    }

    // Misconfigurations surface as descriptive errors, not fallbacks.
    let err = build_loss(&Config::new("nonexistent")).unwrap_err();
    println!("expected failure: {err}");

    Ok(())
}
