//! lossbox: a configuration-driven loss registry and factory.
//!
//! The crate decouples "what loss to use" (a string in a config document)
//! from "how to construct it" (a concrete constructor). Losses register
//! under string identifiers during an explicit initialization phase;
//! [`build_loss`] then resolves a [`Config`] carrying a `"name"` key into a
//! boxed [`nn::Loss`] instance owned by the caller.
//!
//! ```
//! use lossbox::{build_loss, register_builtin_losses, default_registry, Config};
//!
//! register_builtin_losses(default_registry()).unwrap();
//! let config = Config::new("weighted_squared_error").with("alpha", 5.0);
//! let loss = build_loss(&config).unwrap();
//! let value = loss.evaluate(&[0.2, 0.8], &[0.0, 1.0]).unwrap();
//! assert!((value - 0.4).abs() < 1e-6);
//! ```

pub mod config;
pub mod error;
pub mod nn;
pub mod registry;

pub use config::Config;
pub use error::LossBoxError;
pub use nn::losses::{L1Loss, MseLoss, Reduction, WeightedSquaredError};
pub use registry::{
    build_loss, default_registry, register_builtin_losses, register_loss, LossRegistry,
};
