// src/registry.rs
// Name-keyed table of loss constructors plus the `build` factory that
// resolves a Config into a constructed instance.

use crate::config::Config;
use crate::error::LossBoxError;
use crate::nn::loss::{BuildFn, Loss};
use crate::nn::losses::{L1Loss, MseLoss, WeightedSquaredError};
use log::debug;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

/// A table mapping string identifiers to loss constructors.
///
/// Registration is expected to happen during a single-threaded
/// initialization phase, before builds start; late registration is still
/// safe because the table sits behind a `RwLock` (writes on `register`,
/// reads on the lookup step of `build`). Constructors run outside the
/// lock.
///
/// A process-wide default instance backs [`register_loss`] and
/// [`build_loss`]; standalone instances exist for embedding and for test
/// isolation.
#[derive(Debug, Default)]
pub struct LossRegistry {
    table: RwLock<HashMap<String, BuildFn>>,
}

impl LossRegistry {
    pub fn new() -> Self {
        LossRegistry {
            table: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `build` under `id`.
    ///
    /// Duplicate identifiers are rejected rather than overwritten:
    /// registration happens in an explicit initialization phase, so a
    /// collision is a programmer error worth surfacing, not an ordering
    /// accident to paper over.
    ///
    /// # Errors
    /// `InvalidConfig` if `id` is empty, `DuplicateRegistration` if `id`
    /// is already present.
    pub fn register(&self, id: &str, build: BuildFn) -> Result<(), LossBoxError> {
        if id.is_empty() {
            return Err(LossBoxError::invalid_config(
                "name",
                "registration identifier must be non-empty",
            ));
        }
        let mut table = self
            .table
            .write()
            .map_err(|e| LossBoxError::Lock(e.to_string()))?;
        if table.contains_key(id) {
            return Err(LossBoxError::DuplicateRegistration {
                name: id.to_string(),
            });
        }
        table.insert(id.to_string(), build);
        debug!("registered loss '{id}'");
        Ok(())
    }

    /// Builds the loss named by `config["name"]`.
    ///
    /// # Errors
    /// `InvalidConfig` if the `"name"` key is absent, `UnknownLoss` if no
    /// constructor is registered under it, plus whatever the constructor's
    /// own config validation reports.
    pub fn build(&self, config: &Config) -> Result<Box<dyn Loss>, LossBoxError> {
        let name = config.name()?;
        let build = {
            let table = self
                .table
                .read()
                .map_err(|e| LossBoxError::Lock(e.to_string()))?;
            match table.get(name) {
                Some(build) => *build,
                None => {
                    let mut registered: Vec<String> = table.keys().cloned().collect();
                    registered.sort();
                    return Err(LossBoxError::UnknownLoss {
                        name: name.to_string(),
                        registered,
                    });
                }
            }
        };
        let instance = build(config)?;
        debug!("built loss '{name}'");
        Ok(instance)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.table
            .read()
            .map(|table| table.contains_key(id))
            .unwrap_or(false)
    }

    /// Registered identifiers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .table
            .read()
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Empties the table. Intended for test isolation only; production
    /// code registers once at startup and never clears.
    pub fn clear(&self) {
        if let Ok(mut table) = self.table.write() {
            table.clear();
        }
    }
}

static DEFAULT_REGISTRY: LazyLock<LossRegistry> = LazyLock::new(LossRegistry::new);

/// The process-wide registry backing [`register_loss`] and [`build_loss`].
pub fn default_registry() -> &'static LossRegistry {
    &DEFAULT_REGISTRY
}

/// Registers `build` under `id` in the process-wide registry.
pub fn register_loss(id: &str, build: BuildFn) -> Result<(), LossBoxError> {
    DEFAULT_REGISTRY.register(id, build)
}

/// Builds a loss from `config` via the process-wide registry.
pub fn build_loss(config: &Config) -> Result<Box<dyn Loss>, LossBoxError> {
    DEFAULT_REGISTRY.build(config)
}

/// Registers the losses shipped with the crate into `registry`.
///
/// Called explicitly by the embedding application during startup; nothing
/// registers itself as an import-time side effect.
pub fn register_builtin_losses(registry: &LossRegistry) -> Result<(), LossBoxError> {
    registry.register(MseLoss::ID, |config| {
        Ok(Box::new(MseLoss::from_config(config)?))
    })?;
    registry.register(L1Loss::ID, |config| {
        Ok(Box::new(L1Loss::from_config(config)?))
    })?;
    registry.register(WeightedSquaredError::ID, |config| {
        Ok(Box::new(WeightedSquaredError::from_config(config)?))
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
