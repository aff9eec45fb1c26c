// src/config.rs
// Plain key/value description of which loss to build and with what
// hyperparameters.

use crate::error::LossBoxError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key selecting which registered constructor a [`Config`] targets.
pub const NAME_KEY: &str = "name";

/// An immutable string-keyed mapping describing a component to build.
///
/// Values are arbitrary JSON values (numbers, strings, booleans, nested
/// mappings). The reserved `"name"` key identifies the registered
/// constructor; all other keys are component-specific hyperparameters.
///
/// # Example
/// ```
/// use lossbox::Config;
///
/// let config = Config::new("weighted_squared_error").with("alpha", 5.0);
/// assert_eq!(config.name().unwrap(), "weighted_squared_error");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    entries: Map<String, Value>,
}

impl Config {
    /// Creates a config targeting the loss registered under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let mut entries = Map::new();
        entries.insert(NAME_KEY.to_string(), Value::String(name.into()));
        Config { entries }
    }

    /// Creates a config with no `"name"` key. Useful for direct
    /// construction via a loss's own `from_config` without going through
    /// the registry.
    pub fn empty() -> Self {
        Config {
            entries: Map::new(),
        }
    }

    /// Parses a config from a JSON document, e.g.
    /// `{"name": "weighted_squared_error", "alpha": 5}`.
    pub fn from_json_str(json: &str) -> Result<Self, LossBoxError> {
        serde_json::from_str(json).map_err(|e| LossBoxError::ConfigParse(e.to_string()))
    }

    /// Builder-style insertion of a hyperparameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Returns the registered identifier this config targets.
    ///
    /// # Errors
    /// `InvalidConfig` if the `"name"` key is absent or not a string.
    pub fn name(&self) -> Result<&str, LossBoxError> {
        match self.entries.get(NAME_KEY) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(LossBoxError::invalid_config(
                NAME_KEY,
                format!("expected a string, got {other}"),
            )),
            None => Err(LossBoxError::invalid_config(
                NAME_KEY,
                "required key is missing",
            )),
        }
    }

    /// Raw access to a field, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the field `key` as an `f32`.
    ///
    /// # Errors
    /// `InvalidConfig` naming `key` if it is absent or not numeric.
    pub fn require_f32(&self, key: &str) -> Result<f32, LossBoxError> {
        match self.entries.get(key) {
            Some(value) => value
                .as_f64()
                .map(|v| v as f32)
                .ok_or_else(|| {
                    LossBoxError::invalid_config(key, format!("expected a number, got {value}"))
                }),
            None => Err(LossBoxError::invalid_config(
                key,
                "required key is missing",
            )),
        }
    }

    /// Returns the field `key` as a string slice, or `None` if absent.
    ///
    /// # Errors
    /// `InvalidConfig` naming `key` if it is present but not a string.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, LossBoxError> {
        match self.entries.get(key) {
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(LossBoxError::invalid_config(
                key,
                format!("expected a string, got {other}"),
            )),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
