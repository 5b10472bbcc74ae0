use serde::Deserialize;
use thiserror::Error;
use tsp_core::MAX_CITIES;

/// Environment variable overriding [`ServiceConfig::max_cities`].
pub const MAX_CITIES_ENV: &str = "TSP_MAX_CITIES";

/// Default request size cap. The DP table at this size holds
/// `15 * 2^14` states and solves in well under a second.
pub const DEFAULT_MAX_CITIES: usize = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_cities must be between 1 and {limit}, got {value}")]
    MaxCitiesOutOfRange { value: usize, limit: usize },
    #[error("{var}={value:?} is not a city count")]
    Env { var: &'static str, value: String },
    #[error("invalid service config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Policy owned by the request layer. The solver itself never sees it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Largest matrix dimension accepted for solving.
    pub max_cities: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
        }
    }
}

impl ServiceConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overridden by `TSP_MAX_CITIES` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(MAX_CITIES_ENV) {
            config.max_cities = value.trim().parse().map_err(|_| ConfigError::Env {
                var: MAX_CITIES_ENV,
                value,
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cities == 0 || self.max_cities > MAX_CITIES {
            return Err(ConfigError::MaxCitiesOutOfRange {
                value: self.max_cities,
                limit: MAX_CITIES,
            });
        }
        Ok(())
    }
}
