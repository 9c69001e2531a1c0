//! Service configuration
//!
//! Layered from an optional TOML file plus `FOOTY_`-prefixed environment
//! variables. Every field has a default so the service can start against
//! artifact files in the working directory with no config file at all.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Paths to the startup artifacts.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Raw fixture table (CSV, one row per played match).
    #[serde(default = "default_matches_path")]
    pub matches_path: String,
    /// Serialized classifier artifact (JSON).
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Fuzzy-match acceptance threshold on a 0-100 scale. A candidate is
    /// accepted only if it scores strictly above this.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

fn default_matches_path() -> String {
    "Matches.csv".to_string()
}

fn default_model_path() -> String {
    "football_predictor.json".to_string()
}

fn default_min_score() -> f64 {
    80.0
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            matches_path: default_matches_path(),
            model_path: default_model_path(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (optional) layered with environment
    /// overrides, e.g. `FOOTY_DATA__MATCHES_PATH`.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FOOTY").separator("__"))
            .build()?
            .try_deserialize()
    }
}
