//! Backoffice configuration.
//!
//! Every section and field is optional in TOML; omitted values fall back to
//! their defaults:
//!
//! ```toml
//! [store]
//! simulated_latency_ms = 0
//! seed = true
//!
//! [scoring]
//! upper_bound = 2000.0
//!
//! [cache]
//! max_capacity = 1000
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cache::DEFAULT_MAX_CAPACITY;
use crate::mock::SimulatedLatency;
use crate::project::adapters::DEFAULT_UPPER_BOUND;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The TOML text is malformed or has wrongly typed values.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The scoring upper bound is not a positive finite number.
    #[error("scoring upper bound must be positive and finite, got {0}")]
    InvalidUpperBound(f64),
    /// The cache cannot hold any entry.
    #[error("cache capacity must be at least 1")]
    ZeroCacheCapacity,
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackofficeConfig {
    /// In-memory store settings.
    pub store: StoreConfig,
    /// Project scoring settings.
    pub scoring: ScoringConfig,
    /// Query cache settings.
    pub cache: CacheConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// In-memory store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Delay applied to every store call, in milliseconds.
    pub simulated_latency_ms: u64,
    /// Whether the store starts with the fixture users, tasks and projects.
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            seed: true,
        }
    }
}

impl StoreConfig {
    /// Returns the configured latency.
    #[must_use]
    pub const fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.simulated_latency_ms)
    }
}

/// Project scoring settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Exclusive upper bound of run scores.
    pub upper_bound: f64,
    /// Fixed random seed; scores are not reproducible when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
            rng_seed: None,
        }
    }
}

/// Query cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached reads.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directives, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl BackofficeConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, or a validation
    /// error for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file exists but cannot be read,
    /// or the errors of [`Self::from_toml_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_string(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error(std::io::Error::other("path must include a file name")))?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        match dir.read_to_string(file_name) {
            Ok(text) => {
                debug!(%path, "configuration loaded");
                Self::from_toml_str(&text)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(%path, "configuration file not found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(io_error(err)),
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUpperBound`] or
    /// [`ConfigError::ZeroCacheCapacity`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bound = self.scoring.upper_bound;
        if !(bound.is_finite() && bound > 0.0) {
            return Err(ConfigError::InvalidUpperBound(bound));
        }
        if self.cache.max_capacity == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}
