//! Construction-time configuration.

use core::fmt;

/// Bucket count of a freshly constructed (or cleared) set.
pub const DEFAULT_BUCKETS: usize = 7;

/// Load factor above which an insertion grows the bucket array.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A set needs at least one bucket.
    ZeroBuckets,
    /// The maximum load factor must be finite and strictly positive.
    InvalidLoadFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBuckets => f.write_str("initial bucket count must be at least 1"),
            ConfigError::InvalidLoadFactor(lf) => {
                write!(f, "max load factor must be finite and > 0, got {lf}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Initial bucket count and growth threshold of a `ChainedSet`.
///
/// `clear()` returns a set to `initial_buckets`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetConfig {
    initial_buckets: usize,
    max_load_factor: f64,
}

impl SetConfig {
    pub fn new(initial_buckets: usize, max_load_factor: f64) -> Result<Self, ConfigError> {
        Self::default()
            .with_initial_buckets(initial_buckets)?
            .with_max_load_factor(max_load_factor)
    }

    pub fn with_initial_buckets(mut self, buckets: usize) -> Result<Self, ConfigError> {
        if buckets == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        self.initial_buckets = buckets;
        Ok(self)
    }

    pub fn with_max_load_factor(mut self, lf: f64) -> Result<Self, ConfigError> {
        if !lf.is_finite() || lf <= 0.0 {
            return Err(ConfigError::InvalidLoadFactor(lf));
        }
        self.max_load_factor = lf;
        Ok(self)
    }

    pub fn initial_buckets(&self) -> usize {
        self.initial_buckets
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_buckets: DEFAULT_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
