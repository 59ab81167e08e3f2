//! Sampling run configuration.

use super::error::ConfigError;

/// Maximum number of draws per sample.
pub const MAX_SAMPLE_SIZE: usize = 10_000;

/// Maximum number of samples per run.
pub const MAX_NUM_SAMPLES: usize = 100_000;

/// Validated sizes of one sampling run.
///
/// Use [`SimulationConfig::builder`] or [`SimulationConfig::new`] to
/// construct instances; both validate.
///
/// # Examples
///
/// ```rust
/// use distlab_sampling::simulation::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .sample_size(30)
///     .num_samples(1000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sample_size(), 30);
/// assert_eq!(config.num_samples(), 1000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Draws averaged into each sample mean.
    sample_size: usize,
    /// Number of sample means.
    num_samples: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates and validates an unseeded configuration.
    ///
    /// # Errors
    ///
    /// See [`SimulationConfig::validate`].
    pub fn new(sample_size: usize, num_samples: usize) -> Result<Self, ConfigError> {
        let config = Self {
            sample_size,
            num_samples,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of draws per sample.
    #[inline]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns the number of samples.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `sample_size` is 0 or greater than [`MAX_SAMPLE_SIZE`]
    /// - `num_samples` is 0 or greater than [`MAX_NUM_SAMPLES`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 || self.sample_size > MAX_SAMPLE_SIZE {
            return Err(ConfigError::InvalidSampleSize(self.sample_size));
        }
        if self.num_samples == 0 || self.num_samples > MAX_NUM_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.num_samples));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    sample_size: Option<usize>,
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of draws per sample, in `[1, 10_000]`.
    #[inline]
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    /// Sets the number of samples, in `[1, 100_000]`.
    #[inline]
    pub fn num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = Some(num_samples);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a size is missing or out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let sample_size = self.sample_size.ok_or(ConfigError::InvalidParameter {
            name: "sample_size",
            value: "must be specified".to_string(),
        })?;
        let num_samples = self.num_samples.ok_or(ConfigError::InvalidParameter {
            name: "num_samples",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            sample_size,
            num_samples,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SimulationConfig::builder()
            .sample_size(200)
            .num_samples(5000)
            .build()
            .unwrap();
        assert_eq!(config.sample_size(), 200);
        assert_eq!(config.num_samples(), 5000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_bounds_inclusive() {
        assert!(SimulationConfig::new(1, 1).is_ok());
        assert!(SimulationConfig::new(MAX_SAMPLE_SIZE, MAX_NUM_SAMPLES).is_ok());
    }

    #[test]
    fn test_config_invalid_zero_sizes() {
        assert_eq!(
            SimulationConfig::new(0, 10).unwrap_err(),
            ConfigError::InvalidSampleSize(0)
        );
        assert_eq!(
            SimulationConfig::new(10, 0).unwrap_err(),
            ConfigError::InvalidSampleCount(0)
        );
    }

    #[test]
    fn test_config_too_large() {
        assert!(matches!(
            SimulationConfig::new(MAX_SAMPLE_SIZE + 1, 10),
            Err(ConfigError::InvalidSampleSize(_))
        ));
        assert!(matches!(
            SimulationConfig::new(10, MAX_NUM_SAMPLES + 1),
            Err(ConfigError::InvalidSampleCount(_))
        ));
    }

    #[test]
    fn test_config_missing_sizes() {
        let result = SimulationConfig::builder().num_samples(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "sample_size", .. })
        ));

        let result = SimulationConfig::builder().sample_size(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "num_samples", .. })
        ));
    }

    #[test]
    fn test_maybe_seed() {
        let config = SimulationConfig::builder()
            .sample_size(5)
            .num_samples(5)
            .seed(1)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }
}
