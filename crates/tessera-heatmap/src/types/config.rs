//! Configuration for heatmap layout computation.

use crate::error::{HeatmapError, HeatmapResult};
use serde::{Deserialize, Serialize};

/// Configuration for heatmap layout computation.
///
/// The sizing constants are tuned by inspection against real portfolios;
/// they are kept as named, overridable fields rather than inlined magic
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Weight of the move-magnitude term in the tile multiplier.
    /// Positive: any large move, up or down, earns a bigger tile.
    pub move_weight: f64,

    /// Additional multiplier term applied to the downside magnitude.
    /// Non-positive: a -3% day renders strictly smaller than a +3% day.
    pub direction_bias: f64,

    /// Lower bound for the tile multiplier.
    pub multiplier_floor: f64,

    /// Header reservation as a fraction of a sector's tile total (overview).
    pub header_fraction: f64,

    /// Header reservation fraction while drilled into a single sector.
    /// Smaller than `header_fraction`: the viewer already knows where
    /// they are.
    pub drill_header_fraction: f64,

    /// Minimum header reservation, keeping labels legible for sectors
    /// consisting of one tiny holding.
    pub header_minimum: f64,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            move_weight: 0.35,
            direction_bias: -0.25,
            multiplier_floor: 0.55,
            header_fraction: 0.08,
            drill_header_fraction: 0.035,
            header_minimum: 4.0,
            parallel: true,
            parallel_threshold: 500, // Use parallel if >500 holdings
        }
    }
}

impl LayoutConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the move-magnitude weight.
    #[must_use]
    pub fn with_move_weight(mut self, weight: f64) -> Self {
        self.move_weight = weight;
        self
    }

    /// Sets the downside bias.
    #[must_use]
    pub fn with_direction_bias(mut self, bias: f64) -> Self {
        self.direction_bias = bias;
        self
    }

    /// Sets the multiplier floor.
    #[must_use]
    pub fn with_multiplier_floor(mut self, floor: f64) -> Self {
        self.multiplier_floor = floor;
        self
    }

    /// Sets the overview header fraction.
    #[must_use]
    pub fn with_header_fraction(mut self, fraction: f64) -> Self {
        self.header_fraction = fraction;
        self
    }

    /// Sets the drill-in header fraction.
    #[must_use]
    pub fn with_drill_header_fraction(mut self, fraction: f64) -> Self {
        self.drill_header_fraction = fraction;
        self
    }

    /// Sets the minimum header reservation.
    #[must_use]
    pub fn with_header_minimum(mut self, minimum: f64) -> Self {
        self.header_minimum = minimum;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the move weight is negative, the direction
    /// bias is positive, the multiplier floor is not positive, a header
    /// fraction is outside `[0, 1)`, or any value is non-finite.
    pub fn validate(&self) -> HeatmapResult<()> {
        let finite = [
            self.move_weight,
            self.direction_bias,
            self.multiplier_floor,
            self.header_fraction,
            self.drill_header_fraction,
            self.header_minimum,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(HeatmapError::invalid_config("values must be finite"));
        }
        if self.move_weight < 0.0 {
            return Err(HeatmapError::invalid_config("move_weight must be >= 0"));
        }
        if self.direction_bias > 0.0 {
            return Err(HeatmapError::invalid_config("direction_bias must be <= 0"));
        }
        if self.multiplier_floor <= 0.0 {
            return Err(HeatmapError::invalid_config("multiplier_floor must be > 0"));
        }
        for fraction in [self.header_fraction, self.drill_header_fraction] {
            if !(0.0..1.0).contains(&fraction) {
                return Err(HeatmapError::invalid_config(
                    "header fractions must be in [0, 1)",
                ));
            }
        }
        if self.header_minimum < 0.0 {
            return Err(HeatmapError::invalid_config("header_minimum must be >= 0"));
        }
        Ok(())
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = LayoutConfig::default();
        assert!(config.move_weight > 0.0);
        assert!(config.direction_bias <= 0.0);
        assert!(config.drill_header_fraction < config.header_fraction);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_move_weight(0.5)
            .with_direction_bias(-0.1)
            .with_header_fraction(0.1)
            .with_threshold(50);

        assert_eq!(config.move_weight, 0.5);
        assert_eq!(config.direction_bias, -0.1);
        assert_eq!(config.header_fraction, 0.1);
        assert_eq!(config.parallel_threshold, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(LayoutConfig::new()
            .with_move_weight(-1.0)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_direction_bias(0.2)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_multiplier_floor(0.0)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_header_fraction(1.5)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_header_minimum(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_should_parallelize() {
        let config = LayoutConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_serde() {
        let config = LayoutConfig::new().with_move_weight(0.4);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
