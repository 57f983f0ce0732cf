//! Piecewise-linear interpolation over color control points.

use crate::error::{CoreError, CoreResult};
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// A single control point: a metric value anchored to a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Metric value of the anchor.
    pub value: f64,
    /// Color at the anchor.
    pub color: Color,
}

impl ColorStop {
    /// Creates a new control point.
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// A piecewise-linear color scale over fixed control points.
///
/// The scale clamps inputs to its control-point domain and interpolates
/// linearly per RGB channel between the two bracketing stops. A value
/// that coincides with a stop returns that stop's color exactly. Missing
/// input maps to a dedicated neutral color.
///
/// # Example
///
/// ```rust
/// use tessera_core::scale::ColorScale;
///
/// let scale = ColorScale::price_change();
/// let up = scale.color_for(Some(3.0));
/// let flat = scale.color_for(Some(0.0));
/// let unknown = scale.color_for(None);
/// assert_ne!(unknown, flat);
/// assert_ne!(up, flat);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
    missing: Color,
}

impl ColorScale {
    /// Creates a new scale from control points.
    ///
    /// # Arguments
    ///
    /// * `stops` - Control points, values strictly ascending
    /// * `missing` - Color used for missing input
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 stops, or if stop
    /// values are non-finite or not strictly increasing.
    pub fn new(stops: Vec<ColorStop>, missing: Color) -> CoreResult<Self> {
        if stops.len() < 2 {
            return Err(CoreError::InsufficientStops {
                needed: 2,
                got: stops.len(),
            });
        }
        if stops.iter().any(|s| !s.value.is_finite()) {
            return Err(CoreError::invalid_scale("stop values must be finite"));
        }
        for i in 1..stops.len() {
            if stops[i].value <= stops[i - 1].value {
                return Err(CoreError::invalid_scale(
                    "stop values must be strictly increasing",
                ));
            }
        }

        Ok(Self { stops, missing })
    }

    /// The built-in scale for percentage price-change metrics.
    ///
    /// Deep red through neutral gray to deep green over roughly a
    /// +/-6 percentage-point day.
    #[must_use]
    pub fn price_change() -> Self {
        Self::new(
            vec![
                ColorStop::new(-6.0, Color::from_hex(0x7f1d1d)),
                ColorStop::new(-3.0, Color::from_hex(0xdc2626)),
                ColorStop::new(0.0, Color::from_hex(0x9ca3af)),
                ColorStop::new(3.0, Color::from_hex(0x16a34a)),
                ColorStop::new(6.0, Color::from_hex(0x14532d)),
            ],
            Color::from_hex(0x4b5563),
        )
        .expect("built-in price-change stops are valid")
    }

    /// The built-in scale for dimensionless momentum scores.
    ///
    /// Burnt orange through light gray to deep blue over a +/-2.5
    /// z-score range.
    #[must_use]
    pub fn momentum() -> Self {
        Self::new(
            vec![
                ColorStop::new(-2.5, Color::from_hex(0x9a3412)),
                ColorStop::new(-1.0, Color::from_hex(0xfdba74)),
                ColorStop::new(0.0, Color::from_hex(0xe5e7eb)),
                ColorStop::new(1.0, Color::from_hex(0x93c5fd)),
                ColorStop::new(2.5, Color::from_hex(0x1d4ed8)),
            ],
            Color::from_hex(0x4b5563),
        )
        .expect("built-in momentum stops are valid")
    }

    /// The control points of this scale.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// The color returned for missing input.
    #[must_use]
    pub fn missing_color(&self) -> Color {
        self.missing
    }

    /// The lowest control-point value.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.stops[0].value
    }

    /// The highest control-point value.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.stops[self.stops.len() - 1].value
    }

    /// Finds the index i such that stops[i].value <= v < stops[i+1].value.
    fn find_segment(&self, v: f64) -> usize {
        match self.stops.binary_search_by(|probe| {
            probe
                .value
                .partial_cmp(&v)
                .unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(self.stops.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.stops.len() - 2),
        }
    }

    /// Maps a metric value to a display color.
    ///
    /// Identical inputs always yield the identical output color.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Color {
        let Some(v) = value.filter(|v| v.is_finite()) else {
            return self.missing;
        };

        let v = v.clamp(self.min_value(), self.max_value());
        let i = self.find_segment(v);

        let lo = self.stops[i];
        let hi = self.stops[i + 1];

        if v == lo.value {
            return lo.color;
        }
        if v == hi.value {
            return hi.color;
        }

        let t = (v - lo.value) / (hi.value - lo.value);
        lo.color.lerp(hi.color, t)
    }
}
