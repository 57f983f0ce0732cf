//! Piecewise-linear color scales.
//!
//! A [`ColorScale`] maps a metric value to a display color by linear RGB
//! interpolation across a fixed, ascending list of control points. Values
//! outside the control-point domain are clamped; missing values map to a
//! dedicated neutral color so "unknown" is visually distinct from "zero".

mod piecewise;

pub use piecewise::{ColorScale, ColorStop};
