//! # Unit Conversions
//!
//! Pure conversions from raw test-machine readings to engineering
//! quantities: stress from force over a round cross-section, strain from
//! crosshead displacement, and hardness values between scales.
//!
//! ## Hardness Conversion
//!
//! Scale-to-scale hardness conversion has no closed-form physics; the
//! tables in ASTM E140 are empirical fits. The converter therefore stores
//! its formulas as data (`PiecewiseLinear`), so coefficients and the
//! breakpoint can be recalibrated without touching the algorithm.
//!
//! ## Example
//!
//! ```rust
//! use qc_core::conversions::{stress, strain_percent};
//! use qc_core::units::{Millimeters, Newtons};
//!
//! let uts = stress(Newtons(66_759.0), Millimeters(10.0)).unwrap();
//! assert!((uts.0 - 850.0).abs() < 1.0);
//!
//! let elong = strain_percent(Millimeters(6.0), Millimeters(50.0)).unwrap();
//! assert_eq!(elong.0, 12.0);
//! ```

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{QcError, QcResult};
use crate::units::{Megapascals, Millimeters, Newtons, Percent};

/// Engineering stress from axial force on a round specimen.
///
/// `stress = F / (π·(d/2)²)`, in MPa when force is in N and diameter in mm.
pub fn stress(force: Newtons, diameter: Millimeters) -> QcResult<Megapascals> {
    if diameter.0 <= 0.0 {
        return Err(QcError::invalid_geometry(
            "diameter_mm",
            diameter.0.to_string(),
            "Diameter must be positive",
        ));
    }
    let area_mm2 = PI * (diameter.0 / 2.0).powi(2);
    Ok(Megapascals(force.0 / area_mm2))
}

/// Engineering strain in percent from extension over the gauge length.
pub fn strain_percent(displacement: Millimeters, gauge_length: Millimeters) -> QcResult<Percent> {
    if gauge_length.0 <= 0.0 {
        return Err(QcError::invalid_geometry(
            "gauge_length_mm",
            gauge_length.0.to_string(),
            "Gauge length must be positive",
        ));
    }
    Ok(Percent(displacement.0 / gauge_length.0 * 100.0))
}

/// Hardness scales known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardnessScale {
    /// Rockwell C
    #[serde(rename = "HRC")]
    Hrc,
    /// Rockwell B
    #[serde(rename = "HRB")]
    Hrb,
    /// Brinell
    #[serde(rename = "HB")]
    Hb,
    /// Vickers
    #[serde(rename = "HV")]
    Hv,
}

impl HardnessScale {
    /// All hardness scale variants for UI selection
    pub const ALL: [HardnessScale; 4] = [
        HardnessScale::Hrc,
        HardnessScale::Hrb,
        HardnessScale::Hb,
        HardnessScale::Hv,
    ];

    /// Get the scale symbol (e.g., "HRC")
    pub fn symbol(&self) -> &'static str {
        match self {
            HardnessScale::Hrc => "HRC",
            HardnessScale::Hrb => "HRB",
            HardnessScale::Hb => "HB",
            HardnessScale::Hv => "HV",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HardnessScale::Hrc => "Rockwell C",
            HardnessScale::Hrb => "Rockwell B",
            HardnessScale::Hb => "Brinell",
            HardnessScale::Hv => "Vickers",
        }
    }
}

impl std::fmt::Display for HardnessScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Coefficients of a linear segment: `slope · v + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    pub slope: f64,
    pub intercept: f64,
}

impl Linear {
    /// Evaluate the segment at `v`
    pub fn apply(&self, v: f64) -> f64 {
        self.slope * v + self.intercept
    }
}

/// A two-segment piecewise-linear conversion formula.
///
/// Inputs below `breakpoint` use the `below` segment, all others the
/// `above` segment. Calibration data, not physics: the default HRC→HB
/// coefficients are an empirical approximation and should be replaced
/// when a better fit is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseLinear {
    pub breakpoint: f64,
    pub below: Linear,
    pub above: Linear,
}

impl PiecewiseLinear {
    /// Evaluate the formula at `v`
    pub fn convert(&self, v: f64) -> f64 {
        if v < self.breakpoint {
            self.below.apply(v)
        } else {
            self.above.apply(v)
        }
    }
}

/// Approximate HRC→HB formula (empirical, low-HRC readings track a
/// shallower line than the mid-range fit)
pub const HRC_TO_HB: PiecewiseLinear = PiecewiseLinear {
    breakpoint: 20.0,
    below: Linear {
        slope: 10.0,
        intercept: 0.0,
    },
    above: Linear {
        slope: 12.0,
        intercept: -50.0,
    },
};

/// Hardness scale converter backed by a formula table.
///
/// The table is keyed by `(from, to)` scale pair. Pairs without an entry
/// fail with `UnsupportedConversion`; the converter never extrapolates
/// across an unknown pair.
#[derive(Debug, Clone)]
pub struct HardnessConverter {
    table: HashMap<(HardnessScale, HardnessScale), PiecewiseLinear>,
}

impl HardnessConverter {
    /// Create an empty converter (no conversions supported)
    pub fn empty() -> Self {
        HardnessConverter {
            table: HashMap::new(),
        }
    }

    /// Register a formula for a scale pair, replacing any existing entry
    pub fn with_formula(
        mut self,
        from: HardnessScale,
        to: HardnessScale,
        formula: PiecewiseLinear,
    ) -> Self {
        self.table.insert((from, to), formula);
        self
    }

    /// Convert `value` from one scale to another.
    pub fn convert(&self, value: f64, from: HardnessScale, to: HardnessScale) -> QcResult<f64> {
        match self.table.get(&(from, to)) {
            Some(formula) => Ok(formula.convert(value)),
            None => Err(QcError::unsupported_conversion(from.symbol(), to.symbol())),
        }
    }

    /// Check whether a scale pair has a registered formula
    pub fn supports(&self, from: HardnessScale, to: HardnessScale) -> bool {
        self.table.contains_key(&(from, to))
    }
}

impl Default for HardnessConverter {
    fn default() -> Self {
        HardnessConverter::empty().with_formula(HardnessScale::Hrc, HardnessScale::Hb, HRC_TO_HB)
    }
}

/// Convert a hardness value using the default formula table.
pub fn hardness_convert(value: f64, from: HardnessScale, to: HardnessScale) -> QcResult<f64> {
    HardnessConverter::default().convert(value, from, to)
}

/// Average a set of hardness readings taken across a specimen.
pub fn average_readings(readings: &[f64]) -> QcResult<f64> {
    if readings.is_empty() {
        return Err(QcError::empty_series("hardness readings"));
    }
    Ok(readings.iter().sum::<f64>() / readings.len() as f64)
}
