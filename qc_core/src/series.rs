//! # Measurement Series Analysis
//!
//! Reduces a raw force/displacement series from a tensile test into
//! summary statistics: ultimate tensile strength and elongation at break.
//!
//! The raw series is converted point-wise to engineering stress and
//! strain, then each derived series is reduced to its own maximum. UTS
//! and elongation are independent maxima over the whole series, not
//! values taken at the same sample index. No smoothing or outlier
//! filtering is applied; noisy machine data is reduced as-is and any
//! pre-cleaning is the caller's responsibility.
//!
//! ## Example
//!
//! ```rust
//! use qc_core::series::{summarize, TensileGeometry};
//!
//! let geometry = TensileGeometry {
//!     diameter_mm: 10.0,
//!     gauge_length_mm: 50.0,
//! };
//! let samples = [(1000.0, 0.5), (4000.0, 2.0), (3500.0, 6.0)];
//! let summary = summarize(&samples, &geometry).unwrap();
//! assert_eq!(summary.elongation_percent, 12.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::conversions::{strain_percent, stress};
use crate::errors::{QcError, QcResult};
use crate::units::{Millimeters, Newtons};

/// Specimen geometry for a round tensile bar.
///
/// ## JSON Example
///
/// ```json
/// { "diameter_mm": 10.0, "gauge_length_mm": 50.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensileGeometry {
    /// Specimen diameter in millimeters
    pub diameter_mm: f64,
    /// Original gauge length in millimeters
    pub gauge_length_mm: f64,
}

impl TensileGeometry {
    /// Validate geometry parameters.
    pub fn validate(&self) -> QcResult<()> {
        if self.diameter_mm <= 0.0 {
            return Err(QcError::invalid_geometry(
                "diameter_mm",
                self.diameter_mm.to_string(),
                "Diameter must be positive",
            ));
        }
        if self.gauge_length_mm <= 0.0 {
            return Err(QcError::invalid_geometry(
                "gauge_length_mm",
                self.gauge_length_mm.to_string(),
                "Gauge length must be positive",
            ));
        }
        Ok(())
    }
}

/// Summary statistics of a reduced tensile series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Peak engineering stress over the series (MPa)
    pub ultimate_stress_mpa: f64,
    /// Peak engineering strain over the series (percent)
    pub elongation_percent: f64,
}

/// Reduce a `(force_N, displacement_mm)` series to its summary.
///
/// Fails with `EmptySeries` on zero samples; a single sample is a valid
/// (if minimal) series whose summary is that sample's derived values.
pub fn summarize(samples: &[(f64, f64)], geometry: &TensileGeometry) -> QcResult<SeriesSummary> {
    geometry.validate()?;
    if samples.is_empty() {
        return Err(QcError::empty_series("tensile force/displacement data"));
    }

    let mut ultimate_stress_mpa = f64::NEG_INFINITY;
    let mut elongation_percent = f64::NEG_INFINITY;

    for &(force_n, displacement_mm) in samples {
        let s = stress(Newtons(force_n), Millimeters(geometry.diameter_mm))?;
        let e = strain_percent(
            Millimeters(displacement_mm),
            Millimeters(geometry.gauge_length_mm),
        )?;
        ultimate_stress_mpa = ultimate_stress_mpa.max(s.0);
        elongation_percent = elongation_percent.max(e.0);
    }

    Ok(SeriesSummary {
        ultimate_stress_mpa,
        elongation_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> TensileGeometry {
        TensileGeometry {
            diameter_mm: 10.0,
            gauge_length_mm: 50.0,
        }
    }

    #[test]
    fn test_single_point_series() {
        // A = π·25 ≈ 78.54 mm²; 7854 N → 100 MPa, 5 mm / 50 mm → 10%
        let summary = summarize(&[(7853.98, 5.0)], &geometry()).unwrap();
        assert!((summary.ultimate_stress_mpa - 100.0).abs() < 0.01);
        assert!((summary.elongation_percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series() {
        let err = summarize(&[], &geometry()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_SERIES");
    }

    #[test]
    fn test_maxima_are_independent() {
        // Peak force at the second sample, peak displacement at the third:
        // UTS and elongation come from different samples.
        let samples = [(1000.0, 0.5), (5000.0, 2.0), (4200.0, 6.5)];
        let summary = summarize(&samples, &geometry()).unwrap();

        let area = std::f64::consts::PI * 25.0;
        assert!((summary.ultimate_stress_mpa - 5000.0 / area).abs() < 1e-9);
        assert!((summary.elongation_percent - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_data_not_rejected() {
        // Jittery force readings, including a dip below zero, still reduce.
        let samples = [(100.0, 0.1), (-3.0, 0.2), (104.5, 0.3), (99.8, 0.4)];
        let summary = summarize(&samples, &geometry()).unwrap();
        assert!(summary.ultimate_stress_mpa > 0.0);
    }

    #[test]
    fn test_invalid_geometry() {
        let bad = TensileGeometry {
            diameter_mm: 0.0,
            gauge_length_mm: 50.0,
        };
        let err = summarize(&[(100.0, 0.1)], &bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");

        let bad = TensileGeometry {
            diameter_mm: 10.0,
            gauge_length_mm: -1.0,
        };
        assert!(summarize(&[(100.0, 0.1)], &bad).is_err());
    }

    #[test]
    fn test_summary_serialization() {
        let summary = summarize(&[(7853.98, 5.0)], &geometry()).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let roundtrip: SeriesSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
