//! # Error Types
//!
//! Structured error types for qc_core. Each variant carries enough context
//! to report the failure to an operator or handle it programmatically.
//!
//! ## Example
//!
//! ```rust
//! use qc_core::errors::{QcError, QcResult};
//!
//! fn validate_diameter(diameter_mm: f64) -> QcResult<()> {
//!     if diameter_mm <= 0.0 {
//!         return Err(QcError::invalid_geometry(
//!             "diameter_mm",
//!             diameter_mm.to_string(),
//!             "Diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for qc_core operations
pub type QcResult<T> = Result<T, QcError>;

/// Structured error type for the compliance engine.
///
/// Registry, geometry, conversion, and series errors are fatal to the call
/// that raised them. `InvalidMeasurement` is the exception: the evaluator
/// collects it per attribute and keeps going (see `compliance::evaluate`).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QcError {
    /// Material spec id not found in the registry
    #[error("Unknown material spec: {spec_id}")]
    UnknownSpec { spec_id: String },

    /// A spec id was registered twice
    #[error("Duplicate material spec: {spec_id}")]
    DuplicateSpec { spec_id: String },

    /// A chemical range in a spec is inverted (min > max)
    #[error("Invalid range for {symbol} in '{spec_id}': min {min} > max {max}")]
    InvalidRange {
        spec_id: String,
        symbol: String,
        min: f64,
        max: f64,
    },

    /// A geometric input (diameter, gauge length) is non-positive
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// No conversion formula registered for this hardness scale pair
    #[error("No conversion available from {from_scale} to {to_scale}")]
    UnsupportedConversion {
        from_scale: String,
        to_scale: String,
    },

    /// A series reduction was asked for zero data points
    #[error("Empty series: {context}")]
    EmptySeries { context: String },

    /// A measured value could not be read as a number
    #[error("Measurement for '{attribute}' is not a number: '{raw}'")]
    InvalidMeasurement { attribute: String, raw: String },
}

impl QcError {
    /// Create an UnknownSpec error
    pub fn unknown_spec(spec_id: impl Into<String>) -> Self {
        QcError::UnknownSpec {
            spec_id: spec_id.into(),
        }
    }

    /// Create a DuplicateSpec error
    pub fn duplicate_spec(spec_id: impl Into<String>) -> Self {
        QcError::DuplicateSpec {
            spec_id: spec_id.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedConversion error
    pub fn unsupported_conversion(
        from_scale: impl Into<String>,
        to_scale: impl Into<String>,
    ) -> Self {
        QcError::UnsupportedConversion {
            from_scale: from_scale.into(),
            to_scale: to_scale.into(),
        }
    }

    /// Create an EmptySeries error
    pub fn empty_series(context: impl Into<String>) -> Self {
        QcError::EmptySeries {
            context: context.into(),
        }
    }

    /// Create an InvalidMeasurement error
    pub fn invalid_measurement(attribute: impl Into<String>, raw: impl Into<String>) -> Self {
        QcError::InvalidMeasurement {
            attribute: attribute.into(),
            raw: raw.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QcError::UnknownSpec { .. } => "UNKNOWN_SPEC",
            QcError::DuplicateSpec { .. } => "DUPLICATE_SPEC",
            QcError::InvalidRange { .. } => "INVALID_RANGE",
            QcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            QcError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            QcError::EmptySeries { .. } => "EMPTY_SERIES",
            QcError::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QcError::invalid_geometry("diameter_mm", "-5.0", "Diameter must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(QcError::unknown_spec("X99").error_code(), "UNKNOWN_SPEC");
        assert_eq!(
            QcError::unsupported_conversion("HV", "HRB").error_code(),
            "UNSUPPORTED_CONVERSION"
        );
    }

    #[test]
    fn test_error_display() {
        let error = QcError::invalid_measurement("C", "abc");
        assert_eq!(
            error.to_string(),
            "Measurement for 'C' is not a number: 'abc'"
        );
    }
}
