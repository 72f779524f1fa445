//! # Compliance Evaluation
//!
//! Compares a set of measured values against a material spec and produces
//! a structured verdict. A single pass over the spec's declared attributes;
//! fully deterministic for a given (spec, measurements) pair.
//!
//! ## Partial-Failure Semantics
//!
//! `evaluate` never fails outright. Attributes absent from the measurement
//! set are skipped (not failed), and measurement text that does not parse
//! as a number becomes a `MeasurementIssue` while the remaining attributes
//! are still evaluated. A measurement set that evaluates zero attributes
//! passes vacuously; callers that consider that suspicious can check
//! `verdict.attribute_verdicts.is_empty()`.
//!
//! ## Example
//!
//! ```rust
//! use qc_core::compliance::{evaluate, MeasurementSet};
//! use qc_core::specs::SpecRegistry;
//!
//! let spec = SpecRegistry::builtin().lookup("AISI 4140 (1.7225)").unwrap();
//!
//! let mut measurements = MeasurementSet::new();
//! measurements.insert("C", 0.40);
//!
//! let verdict = evaluate(spec, &measurements);
//! assert!(verdict.overall_passed);
//! ```

use serde::{Deserialize, Serialize};

use crate::specs::MaterialSpec;

/// A measured value as supplied by the caller.
///
/// Lab front-ends hand over free-text entry fields; `Text` defers the
/// numeric parse to evaluation time so one bad field cannot abort the
/// whole check. Blank text means "not measured" and is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasuredValue {
    Numeric(f64),
    Text(String),
}

impl MeasuredValue {
    /// Resolve to a number: `Ok(None)` for blank text, `Err` with the raw
    /// text when it does not parse.
    fn resolve(&self) -> Result<Option<f64>, String> {
        match self {
            MeasuredValue::Numeric(v) => Ok(Some(*v)),
            MeasuredValue::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    trimmed
                        .parse::<f64>()
                        .map(Some)
                        .map_err(|_| raw.clone())
                }
            }
        }
    }
}

impl From<f64> for MeasuredValue {
    fn from(v: f64) -> Self {
        MeasuredValue::Numeric(v)
    }
}

/// Measured attribute values for one evaluation request.
///
/// Entries keep insertion order, though verdict order always follows the
/// spec's declaration order, not the measurement order. Missing attributes
/// are permitted and mean "not evaluated".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    entries: Vec<(String, MeasuredValue)>,
}

impl MeasurementSet {
    /// Create an empty measurement set
    pub fn new() -> Self {
        MeasurementSet {
            entries: Vec::new(),
        }
    }

    /// Record a numeric measurement
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.entries
            .push((name.into(), MeasuredValue::Numeric(value)));
    }

    /// Record a raw text measurement (parsed at evaluation time)
    pub fn insert_text(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.entries
            .push((name.into(), MeasuredValue::Text(raw.into())));
    }

    /// Get the recorded value for an attribute, if any
    pub fn get(&self, name: &str) -> Option<&MeasuredValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The acceptance bound an attribute was tested against.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Range", "min": 0.38, "max": 0.43 }
/// { "type": "Minimum", "min": 850.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Bound {
    /// Closed interval, both endpoints inclusive
    Range { min: f64, max: f64 },
    /// One-sided lower bound (value must reach `min`)
    Minimum { min: f64 },
}

impl Bound {
    /// Check whether a value satisfies the bound
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Bound::Range { min, max } => *min <= value && value <= *max,
            Bound::Minimum { min } => value >= *min,
        }
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Range { min, max } => write!(f, "[{min}, {max}]"),
            Bound::Minimum { min } => write!(f, ">= {min}"),
        }
    }
}

/// Pass/fail outcome for a single evaluated attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeVerdict {
    /// Attribute or element name (e.g., "uts", "C")
    pub name: String,
    /// The measured value that was tested
    pub measured: f64,
    /// The bound it was tested against
    pub bound: Bound,
    /// Whether the measured value satisfies the bound
    pub passed: bool,
}

/// An attribute whose measurement could not be evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementIssue {
    /// Attribute the bad measurement was recorded under
    pub attribute: String,
    /// The raw text that failed to parse
    pub raw: String,
}

impl MeasurementIssue {
    /// The issue as a structured error, for callers that propagate it
    pub fn error(&self) -> crate::errors::QcError {
        crate::errors::QcError::invalid_measurement(self.attribute.as_str(), self.raw.as_str())
    }
}

/// The full outcome of one compliance evaluation.
///
/// `attribute_verdicts` follow the spec's declared attribute order:
/// mechanical minimums first, then chemical ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// Id of the spec that was evaluated against
    pub spec_id: String,
    /// Per-attribute outcomes for the attributes that were measured
    pub attribute_verdicts: Vec<AttributeVerdict>,
    /// Attributes skipped because their measurement was not numeric
    pub issues: Vec<MeasurementIssue>,
    /// Conjunction of `passed` over the evaluated attributes
    /// (vacuously true when none were evaluated)
    pub overall_passed: bool,
}

impl ComplianceVerdict {
    /// Number of attributes that were actually evaluated
    pub fn evaluated_count(&self) -> usize {
        self.attribute_verdicts.len()
    }

    /// Names of the attributes that failed their bound, in verdict order
    pub fn failed_attributes(&self) -> Vec<&str> {
        self.attribute_verdicts
            .iter()
            .filter(|v| !v.passed)
            .map(|v| v.name.as_str())
            .collect()
    }
}

/// Evaluate a measurement set against a material spec.
///
/// Iterates the spec's mechanical minimums and then its chemical ranges,
/// in declaration order. For each attribute present in `measurements` the
/// bound is tested inclusively; absent attributes are omitted from the
/// verdict entirely.
pub fn evaluate(spec: &MaterialSpec, measurements: &MeasurementSet) -> ComplianceVerdict {
    let mut attribute_verdicts = Vec::new();
    let mut issues = Vec::new();

    let mut check = |name: &str, bound: Bound| {
        let Some(value) = measurements.get(name) else {
            return;
        };
        match value.resolve() {
            Ok(Some(measured)) => attribute_verdicts.push(AttributeVerdict {
                name: name.to_string(),
                measured,
                passed: bound.contains(measured),
                bound,
            }),
            Ok(None) => {} // blank entry field, not measured
            Err(raw) => issues.push(MeasurementIssue {
                attribute: name.to_string(),
                raw,
            }),
        }
    };

    for req in &spec.mechanical {
        check(&req.name, Bound::Minimum { min: req.min });
    }
    for range in &spec.chemical {
        check(
            &range.symbol,
            Bound::Range {
                min: range.min,
                max: range.max,
            },
        );
    }

    let overall_passed = attribute_verdicts.iter().all(|v| v.passed);

    ComplianceVerdict {
        spec_id: spec.id.clone(),
        attribute_verdicts,
        issues,
        overall_passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{MaterialSpec, SpecRegistry};

    fn aisi_4140() -> &'static MaterialSpec {
        SpecRegistry::builtin().lookup("AISI 4140 (1.7225)").unwrap()
    }

    #[test]
    fn test_carbon_in_range_passes() {
        let mut m = MeasurementSet::new();
        m.insert("C", 0.40);

        let verdict = evaluate(aisi_4140(), &m);
        assert_eq!(verdict.attribute_verdicts.len(), 1);
        let v = &verdict.attribute_verdicts[0];
        assert_eq!(v.name, "C");
        assert_eq!(v.measured, 0.40);
        assert_eq!(
            v.bound,
            Bound::Range {
                min: 0.38,
                max: 0.43
            }
        );
        assert!(v.passed);
        assert!(verdict.overall_passed);
    }

    #[test]
    fn test_carbon_out_of_range_fails() {
        let mut m = MeasurementSet::new();
        m.insert("C", 0.50);

        let verdict = evaluate(aisi_4140(), &m);
        assert!(!verdict.attribute_verdicts[0].passed);
        assert!(!verdict.overall_passed);
        assert_eq!(verdict.failed_attributes(), vec!["C"]);
    }

    #[test]
    fn test_empty_measurements_pass_vacuously() {
        let verdict = evaluate(aisi_4140(), &MeasurementSet::new());
        assert!(verdict.overall_passed);
        assert!(verdict.attribute_verdicts.is_empty());
        assert!(verdict.issues.is_empty());
    }

    #[test]
    fn test_range_endpoints_inclusive() {
        for (value, expected) in [(0.38, true), (0.43, true), (0.37, false), (0.44, false)] {
            let mut m = MeasurementSet::new();
            m.insert("C", value);
            let verdict = evaluate(aisi_4140(), &m);
            assert_eq!(verdict.attribute_verdicts[0].passed, expected, "C = {value}");
        }
    }

    #[test]
    fn test_mechanical_minimum_one_sided() {
        let mut m = MeasurementSet::new();
        m.insert("uts", 850.0); // exactly at the minimum
        m.insert("yield", 600.0); // below 650 minimum

        let verdict = evaluate(aisi_4140(), &m);
        assert_eq!(verdict.attribute_verdicts.len(), 2);
        assert!(verdict.attribute_verdicts[0].passed);
        assert_eq!(
            verdict.attribute_verdicts[0].bound,
            Bound::Minimum { min: 850.0 }
        );
        assert!(!verdict.attribute_verdicts[1].passed);
        assert!(!verdict.overall_passed);
    }

    #[test]
    fn test_overall_is_conjunction_of_evaluated() {
        let mut m = MeasurementSet::new();
        m.insert("C", 0.40);
        m.insert("Mn", 0.80);
        m.insert("Cr", 0.95);

        let verdict = evaluate(aisi_4140(), &m);
        let all_passed = verdict.attribute_verdicts.iter().all(|v| v.passed);
        assert_eq!(verdict.overall_passed, all_passed);
    }

    #[test]
    fn test_verdict_order_follows_spec_not_measurements() {
        let spec = SpecRegistry::builtin().lookup("AISI 316 (1.4401)").unwrap();

        // Inserted in reverse of the spec's C, Mn, Cr, Ni order
        let mut m = MeasurementSet::new();
        m.insert("Ni", 12.0);
        m.insert("Cr", 17.0);
        m.insert("Mn", 1.5);
        m.insert("C", 0.05);

        let verdict = evaluate(spec, &m);
        let names: Vec<&str> = verdict
            .attribute_verdicts
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "Mn", "Cr", "Ni"]);
    }

    #[test]
    fn test_unrelated_measurements_ignored() {
        let mut m = MeasurementSet::new();
        m.insert("Unobtainium", 99.9);

        let verdict = evaluate(aisi_4140(), &m);
        assert!(verdict.attribute_verdicts.is_empty());
        assert!(verdict.overall_passed);
    }

    #[test]
    fn test_text_measurements_parse_at_evaluation() {
        let mut m = MeasurementSet::new();
        m.insert_text("C", " 0.40 ");
        m.insert_text("Mn", ""); // blank: skipped, not an issue

        let verdict = evaluate(aisi_4140(), &m);
        assert_eq!(verdict.attribute_verdicts.len(), 1);
        assert!(verdict.attribute_verdicts[0].passed);
        assert!(verdict.issues.is_empty());
    }

    #[test]
    fn test_bad_text_collected_without_aborting() {
        let mut m = MeasurementSet::new();
        m.insert_text("C", "abc");
        m.insert("Mn", 0.80);

        let verdict = evaluate(aisi_4140(), &m);
        // Mn was still evaluated despite the bad C entry
        assert_eq!(verdict.attribute_verdicts.len(), 1);
        assert_eq!(verdict.attribute_verdicts[0].name, "Mn");

        assert_eq!(verdict.issues.len(), 1);
        assert_eq!(verdict.issues[0].attribute, "C");
        assert_eq!(verdict.issues[0].raw, "abc");
        assert_eq!(verdict.issues[0].error().error_code(), "INVALID_MEASUREMENT");

        // Issues do not affect the conjunction over evaluated attributes
        assert!(verdict.overall_passed);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mut m = MeasurementSet::new();
        m.insert("C", 0.40);
        m.insert("Cr", 1.05);

        let first = evaluate(aisi_4140(), &m);
        let second = evaluate(aisi_4140(), &m);
        assert_eq!(first, second);
    }

    #[test]
    fn test_verdict_serialization() {
        let mut m = MeasurementSet::new();
        m.insert("C", 0.50);

        let verdict = evaluate(aisi_4140(), &m);
        let json = serde_json::to_string(&verdict).unwrap();
        let roundtrip: ComplianceVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, roundtrip);
    }

    #[test]
    fn test_measured_value_untagged_json() {
        let mut m = MeasurementSet::new();
        m.insert("C", 0.40);
        m.insert_text("Mn", "0.9");

        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: MeasurementSet = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
