//! # Material Spec Registry
//!
//! Named material grades with their mechanical minimums and chemical
//! composition ranges, plus the registry that looks them up.
//!
//! ## Built-in Pocket Database
//!
//! A small static table of common alloys ships with the engine (AISI 4140,
//! AISI 316, A105). It is loaded once at first use and never mutated; it
//! is a convenience lookup, not a managed materials database. Callers that
//! need different grades build their own `SpecRegistry` and inject it.
//!
//! ## Example
//!
//! ```rust
//! use qc_core::specs::SpecRegistry;
//!
//! let registry = SpecRegistry::builtin();
//! let spec = registry.lookup("AISI 4140 (1.7225)").unwrap();
//! let carbon = spec.chemical_range("C").unwrap();
//! assert_eq!((carbon.min, carbon.max), (0.38, 0.43));
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{QcError, QcResult};

/// A one-sided mechanical requirement (measured value must reach `min`).
///
/// Strength minimums are in MPa, elongation in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicalMinimum {
    /// Attribute key matched against measurement names (e.g., "uts")
    pub name: String,
    /// Minimum acceptable value
    pub min: f64,
}

/// A closed composition interval for one element, in weight percent.
/// Both endpoints are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRange {
    /// Element symbol (e.g., "C", "Mn")
    pub symbol: String,
    pub min: f64,
    pub max: f64,
}

impl ElementRange {
    /// Check whether a measured fraction falls inside the range
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A material grade's requirement set.
///
/// Attribute order is declaration order and drives verdict and report
/// order, so the `Vec` fields are deliberate: the chemistry of a grade is
/// conventionally listed C first, then the alloying elements.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "AISI 4140 (1.7225)",
///   "mechanical": [{ "name": "uts", "min": 850.0 }],
///   "chemical": [{ "symbol": "C", "min": 0.38, "max": 0.43 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Unique grade identifier (e.g., "AISI 4140 (1.7225)")
    pub id: String,
    /// Mechanical minimums in declaration order
    pub mechanical: Vec<MechanicalMinimum>,
    /// Chemical composition ranges in declaration order
    pub chemical: Vec<ElementRange>,
}

impl MaterialSpec {
    /// Create an empty spec with the given id
    pub fn new(id: impl Into<String>) -> Self {
        MaterialSpec {
            id: id.into(),
            mechanical: Vec::new(),
            chemical: Vec::new(),
        }
    }

    /// Append a mechanical minimum
    pub fn with_mechanical(mut self, name: impl Into<String>, min: f64) -> Self {
        self.mechanical.push(MechanicalMinimum {
            name: name.into(),
            min,
        });
        self
    }

    /// Append a chemical composition range
    pub fn with_element(mut self, symbol: impl Into<String>, min: f64, max: f64) -> Self {
        self.chemical.push(ElementRange {
            symbol: symbol.into(),
            min,
            max,
        });
        self
    }

    /// Validate range ordering and name uniqueness.
    pub fn validate(&self) -> QcResult<()> {
        for range in &self.chemical {
            if range.min > range.max {
                return Err(QcError::InvalidRange {
                    spec_id: self.id.clone(),
                    symbol: range.symbol.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        for (i, range) in self.chemical.iter().enumerate() {
            if self.chemical[..i].iter().any(|r| r.symbol == range.symbol) {
                return Err(QcError::duplicate_spec(format!(
                    "{} (element {})",
                    self.id, range.symbol
                )));
            }
        }
        for (i, req) in self.mechanical.iter().enumerate() {
            if self.mechanical[..i].iter().any(|r| r.name == req.name) {
                return Err(QcError::duplicate_spec(format!(
                    "{} (attribute {})",
                    self.id, req.name
                )));
            }
        }
        Ok(())
    }

    /// Look up the composition range for an element symbol
    pub fn chemical_range(&self, symbol: &str) -> Option<&ElementRange> {
        self.chemical.iter().find(|r| r.symbol == symbol)
    }

    /// Look up a mechanical minimum by attribute name
    pub fn mechanical_minimum(&self, name: &str) -> Option<&MechanicalMinimum> {
        self.mechanical.iter().find(|r| r.name == name)
    }

    /// Element symbols in declaration order (drives input-field generation
    /// in the presentation layer)
    pub fn element_symbols(&self) -> Vec<&str> {
        self.chemical.iter().map(|r| r.symbol.as_str()).collect()
    }
}

/// Registry of material specs, looked up by id.
///
/// Registration order is preserved; `list_ids` drives any selection UI.
#[derive(Debug, Clone, Default)]
pub struct SpecRegistry {
    specs: Vec<MaterialSpec>,
}

impl SpecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        SpecRegistry { specs: Vec::new() }
    }

    /// Register a spec. Fails if the id is already taken or the spec's
    /// ranges are malformed; registered specs are never altered in place.
    pub fn register(&mut self, spec: MaterialSpec) -> QcResult<()> {
        spec.validate()?;
        if self.specs.iter().any(|s| s.id == spec.id) {
            return Err(QcError::duplicate_spec(spec.id.as_str()));
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Look up a spec by id
    pub fn lookup(&self, spec_id: &str) -> QcResult<&MaterialSpec> {
        self.specs
            .iter()
            .find(|s| s.id == spec_id)
            .ok_or_else(|| QcError::unknown_spec(spec_id))
    }

    /// Spec ids in registration order
    pub fn list_ids(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.id.as_str()).collect()
    }

    /// Number of registered specs
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry has no specs
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The built-in pocket database, loaded once per process.
    pub fn builtin() -> &'static SpecRegistry {
        static BUILTIN: Lazy<SpecRegistry> = Lazy::new(|| {
            let mut registry = SpecRegistry::new();
            for spec in builtin_specs() {
                // Static table entries are known-good; a failure here is a
                // programming error in the table itself.
                registry
                    .register(spec)
                    .unwrap_or_else(|e| panic!("invalid built-in spec: {e}"));
            }
            registry
        });
        &BUILTIN
    }
}

/// The pocket database entries. Mechanical values are MPa except
/// elongation (percent); chemical ranges are weight percent.
fn builtin_specs() -> Vec<MaterialSpec> {
    vec![
        MaterialSpec::new("AISI 4140 (1.7225)")
            .with_mechanical("uts", 850.0)
            .with_mechanical("yield", 650.0)
            .with_mechanical("elongation", 12.0)
            .with_element("C", 0.38, 0.43)
            .with_element("Mn", 0.75, 1.00)
            .with_element("Cr", 0.80, 1.10)
            .with_element("Mo", 0.15, 0.25),
        MaterialSpec::new("AISI 316 (1.4401)")
            .with_mechanical("uts", 515.0)
            .with_mechanical("yield", 205.0)
            .with_mechanical("elongation", 40.0)
            .with_element("C", 0.0, 0.08)
            .with_element("Mn", 0.0, 2.00)
            .with_element("Cr", 16.0, 18.0)
            .with_element("Ni", 10.0, 14.0),
        MaterialSpec::new("A105 Carbon Steel")
            .with_mechanical("uts", 485.0)
            .with_mechanical("yield", 250.0)
            .with_mechanical("elongation", 22.0)
            .with_element("C", 0.0, 0.35)
            .with_element("Mn", 0.60, 1.05)
            .with_element("Si", 0.10, 0.35),
    ]
}
