//! # qc_core - Materials QC Compliance Engine
//!
//! `qc_core` is the rule engine behind Materials QC Studio: given a
//! material grade's requirement set (mechanical minimums plus chemical
//! composition ranges) and a set of measured values, it decides pass/fail
//! per attribute and overall. It also carries the unit conversions the lab
//! views need (engineering stress/strain from raw machine data, hardness
//! scale conversion) and the series reduction for tensile summaries.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Injected Configuration**: The spec registry is passed in, never an
//!   ambient global, so the engine stays testable in isolation
//!
//! ## Quick Start
//!
//! ```rust
//! use qc_core::compliance::{evaluate, MeasurementSet};
//! use qc_core::report::render;
//! use qc_core::specs::SpecRegistry;
//!
//! let registry = SpecRegistry::builtin();
//! let spec = registry.lookup("AISI 4140 (1.7225)").unwrap();
//!
//! let mut measurements = MeasurementSet::new();
//! measurements.insert("C", 0.40);
//!
//! let verdict = evaluate(spec, &measurements);
//! for line in render(&verdict) {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`specs`] - Material spec registry and the built-in pocket database
//! - [`compliance`] - Compliance evaluation against a spec
//! - [`conversions`] - Stress/strain and hardness scale conversions
//! - [`series`] - Tensile series reduction to summary statistics
//! - [`report`] - Verdict rendering as report lines
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod compliance;
pub mod conversions;
pub mod errors;
pub mod report;
pub mod series;
pub mod specs;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use compliance::{evaluate, ComplianceVerdict, MeasurementSet};
pub use errors::{QcError, QcResult};
pub use specs::{MaterialSpec, SpecRegistry};
