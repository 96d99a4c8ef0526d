//! # bmi_core - BMI Calculation Engine
//!
//! `bmi_core` converts imperial height and weight to metric, computes Body
//! Mass Index, classifies it, and attaches a healthy weight range and static
//! health tips. Every type serializes to JSON, so the engine can sit behind a
//! terminal, a web page, or an LLM tool with no glue beyond `serde_json`.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bmi_core::{evaluate, ImperialMeasurement};
//!
//! let report = evaluate(&ImperialMeasurement::new(5, 7, 165.0)).unwrap();
//! assert_eq!(report.result.value, 25.8);
//! assert_eq!(report.category_name, "Overweight");
//!
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("\"low_pounds\": 118"));
//! ```
//!
//! ## Modules
//!
//! - [`measurement`] - Imperial input, validation, metric conversion
//! - [`calculations`] - BMI, healthy weight range, end-to-end report
//! - [`category`] - Category intervals, display tokens, gauge scale
//! - [`insights`] - Static blurbs and tips per category
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod category;
pub mod errors;
pub mod insights;
pub mod measurement;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_bmi, evaluate, healthy_weight_range, BmiReport, BmiResult, HealthyWeightRange};
pub use category::{classify, CategoryLabel};
pub use errors::{BmiError, EngineResult};
pub use insights::{lookup_insight, InsightEntry, DISCLAIMER};
pub use measurement::{convert_to_metric, ImperialMeasurement, MetricMeasurement};
