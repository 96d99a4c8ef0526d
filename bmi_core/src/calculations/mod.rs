//! # BMI Calculations
//!
//! Each calculation is a pure function over its inputs:
//!
//! - [`bmi`] - BMI value, rounding, and healthy weight range
//! - [`report`] - The end-to-end pipeline producing a [`BmiReport`]
//!
//! All result types are JSON-serializable so shells and LLM tools can
//! consume them directly.

pub mod bmi;
pub mod report;

// Re-export commonly used types
pub use bmi::{compute_bmi, healthy_weight_range, BmiResult, HealthyWeightRange};
pub use report::{evaluate, BmiReport};
