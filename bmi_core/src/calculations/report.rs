//! # BMI Report
//!
//! Runs the full pipeline for one set of form values and packs everything a
//! shell needs to render the result into a single serializable struct.
//!
//! ```text
//! validate -> convert_to_metric -> compute_bmi -> classify
//!                                      ├─> healthy_weight_range
//!                                      └─> lookup_insight
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::calculations::report::evaluate;
//! use bmi_core::measurement::ImperialMeasurement;
//! use bmi_core::category::CategoryLabel;
//!
//! let report = evaluate(&ImperialMeasurement::new(5, 7, 165.0)).unwrap();
//! assert_eq!(report.result.value, 25.8);
//! assert_eq!(report.result.category, CategoryLabel::Overweight);
//! assert_eq!(report.tips.len(), 3);
//! ```

use serde::Serialize;
use tracing::{debug, instrument};

use crate::calculations::bmi::{compute_bmi, healthy_weight_range, BmiResult, HealthyWeightRange};
use crate::category::gauge_position;
use crate::errors::EngineResult;
use crate::insights::lookup_insight;
use crate::measurement::{ImperialMeasurement, MetricMeasurement};

/// Everything a shell renders for one calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "input": { "feet": 5, "inches": 7, "pounds": 165.0 },
///   "metric": { "height_m": 1.7018, "weight_kg": 74.84274105 },
///   "result": { "value": 25.8, "category": "Overweight" },
///   "category_name": "Overweight",
///   "color": "#f59e0b",
///   "icon": "🍯",
///   "gauge_position": 0.526,
///   "healthy_range": { "low_pounds": 118, "high_pounds": 159 },
///   "blurb": "Your BMI is above the typical range for most adults.",
///   "tips": ["...", "...", "..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub input: ImperialMeasurement,
    pub metric: MetricMeasurement,
    pub result: BmiResult,

    /// Display name of the category (e.g. "Normal weight")
    pub category_name: &'static str,

    /// Hex color token
    pub color: &'static str,

    /// Icon token
    pub icon: &'static str,

    /// Position on the 10-40 gauge, in `[0, 1]`
    pub gauge_position: f64,

    pub healthy_range: HealthyWeightRange,
    pub blurb: &'static str,
    pub tips: Vec<&'static str>,
}

/// Validate the input and run the full pipeline.
///
/// # Errors
///
/// `InvalidInput` when the measurement is outside the form's bounds. The
/// division and lookup errors cannot occur for validated input.
#[instrument(level = "debug", skip_all, fields(feet = input.feet, inches = input.inches, pounds = input.pounds))]
pub fn evaluate(input: &ImperialMeasurement) -> EngineResult<BmiReport> {
    input.validate()?;

    let metric = input.to_metric();
    let value = compute_bmi(metric.height_m, metric.weight_kg)?;
    let result = BmiResult::from_value(value);
    let healthy_range = healthy_weight_range(metric.height_m);
    let insight = lookup_insight(result.category)?;

    debug!(bmi = result.value, category = %result.category, "evaluation complete");

    Ok(BmiReport {
        input: *input,
        metric,
        result,
        category_name: result.category.display_name(),
        color: result.category.color(),
        icon: result.category.icon(),
        gauge_position: gauge_position(result.value),
        healthy_range,
        blurb: insight.blurb,
        tips: insight.tips.to_vec(),
    })
}
