//! # BMI Calculation
//!
//! `bmi = kg / m²`, rounded to one decimal place, and the pounds range that
//! keeps a given height inside the Normal band (BMI 18.5-24.9).
//!
//! ## Rounding
//!
//! Both the BMI value and the weight bounds use `f64::round`, which breaks
//! ties away from zero.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::calculations::bmi::{compute_bmi, healthy_weight_range};
//! use bmi_core::units::{Kilograms, Meters};
//!
//! let bmi = compute_bmi(Meters(1.7018), Kilograms(74.84274105)).unwrap();
//! assert_eq!(bmi, 25.8);
//!
//! let range = healthy_weight_range(Meters(1.7018));
//! assert_eq!((range.low_pounds, range.high_pounds), (118, 159));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{classify, CategoryLabel};
use crate::errors::{BmiError, EngineResult};
use crate::units::{Kilograms, Meters, Pounds};

/// Lowest BMI in the Normal band
pub const HEALTHY_BMI_LOW: f64 = 18.5;

/// Highest BMI quoted for the Normal band
pub const HEALTHY_BMI_HIGH: f64 = 24.9;

/// A rounded BMI value and its category.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": 25.8,
///   "category": "Overweight"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,

    pub category: CategoryLabel,
}

impl BmiResult {
    /// Classify an already-rounded BMI value.
    pub fn from_value(value: f64) -> Self {
        BmiResult {
            value,
            category: classify(value),
        }
    }
}

/// Pounds range mapping to BMI 18.5-24.9 at a given height.
///
/// `low_pounds < high_pounds` from 10 inches up. Below that the two bounds
/// can round into the same whole pound (1 inch gives `0..0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthyWeightRange {
    pub low_pounds: u32,
    pub high_pounds: u32,
}

/// Round to one decimal place, ties away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute BMI from metric height and weight.
///
/// # Errors
///
/// `DivisionByZero` when `height_m` is exactly zero. Heights produced by
/// [`convert_to_metric`](crate::measurement::convert_to_metric) are at least
/// one inch, so that path only opens for hand-built inputs.
pub fn compute_bmi(height_m: Meters, weight_kg: Kilograms) -> EngineResult<f64> {
    if height_m.0 == 0.0 {
        return Err(BmiError::division_by_zero("compute_bmi"));
    }

    let raw = weight_kg.0 / height_m.squared();
    let bmi = round_to_tenth(raw);
    debug!(raw, bmi, "computed BMI");
    Ok(bmi)
}

/// Pounds range for the Normal BMI band at `height_m`.
///
/// - `low = round(18.5 * h² / 0.45359237)`
/// - `high = round(24.9 * h² / 0.45359237)`
pub fn healthy_weight_range(height_m: Meters) -> HealthyWeightRange {
    let h2 = height_m.squared();
    let low: Pounds = Kilograms(HEALTHY_BMI_LOW * h2).into();
    let high: Pounds = Kilograms(HEALTHY_BMI_HIGH * h2).into();

    // Float-to-int `as` saturates, so absurd heights cannot wrap.
    let range = HealthyWeightRange {
        low_pounds: low.0.round() as u32,
        high_pounds: high.0.round() as u32,
    };
    debug!(low = range.low_pounds, high = range.high_pounds, "healthy weight range");
    range
}
