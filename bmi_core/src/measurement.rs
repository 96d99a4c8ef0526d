//! # Measurements
//!
//! Raw imperial input and its metric equivalent.
//!
//! A shell collects an [`ImperialMeasurement`] (feet, inches, pounds), checks
//! it with [`ImperialMeasurement::validate`], then converts it with
//! [`convert_to_metric`]. Conversion never fails: total height is clamped to at
//! least one inch so the BMI denominator is never zero.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::measurement::{convert_to_metric, ImperialMeasurement};
//!
//! let input = ImperialMeasurement::new(5, 7, 165.0);
//! input.validate().unwrap();
//!
//! let metric = convert_to_metric(input.feet, input.inches, input.pounds);
//! assert!((metric.height_m.0 - 1.7018).abs() < 1e-9);
//! assert!((metric.weight_kg.0 - 74.8427).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::errors::{BmiError, EngineResult};
use crate::units::{Feet, Inches, Kilograms, Meters, Pounds};

/// Shortest height the input form accepts, in whole feet
pub const MIN_FEET: u32 = 3;

/// Tallest height the input form accepts, in whole feet
pub const MAX_FEET: u32 = 8;

/// Largest inches value; 12 inches would roll over into a foot
pub const MAX_INCHES: u32 = 11;

/// Lightest weight the input form accepts, in pounds
pub const MIN_POUNDS: f64 = 1.0;

/// Height used when feet and inches are both zero
const MIN_TOTAL_INCHES: u32 = 1;

/// Raw user input in US customary units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "feet": 5,
///   "inches": 7,
///   "pounds": 165.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperialMeasurement {
    /// Whole feet of height
    pub feet: u32,

    /// Remaining inches of height (0-11)
    pub inches: u32,

    /// Body weight in pounds
    pub pounds: f64,
}

impl ImperialMeasurement {
    /// Create a measurement from raw form values.
    pub fn new(feet: u32, inches: u32, pounds: f64) -> Self {
        ImperialMeasurement { feet, inches, pounds }
    }

    /// Validate input parameters against the form's bounds.
    ///
    /// The conversion functions do not call this; they assume the shell
    /// already did.
    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_FEET..=MAX_FEET).contains(&self.feet) {
            return Err(BmiError::invalid_input(
                "feet",
                self.feet.to_string(),
                format!("Feet must be between {} and {}", MIN_FEET, MAX_FEET),
            ));
        }
        if self.inches > MAX_INCHES {
            return Err(BmiError::invalid_input(
                "inches",
                self.inches.to_string(),
                format!("Inches must be between 0 and {}", MAX_INCHES),
            ));
        }
        if !self.pounds.is_finite() {
            return Err(BmiError::invalid_input(
                "pounds",
                self.pounds.to_string(),
                "Weight must be a finite number",
            ));
        }
        if self.pounds < MIN_POUNDS {
            return Err(BmiError::invalid_input(
                "pounds",
                self.pounds.to_string(),
                format!("Weight must be at least {} lb", MIN_POUNDS),
            ));
        }
        Ok(())
    }

    /// Convert to metric. See [`convert_to_metric`].
    pub fn to_metric(&self) -> MetricMeasurement {
        convert_to_metric(self.feet, self.inches, self.pounds)
    }
}

impl Default for ImperialMeasurement {
    /// 5 ft 7 in, 165 lb
    fn default() -> Self {
        ImperialMeasurement::new(5, 7, 165.0)
    }
}

/// Height and weight in SI units, derived from an [`ImperialMeasurement`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricMeasurement {
    /// Height in meters
    pub height_m: Meters,

    /// Weight in kilograms
    pub weight_kg: Kilograms,
}

/// Convert feet/inches/pounds to meters and kilograms.
///
/// - `height_m = max(feet * 12 + inches, 1) * 0.0254`
/// - `weight_kg = pounds * 0.45359237`
pub fn convert_to_metric(feet: u32, inches: u32, pounds: f64) -> MetricMeasurement {
    let height_m: Meters = clamped_height(feet, inches).into();
    let weight_kg: Kilograms = Pounds(pounds).into();
    trace!(height_m = height_m.0, weight_kg = weight_kg.0, "converted to metric");

    MetricMeasurement { height_m, weight_kg }
}

/// Total height in inches, never less than one inch.
fn clamped_height(feet: u32, inches: u32) -> Inches {
    let raw = Inches::from(Feet(feet as f64)) + Inches(inches as f64);
    if raw.0 < MIN_TOTAL_INCHES as f64 {
        warn!(feet, inches, "zero height, clamping to {} inch", MIN_TOTAL_INCHES);
        return Inches(MIN_TOTAL_INCHES as f64);
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_conversion() {
        let metric = convert_to_metric(5, 7, 165.0);
        assert!((metric.height_m.0 - 1.7018).abs() < 1e-9);
        assert!((metric.weight_kg.0 - 74.84274105).abs() < 1e-9);
    }

    #[test]
    fn test_zero_height_is_clamped() {
        let metric = convert_to_metric(0, 0, 100.0);
        assert!((metric.height_m.0 - 0.0254).abs() < 1e-12);
        assert_eq!(clamped_height(0, 0), Inches(1.0));
    }

    #[test]
    fn test_clamp_leaves_real_heights_alone() {
        assert_eq!(clamped_height(0, 1), Inches(1.0));
        assert_eq!(clamped_height(0, 9), Inches(9.0));
        assert_eq!(clamped_height(5, 7), Inches(67.0));
    }

    #[test]
    fn test_conversion_always_positive() {
        for feet in 3..=8 {
            for inches in 0..=11 {
                for pounds in [1.0, 50.5, 165.0, 400.0] {
                    let metric = convert_to_metric(feet, inches, pounds);
                    assert!(metric.height_m.0 > 0.0);
                    assert!(metric.weight_kg.0 > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_height_round_trips_to_inches() {
        for feet in 3..=8 {
            for inches in 0..=11 {
                let metric = convert_to_metric(feet, inches, 150.0);
                let back: Inches = metric.height_m.into();
                let expected = (feet * 12 + inches) as f64;
                assert!((back.0 - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_validate_accepts_form_range() {
        assert!(ImperialMeasurement::new(3, 0, 1.0).validate().is_ok());
        assert!(ImperialMeasurement::new(8, 11, 700.0).validate().is_ok());
        assert!(ImperialMeasurement::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inches_overflow() {
        let err = ImperialMeasurement::new(5, 12, 150.0).validate().unwrap_err();
        match err {
            BmiError::InvalidInput { field, .. } => assert_eq!(field, "inches"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_feet() {
        assert!(ImperialMeasurement::new(2, 11, 150.0).validate().is_err());
        assert!(ImperialMeasurement::new(9, 0, 150.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_weight() {
        assert!(ImperialMeasurement::new(5, 7, 0.0).validate().is_err());
        assert!(ImperialMeasurement::new(5, 7, -10.0).validate().is_err());
        assert!(ImperialMeasurement::new(5, 7, f64::NAN).validate().is_err());
        assert!(ImperialMeasurement::new(5, 7, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let input = ImperialMeasurement::new(6, 1, 180.5);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: ImperialMeasurement = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let metric = input.to_metric();
        let json = serde_json::to_value(metric).unwrap();
        assert!(json["height_m"].is_number());
        assert!(json["weight_kg"].is_number());
    }
}
