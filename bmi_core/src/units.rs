//! # Unit Types
//!
//! Type-safe wrappers for body measurement units. These are plain `f64`
//! newtypes: they keep feet from being mixed up with meters at compile time
//! and serialize to JSON as bare numbers.
//!
//! ## Imperial Units (Input)
//!
//! - Length: feet (ft), inches (in)
//! - Mass: pounds (lb)
//!
//! ## Metric Units (Calculation)
//!
//! - Length: meters (m)
//! - Mass: kilograms (kg)
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::units::{Feet, Inches, Meters, Pounds, Kilograms};
//!
//! let height: Inches = Feet(5.0).into();
//! assert_eq!(height.0, 60.0);
//!
//! let height_m: Meters = (height + Inches(7.0)).into();
//! assert!((height_m.0 - 1.7018).abs() < 1e-9);
//!
//! let mass: Kilograms = Pounds(165.0).into();
//! assert!((mass.0 - 74.84274105).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Meters per inch (exact, international inch)
pub const IN_TO_M: f64 = 0.0254;

/// Kilograms per pound (exact, international avoirdupois pound)
pub const LBS_TO_KG: f64 = 0.45359237;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Meters(inches.0 * IN_TO_M)
    }
}

impl From<Meters> for Inches {
    fn from(m: Meters) -> Self {
        Inches(m.0 / IN_TO_M)
    }
}

impl Meters {
    /// Square of the length (m²), the BMI denominator
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * LBS_TO_KG)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / LBS_TO_KG)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Feet and inches combine into a total height.
impl Add for Inches {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Inches(self.0 + rhs.0)
    }
}
