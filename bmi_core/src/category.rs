//! # BMI Categories
//!
//! The four adult BMI categories, their half-open intervals and display
//! tokens, plus the 10-40 gauge scale shells draw them on.
//!
//! | Category    | Interval    | Color     |
//! |-------------|-------------|-----------|
//! | Underweight | [0, 18.5)   | `#60a5fa` |
//! | Normal      | [18.5, 25)  | `#34d399` |
//! | Overweight  | [25, 30)    | `#f59e0b` |
//! | Obesity     | [30, ∞)     | `#ef4444` |
//!
//! Boundary values belong to the higher category.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::category::{classify, CategoryLabel};
//!
//! assert_eq!(classify(18.5), CategoryLabel::Normal);
//! assert_eq!(classify(25.0), CategoryLabel::Overweight);
//! assert_eq!(CategoryLabel::Normal.display_name(), "Normal weight");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lower edge of the gauge scale
pub const GAUGE_MIN: f64 = 10.0;

/// Upper edge of the gauge scale
pub const GAUGE_MAX: f64 = 40.0;

/// Tick labels drawn under the gauge
pub const GAUGE_TICKS: [f64; 5] = [10.0, 18.5, 25.0, 30.0, 40.0];

/// BMI category label.
///
/// `Unknown` is a sentinel for values no interval covers (negative or NaN).
/// Valid measurements never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLabel {
    Underweight,
    Normal,
    Overweight,
    Obesity,
    Unknown,
}

impl CategoryLabel {
    /// The real categories in ascending BMI order
    pub const ALL: [CategoryLabel; 4] = [
        CategoryLabel::Underweight,
        CategoryLabel::Normal,
        CategoryLabel::Overweight,
        CategoryLabel::Obesity,
    ];

    /// Half-open `[lo, hi)` BMI interval, or `None` for the sentinel.
    pub fn interval(&self) -> Option<(f64, f64)> {
        match self {
            CategoryLabel::Underweight => Some((0.0, 18.5)),
            CategoryLabel::Normal => Some((18.5, 25.0)),
            CategoryLabel::Overweight => Some((25.0, 30.0)),
            CategoryLabel::Obesity => Some((30.0, f64::INFINITY)),
            CategoryLabel::Unknown => None,
        }
    }

    /// Position in ascending BMI order, `None` for the sentinel
    pub fn rank(&self) -> Option<usize> {
        Self::ALL.iter().position(|c| c == self)
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryLabel::Underweight => "Underweight",
            CategoryLabel::Normal => "Normal weight",
            CategoryLabel::Overweight => "Overweight",
            CategoryLabel::Obesity => "Obesity",
            CategoryLabel::Unknown => "Unknown",
        }
    }

    /// Hex color token for badges and gauge segments
    pub fn color(&self) -> &'static str {
        match self {
            CategoryLabel::Underweight => "#60a5fa",
            CategoryLabel::Normal => "#34d399",
            CategoryLabel::Overweight => "#f59e0b",
            CategoryLabel::Obesity => "#ef4444",
            CategoryLabel::Unknown => "#6b7280",
        }
    }

    /// Icon token shown next to the result
    pub fn icon(&self) -> &'static str {
        match self {
            CategoryLabel::Underweight => "🪁",
            CategoryLabel::Normal => "🥑",
            CategoryLabel::Overweight => "🍯",
            CategoryLabel::Obesity => "🍰",
            CategoryLabel::Unknown => "❓",
        }
    }

    /// Check whether `bmi` falls inside this category's interval
    pub fn contains(&self, bmi: f64) -> bool {
        match self.interval() {
            Some((lo, hi)) => lo <= bmi && bmi < hi,
            None => false,
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify a BMI value.
///
/// Scans the four intervals in ascending order and returns the first match.
/// Falls back to [`CategoryLabel::Unknown`] for negative or NaN input.
pub fn classify(bmi: f64) -> CategoryLabel {
    CategoryLabel::ALL
        .iter()
        .copied()
        .find(|category| category.contains(bmi))
        .unwrap_or_else(|| {
            warn!(bmi, "BMI outside every category interval");
            CategoryLabel::Unknown
        })
}

/// Normalized position of `bmi` on the 10-40 gauge, clamped to `[0, 1]`.
///
/// NaN maps to 0.
pub fn gauge_position(bmi: f64) -> f64 {
    let position = (bmi - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN);
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, 1.0)
}

/// One colored band of the gauge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSegment {
    pub category: CategoryLabel,

    /// Width of the band in BMI units within the gauge scale
    pub weight: f64,
}

/// Gauge bands in ascending order: 8.5, 6.5, 5 and 10 BMI units wide.
pub fn gauge_segments() -> Vec<GaugeSegment> {
    CategoryLabel::ALL
        .iter()
        .filter_map(|&category| {
            let (lo, hi) = category.interval()?;
            let weight = hi.min(GAUGE_MAX) - lo.max(GAUGE_MIN);
            (weight > 0.0).then_some(GaugeSegment { category, weight })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_go_up() {
        assert_eq!(classify(18.4999), CategoryLabel::Underweight);
        assert_eq!(classify(18.5), CategoryLabel::Normal);
        assert_eq!(classify(24.9999), CategoryLabel::Normal);
        assert_eq!(classify(25.0), CategoryLabel::Overweight);
        assert_eq!(classify(29.9999), CategoryLabel::Overweight);
        assert_eq!(classify(30.0), CategoryLabel::Obesity);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.0), CategoryLabel::Underweight);
        assert_eq!(classify(1_000.0), CategoryLabel::Obesity);
        assert_eq!(classify(f64::MAX), CategoryLabel::Obesity);
    }

    #[test]
    fn test_total_over_non_negative_range() {
        // Unknown must not be reachable from any non-negative finite BMI.
        let mut bmi = 0.0;
        while bmi < 80.0 {
            assert_ne!(classify(bmi), CategoryLabel::Unknown, "bmi {}", bmi);
            bmi += 0.01;
        }
    }

    #[test]
    fn test_monotonic() {
        let values: Vec<f64> = (0..=600).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            let lower = classify(pair[0]).rank().unwrap();
            let higher = classify(pair[1]).rank().unwrap();
            assert!(lower <= higher, "{} -> {} went backwards", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_intervals_partition_without_gaps() {
        let intervals: Vec<(f64, f64)> = CategoryLabel::ALL
            .iter()
            .map(|c| c.interval().unwrap())
            .collect();
        assert_eq!(intervals[0].0, 0.0);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert!(intervals[3].1.is_infinite());
    }

    #[test]
    fn test_sentinel_only_for_malformed_input() {
        assert_eq!(classify(-0.1), CategoryLabel::Unknown);
        assert_eq!(classify(f64::NAN), CategoryLabel::Unknown);
        assert_eq!(CategoryLabel::Unknown.rank(), None);
        assert!(!CategoryLabel::ALL.contains(&CategoryLabel::Unknown));
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(CategoryLabel::Obesity.color(), "#ef4444");
        assert_eq!(CategoryLabel::Normal.icon(), "🥑");
        assert_eq!(CategoryLabel::Normal.to_string(), "Normal weight");
    }

    #[test]
    fn test_gauge_position() {
        assert_eq!(gauge_position(10.0), 0.0);
        assert_eq!(gauge_position(40.0), 1.0);
        assert!((gauge_position(25.0) - 0.5).abs() < 1e-12);
        assert_eq!(gauge_position(5.0), 0.0);
        assert_eq!(gauge_position(55.0), 1.0);
        assert_eq!(gauge_position(f64::NAN), 0.0);
    }

    #[test]
    fn test_gauge_segments() {
        let segments = gauge_segments();
        let weights: Vec<f64> = segments.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![8.5, 6.5, 5.0, 10.0]);
        let total: f64 = weights.iter().sum();
        assert_eq!(total, GAUGE_MAX - GAUGE_MIN);
        assert_eq!(segments[0].category, CategoryLabel::Underweight);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CategoryLabel::Overweight).unwrap();
        assert_eq!(json, "\"Overweight\"");
    }
}
