//! # Health Insights
//!
//! Static narrative blurbs and tips per BMI category. The table is built on
//! first access and never mutated, so it can be shared across threads
//! without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::category::CategoryLabel;
use crate::errors::{BmiError, EngineResult};

/// Screening disclaimer shells show under every result.
pub const DISCLAIMER: &str = "BMI is a simple screening tool and doesn't directly measure body fat, \
health status, or distribution. Training level, age, ethnicity, and body composition matter. \
For personalized guidance, talk with your clinician.";

/// Narrative and tips for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightEntry {
    pub blurb: &'static str,
    pub tips: [&'static str; 3],
}

static INSIGHTS: Lazy<HashMap<CategoryLabel, InsightEntry>> = Lazy::new(|| {
    HashMap::from([
        (
            CategoryLabel::Underweight,
            InsightEntry {
                blurb: "Your BMI suggests you may be under the typical range for most adults.",
                tips: [
                    "Aim for nutrient-dense add-ons: nut butters, olive oil, seeds, and full‑fat yogurt.",
                    "Include resistance training 2–3×/week to support lean mass.",
                    "Discuss unintentional weight loss or appetite changes with a clinician.",
                ],
            },
        ),
        (
            CategoryLabel::Normal,
            InsightEntry {
                blurb: "Nice balance! Your BMI lands in the generally healthy range.",
                tips: [
                    "Keep a steady activity mix: 150+ minutes/week of moderate activity plus strength training.",
                    "Prioritize sleep (7–9 hrs) and fiber (25–35g/day).",
                    "Annual wellness checks are still a win—prevention > correction.",
                ],
            },
        ),
        (
            CategoryLabel::Overweight,
            InsightEntry {
                blurb: "Your BMI is above the typical range for most adults.",
                tips: [
                    "Start with small, durable adjustments: +1 veggie serving and +10 minutes of walking daily.",
                    "Strength training helps preserve muscle while changing body composition.",
                    "Consider tracking added sugars and liquid calories for two weeks to spot easy wins.",
                ],
            },
        ),
        (
            CategoryLabel::Obesity,
            InsightEntry {
                blurb: "Your BMI is in a range associated with higher health risks for many people.",
                tips: [
                    "Combine nutrition tweaks with progressive strength + brisk walking 3–5×/week.",
                    "Discuss options with your clinician—personalized guidance (including medications) may help.",
                    "Focus on habit stacking: pair an existing routine (morning coffee) with a 10‑minute walk.",
                ],
            },
        ),
    ])
});

/// Look up the insight entry for a category.
///
/// Fails only for [`CategoryLabel::Unknown`], which has no tips.
pub fn lookup_insight(category: CategoryLabel) -> EngineResult<&'static InsightEntry> {
    INSIGHTS
        .get(&category)
        .ok_or_else(|| BmiError::insight_not_found(category.display_name()))
}
