//! Terminal rendering of a [`BmiReport`].

use std::fmt::{self, Write};

use bmi_core::category::{gauge_segments, CategoryLabel, GAUGE_MAX, GAUGE_MIN, GAUGE_TICKS};
use bmi_core::{BmiReport, DISCLAIMER};

/// Gauge width in terminal cells (two cells per BMI unit)
const GAUGE_WIDTH: usize = 60;

const RULE: &str = "═══════════════════════════════════════════════════════════════";

fn segment_fill(category: CategoryLabel) -> char {
    match category {
        CategoryLabel::Underweight => '-',
        CategoryLabel::Normal => '=',
        CategoryLabel::Overweight => '~',
        CategoryLabel::Obesity => '#',
        CategoryLabel::Unknown => '?',
    }
}

/// Draw the 10-40 gauge bar with a `|` marker at `position` (0..=1).
pub fn gauge_bar(position: f64) -> String {
    let cells_per_unit = GAUGE_WIDTH as f64 / (GAUGE_MAX - GAUGE_MIN);
    let mut cells: Vec<char> = gauge_segments()
        .into_iter()
        .flat_map(|segment| {
            let width = (segment.weight * cells_per_unit).round() as usize;
            std::iter::repeat(segment_fill(segment.category)).take(width)
        })
        .collect();
    cells.resize(GAUGE_WIDTH, '#');

    let marker = (position.clamp(0.0, 1.0) * (GAUGE_WIDTH - 1) as f64).round() as usize;
    cells[marker] = '|';
    cells.into_iter().collect()
}

/// Tick labels positioned under the gauge bar.
fn gauge_ticks() -> String {
    let mut line = vec![' '; GAUGE_WIDTH + 4];
    for tick in GAUGE_TICKS {
        let at = ((tick - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN) * (GAUGE_WIDTH - 1) as f64).round() as usize;
        let label = format!("{}", tick);
        let start = at.min(line.len() - label.len());
        for (offset, ch) in label.chars().enumerate() {
            line[start + offset] = ch;
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Human-readable summary of a report.
pub fn render_text(report: &BmiReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}  Your BMI: {:.1}", report.icon, report.result.value)?;
    writeln!(out, "  Category: {} ({})", report.category_name, report.color)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(
        out,
        "  Height:   {} ft {} in ({:.4} m)",
        report.input.feet, report.input.inches, report.metric.height_m.0
    )?;
    writeln!(
        out,
        "  Weight:   {:.1} lb ({:.4} kg)",
        report.input.pounds, report.metric.weight_kg.0
    )?;
    writeln!(out)?;
    writeln!(out, "  {}", gauge_bar(report.gauge_position))?;
    writeln!(out, "  {}", gauge_ticks())?;
    writeln!(out)?;
    writeln!(
        out,
        "For your height, a weight between {}–{} lb corresponds to a BMI of 18.5–24.9.",
        report.healthy_range.low_pounds, report.healthy_range.high_pounds
    )?;
    writeln!(out)?;
    writeln!(out, "{} Insights", report.icon)?;
    writeln!(out, "  {}", report.blurb)?;
    writeln!(out)?;
    writeln!(out, "Tips you can try this week:")?;
    for tip in &report.tips {
        writeln!(out, "  - {}", tip)?;
    }
    writeln!(out)?;
    writeln!(out, "⚠️  {}", DISCLAIMER)?;
    Ok(out)
}
