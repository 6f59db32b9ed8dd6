//! Drill parameter table.
//!
//! Recommended spindle speed and feed per material group and drill size.
//! Only exact sizes are listed; there is no interpolation between them, the
//! table is a starting hint for the operator rather than a cutting model.
//! Sizes are keyed in thousandths of an inch, so `0.21` and `0.210` are the
//! same key.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::MaterialGroup;
use crate::units::Inches;

/// Default re-grind interval for High Chrome (inches)
pub const HIGH_CHROME_GRINDING_INTERVAL_IN: f64 = 5.0;

/// Default re-grind interval for Low Chrome and ungrouped grades (inches)
pub const STANDARD_GRINDING_INTERVAL_IN: f64 = 10.0;

/// Recommended cutting parameters for a drill size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuttingRecommendation {
    /// Spindle speed (rev/min)
    pub rpm: f64,
    /// Feed rate (in/min)
    pub feed_rate_ipm: f64,
}

/// One row of the drill table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillTableEntry {
    pub group: MaterialGroup,
    pub drill_size_in: f64,
    pub recommendation: CuttingRecommendation,
    /// Reference drilling length the time study used (in)
    pub reference_length_in: f64,
    /// Reference drilling time for that length (min)
    pub reference_time_min: f64,
}

const fn row(
    group: MaterialGroup,
    drill_size_in: f64,
    rpm: f64,
    feed_rate_ipm: f64,
    reference_length_in: f64,
    reference_time_min: f64,
) -> DrillTableEntry {
    DrillTableEntry {
        group,
        drill_size_in,
        recommendation: CuttingRecommendation { rpm, feed_rate_ipm },
        reference_length_in,
        reference_time_min,
    }
}

const ROWS: [DrillTableEntry; 4] = [
    row(MaterialGroup::LowChrome, 0.375, 1800.0, 0.8, 0.73, 3.0),
    row(MaterialGroup::LowChrome, 0.21, 1800.0, 0.8, 1.3, 3.0),
    row(MaterialGroup::HighChrome, 0.375, 1100.0, 0.35, 0.73, 5.0),
    row(MaterialGroup::HighChrome, 0.21, 1100.0, 0.35, 1.3, 5.0),
];

static DRILL_TABLE: Lazy<HashMap<(MaterialGroup, i64), DrillTableEntry>> = Lazy::new(|| {
    ROWS.iter()
        .map(|entry| ((entry.group, Inches(entry.drill_size_in).thousandths()), *entry))
        .collect()
});

/// Look up the recommended RPM and feed for an exact drill size.
///
/// Returns `None` when the size is not in the table for that group.
pub fn recommended_cutting(group: MaterialGroup, drill_size_in: f64) -> Option<CuttingRecommendation> {
    if !drill_size_in.is_finite() {
        return None;
    }
    DRILL_TABLE
        .get(&(group, Inches(drill_size_in).thousandths()))
        .map(|entry| entry.recommendation)
}

/// Default re-grind interval in inches for a group (or ungrouped grade)
pub fn default_grinding_interval(group: Option<MaterialGroup>) -> f64 {
    match group {
        Some(MaterialGroup::HighChrome) => HIGH_CHROME_GRINDING_INTERVAL_IN,
        Some(MaterialGroup::LowChrome) | None => STANDARD_GRINDING_INTERVAL_IN,
    }
}

/// All table rows for a group, smallest drill first
pub fn entries_for_group(group: MaterialGroup) -> Vec<DrillTableEntry> {
    let mut entries: Vec<_> = DRILL_TABLE
        .values()
        .filter(|e| e.group == group)
        .copied()
        .collect();
    entries.sort_by(|a, b| a.drill_size_in.total_cmp(&b.drill_size_in));
    entries
}
