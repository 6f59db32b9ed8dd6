//! # Materials
//!
//! Material grades and the group they belong to. The group drives every
//! material-dependent value the engine uses: the default re-grind interval,
//! the FMJ port surcharge and the RPM/feed suggestions.
//!
//! ## Material Groups
//!
//! - **Low Chrome**: 13CR, S13CR, 41XX
//! - **High Chrome**: 25CR, INC-718, INC-925
//!
//! Any other grade is ungrouped.
//!
//! ## Example
//!
//! ```rust
//! use gundrill_core::materials::MaterialGroup;
//!
//! assert_eq!(MaterialGroup::from_grade("25CR"), Some(MaterialGroup::HighChrome));
//! assert_eq!(MaterialGroup::from_grade("s13cr"), Some(MaterialGroup::LowChrome));
//! assert_eq!(MaterialGroup::from_grade("Titanium"), None);
//! ```

pub mod drill_table;
pub mod fmj;

pub use drill_table::{
    default_grinding_interval, entries_for_group, recommended_cutting, CuttingRecommendation,
    DrillTableEntry,
};
pub use fmj::{fmj_port_plan, fmj_surcharge, FmjOperation, FmjPortPlan};

use serde::{Deserialize, Serialize};

/// Material group classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialGroup {
    /// Low chrome steels (13CR, S13CR, 41XX)
    LowChrome,
    /// High chrome and nickel alloys (25CR, INC-718, INC-925)
    HighChrome,
}

impl MaterialGroup {
    /// Both groups, for listing and iteration
    pub const ALL: [MaterialGroup; 2] = [MaterialGroup::LowChrome, MaterialGroup::HighChrome];

    /// Resolve a grade code to its group.
    ///
    /// Surrounding whitespace is ignored and matching is ASCII
    /// case-insensitive. Unknown grades return `None`.
    pub fn from_grade(grade: &str) -> Option<Self> {
        let normalized = grade.trim().to_ascii_uppercase();
        KNOWN_GRADES
            .iter()
            .find(|g| g.code == normalized)
            .map(|g| g.group)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialGroup::LowChrome => "Low Chrome",
            MaterialGroup::HighChrome => "High Chrome",
        }
    }
}

impl std::fmt::Display for MaterialGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A material grade code and the group it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialGrade {
    /// Canonical grade code (e.g., "13CR")
    pub code: &'static str,
    /// Group membership
    pub group: MaterialGroup,
}

/// Every grade the calculator recognizes, in the order the form lists them
pub const KNOWN_GRADES: [MaterialGrade; 6] = [
    MaterialGrade { code: "13CR", group: MaterialGroup::LowChrome },
    MaterialGrade { code: "25CR", group: MaterialGroup::HighChrome },
    MaterialGrade { code: "41XX", group: MaterialGroup::LowChrome },
    MaterialGrade { code: "INC-718", group: MaterialGroup::HighChrome },
    MaterialGrade { code: "INC-925", group: MaterialGroup::HighChrome },
    MaterialGrade { code: "S13CR", group: MaterialGroup::LowChrome },
];

/// Grades belonging to one group
pub fn grades_in_group(group: MaterialGroup) -> impl Iterator<Item = &'static MaterialGrade> {
    KNOWN_GRADES.iter().filter(move |g| g.group == group)
}
