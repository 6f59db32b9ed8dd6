//! # Engine Settings
//!
//! Tunable values for the calculation engine and resolver. Every field has a
//! default that reproduces the shop's standard estimate, so an empty settings
//! file (`{}`) is valid.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "time_constants": {
//!     "setup_time_per_operation": 5.0,
//!     "grinding_time_per_operation": 7.0,
//!     "inspection_time_per_operation": 2.0
//!   },
//!   "custom_time_policy": "Ignore",
//!   "resolve_policy": "Lenient"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default setup time per grinding-interval operation (min)
pub const DEFAULT_SETUP_TIME_PER_OPERATION: f64 = 5.0;
/// Default grinding time per grinding-interval operation (min)
pub const DEFAULT_GRINDING_TIME_PER_OPERATION: f64 = 7.0;
/// Default inspection time per grinding-interval operation (min)
pub const DEFAULT_INSPECTION_TIME_PER_OPERATION: f64 = 2.0;

/// Fixed minutes charged for every grinding-interval operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConstants {
    pub setup_time_per_operation: f64,
    pub grinding_time_per_operation: f64,
    pub inspection_time_per_operation: f64,
}

impl Default for TimeConstants {
    fn default() -> Self {
        TimeConstants {
            setup_time_per_operation: DEFAULT_SETUP_TIME_PER_OPERATION,
            grinding_time_per_operation: DEFAULT_GRINDING_TIME_PER_OPERATION,
            inspection_time_per_operation: DEFAULT_INSPECTION_TIME_PER_OPERATION,
        }
    }
}

impl TimeConstants {
    /// Every constant must be finite and non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("setup_time_per_operation", self.setup_time_per_operation),
            ("grinding_time_per_operation", self.grinding_time_per_operation),
            ("inspection_time_per_operation", self.inspection_time_per_operation),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_parameter(
                    field,
                    value.to_string(),
                    "Per-operation time must be a finite, non-negative number of minutes",
                ));
            }
        }
        Ok(())
    }
}

/// Whether job-level custom setup/grinding times replace the constants.
///
/// The shop form collects custom times but the standard estimate has never
/// applied them; `Ignore` keeps that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CustomTimePolicy {
    /// Custom times are carried on the job but not used
    #[default]
    Ignore,
    /// Custom times replace the per-operation setup/grinding constants
    Apply,
}

/// How raw form input is turned into job parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolvePolicy {
    /// Missing or unparseable values fall back to defaults
    #[default]
    Lenient,
    /// Missing or unparseable required values are errors
    Strict,
}

/// Engine and resolver configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub time_constants: TimeConstants,
    pub custom_time_policy: CustomTimePolicy,
    pub resolve_policy: ResolvePolicy,
}
