//! # Time Calculations
//!
//! Each calculation follows the pattern:
//!
//! - input record (JSON-serializable)
//! - result record (JSON-serializable)
//! - `compute_*(input) -> CalcResult<result>`, a pure function
//!
//! ## Available Calculations
//!
//! - [`standard_time`] - Gun-drilling standard time breakdown

pub mod standard_time;

pub use standard_time::{
    compute_standard_time, compute_standard_time_with, cutting_time_per_feature,
    operations_per_feature, FormattedBreakdown, JobParameters, TimeBreakdown,
};
