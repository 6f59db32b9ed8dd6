//! # Parameter Resolver
//!
//! Converts raw form input into [`JobParameters`].
//!
//! Two variants share the same parsing:
//!
//! - [`resolve_or_default`] never fails. Missing or unusable numbers are
//!   silently replaced by the shop defaults so an estimate is always
//!   produced from partially filled forms.
//! - [`resolve_strict`] reports the first missing or unusable value instead.
//!
//! [`resolve`] picks one based on a [`ResolvePolicy`].
//!
//! ## Example
//!
//! ```rust
//! use gundrill_core::resolver::{resolve_or_default, RawJobInput};
//!
//! let raw = RawJobInput {
//!     material_grade: "13CR".to_string(),
//!     drill_size: "0.375\"".to_string(),
//!     length_to_drill: "12".to_string(),
//!     ..RawJobInput::default()
//! };
//!
//! let job = resolve_or_default(&raw);
//! assert_eq!(job.drill_size_in, 0.375);
//! // feed rate comes from the drill table for 13CR at 0.375"
//! assert_eq!(job.feed_rate_ipm, 0.8);
//! assert_eq!(job.rpm, Some(1800.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::JobParameters;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{recommended_cutting, CuttingRecommendation, MaterialGroup};
use crate::settings::ResolvePolicy;

/// Drill size used when none is given (in)
pub const DEFAULT_DRILL_SIZE_IN: f64 = 0.299;
/// Length to drill used when none is given (in)
pub const DEFAULT_LENGTH_TO_DRILL_IN: f64 = 5.0;
/// Feed rate used when none is given and the table has no suggestion (in/min)
pub const DEFAULT_FEED_RATE_IPM: f64 = 0.8;
/// Feature count used when none is given
pub const DEFAULT_NUMBER_OF_FEATURES: u32 = 1;

/// Job fields exactly as entered on the form. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJobInput {
    pub job_id: String,
    pub part_name: String,
    pub material_grade: String,
    pub drill_size: String,
    pub length_to_drill: String,
    pub rpm: String,
    pub feed_rate: String,
    pub number_of_features: String,
    pub grinding_interval_override: String,
    pub include_fmj_port: bool,
    pub custom_setup_time: String,
    pub custom_grinding_time: String,
}

/// Outcome of parsing one form field
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field<T> {
    Missing,
    Invalid,
    Value(T),
}

impl<T> Field<T> {
    fn value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Missing | Field::Invalid => None,
        }
    }
}

/// Strip whitespace and an optional inch unit (`0.375"`, `12 in`)
fn strip_units(raw: &str) -> &str {
    let s = raw.trim();
    s.strip_suffix('"')
        .or_else(|| s.strip_suffix("in"))
        .unwrap_or(s)
        .trim_end()
}

/// Parse a strictly positive, finite number
fn parse_positive(raw: &str) -> Field<f64> {
    let s = strip_units(raw);
    if s.is_empty() {
        return Field::Missing;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Field::Value(v),
        _ => Field::Invalid,
    }
}

/// Parse a feature count; decimals are truncated toward zero
fn parse_count(raw: &str) -> Field<u32> {
    let s = raw.trim();
    if s.is_empty() {
        return Field::Missing;
    }
    if let Ok(n) = s.parse::<u32>() {
        return if n >= 1 { Field::Value(n) } else { Field::Invalid };
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 1.0 => Field::Value(v.trunc().min(f64::from(u32::MAX)) as u32),
        _ => Field::Invalid,
    }
}

/// Parse a positive inch value as the form accepts it (`0.375`, `0.375"`, `12 in`).
///
/// Returns `None` for blank, unparseable, non-finite or non-positive text.
pub fn parse_inches(raw: &str) -> Option<f64> {
    parse_positive(raw).value()
}

fn or_default<T: Copy + std::fmt::Debug>(field: Field<T>, name: &str, raw: &str, default: T) -> T {
    match field {
        Field::Value(v) => v,
        Field::Missing | Field::Invalid => {
            debug!(field = name, raw, default = ?default, "substituting default");
            default
        }
    }
}

fn suggestion_for(group: Option<MaterialGroup>, drill_size_in: f64) -> Option<CuttingRecommendation> {
    group.and_then(|g| recommended_cutting(g, drill_size_in))
}

/// Resolve raw input, replacing anything missing or unusable with defaults.
///
/// Feed rate falls back to the drill table suggestion for the material group
/// and drill size before the fixed default. RPM falls back to the table
/// suggestion or stays empty. Optional overrides that do not parse to a
/// positive number are dropped.
pub fn resolve_or_default(raw: &RawJobInput) -> JobParameters {
    let material_grade = raw.material_grade.trim().to_string();
    let group = MaterialGroup::from_grade(&material_grade);

    let drill_size_in = or_default(
        parse_positive(&raw.drill_size),
        "drill_size",
        &raw.drill_size,
        DEFAULT_DRILL_SIZE_IN,
    );
    let length_to_drill_in = or_default(
        parse_positive(&raw.length_to_drill),
        "length_to_drill",
        &raw.length_to_drill,
        DEFAULT_LENGTH_TO_DRILL_IN,
    );
    let number_of_features = or_default(
        parse_count(&raw.number_of_features),
        "number_of_features",
        &raw.number_of_features,
        DEFAULT_NUMBER_OF_FEATURES,
    );

    let suggestion = suggestion_for(group, drill_size_in);
    let feed_default = suggestion.map_or(DEFAULT_FEED_RATE_IPM, |s| s.feed_rate_ipm);
    let feed_rate_ipm = or_default(
        parse_positive(&raw.feed_rate),
        "feed_rate",
        &raw.feed_rate,
        feed_default,
    );
    let rpm = parse_positive(&raw.rpm)
        .value()
        .or_else(|| suggestion.map(|s| s.rpm));

    JobParameters {
        material_grade,
        drill_size_in,
        length_to_drill_in,
        feed_rate_ipm,
        number_of_features,
        grinding_interval_override_in: parse_positive(&raw.grinding_interval_override).value(),
        include_fmj_port: raw.include_fmj_port,
        rpm,
        custom_setup_time: parse_positive(&raw.custom_setup_time).value(),
        custom_grinding_time: parse_positive(&raw.custom_grinding_time).value(),
    }
}

fn required(raw: &str, name: &str) -> CalcResult<f64> {
    match parse_positive(raw) {
        Field::Value(v) => Ok(v),
        Field::Missing => Err(CalcError::missing_field(name)),
        Field::Invalid => Err(CalcError::invalid_parameter(
            name,
            raw.trim(),
            "Must be a number greater than zero",
        )),
    }
}

fn optional(raw: &str, name: &str) -> CalcResult<Option<f64>> {
    match parse_positive(raw) {
        Field::Value(v) => Ok(Some(v)),
        Field::Missing => Ok(None),
        Field::Invalid => Err(CalcError::invalid_parameter(
            name,
            raw.trim(),
            "Must be a number greater than zero when given",
        )),
    }
}

/// Resolve raw input, failing on the first missing or unusable value.
///
/// The grade must be a known grade. A missing feed rate is still filled from
/// the drill table when the table lists the drill size; a missing feature
/// count is 1.
pub fn resolve_strict(raw: &RawJobInput) -> CalcResult<JobParameters> {
    let material_grade = raw.material_grade.trim();
    if material_grade.is_empty() {
        return Err(CalcError::missing_field("material_grade"));
    }
    let group = MaterialGroup::from_grade(material_grade)
        .ok_or_else(|| CalcError::material_not_found(material_grade))?;

    let drill_size_in = required(&raw.drill_size, "drill_size")?;
    let length_to_drill_in = required(&raw.length_to_drill, "length_to_drill")?;

    let suggestion = recommended_cutting(group, drill_size_in);
    let feed_rate_ipm = match parse_positive(&raw.feed_rate) {
        Field::Missing => suggestion
            .map(|s| s.feed_rate_ipm)
            .ok_or_else(|| CalcError::missing_field("feed_rate"))?,
        _ => required(&raw.feed_rate, "feed_rate")?,
    };

    let number_of_features = match parse_count(&raw.number_of_features) {
        Field::Value(n) => n,
        Field::Missing => DEFAULT_NUMBER_OF_FEATURES,
        Field::Invalid => {
            return Err(CalcError::invalid_parameter(
                "number_of_features",
                raw.number_of_features.trim(),
                "Must be a whole number of at least 1",
            ))
        }
    };

    let rpm = optional(&raw.rpm, "rpm")?.or_else(|| suggestion.map(|s| s.rpm));

    Ok(JobParameters {
        material_grade: material_grade.to_string(),
        drill_size_in,
        length_to_drill_in,
        feed_rate_ipm,
        number_of_features,
        grinding_interval_override_in: optional(
            &raw.grinding_interval_override,
            "grinding_interval_override",
        )?,
        include_fmj_port: raw.include_fmj_port,
        rpm,
        custom_setup_time: optional(&raw.custom_setup_time, "custom_setup_time")?,
        custom_grinding_time: optional(&raw.custom_grinding_time, "custom_grinding_time")?,
    })
}

/// Resolve raw input with the selected policy.
///
/// Under [`ResolvePolicy::Lenient`] this always succeeds.
pub fn resolve(raw: &RawJobInput, policy: ResolvePolicy) -> CalcResult<JobParameters> {
    match policy {
        ResolvePolicy::Lenient => Ok(resolve_or_default(raw)),
        ResolvePolicy::Strict => resolve_strict(raw),
    }
}
