//! # Standard Time Calculation
//!
//! Turns a resolved gun-drilling job into a breakdown of allowed machine
//! time.
//!
//! ## Method
//!
//! The drill is re-ground, re-set and inspected every `grinding_interval`
//! inches, so each feature is split into
//! `ceil(length_to_drill / grinding_interval)` operations. Setup, grinding and
//! inspection are charged per operation. Cutting time depends on length and
//! feed only. An FMJ port adds a flat surcharge for grouped materials.
//!
//! ## Example
//!
//! ```rust
//! use gundrill_core::calculations::standard_time::{compute_standard_time, JobParameters};
//!
//! let job = JobParameters::new("13CR", 0.299, 25.0, 0.8);
//! let result = compute_standard_time(&job).unwrap();
//!
//! assert_eq!(result.operations_per_feature, 3);
//! assert_eq!(result.cutting_time_per_feature, 31.25);
//! assert_eq!(result.total_standard_time, 73.25);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{default_grinding_interval, fmj_surcharge, MaterialGroup};
use crate::settings::{CustomTimePolicy, EngineSettings, TimeConstants};
use crate::units::{Hours, Inches, InchesPerMinute, Minutes};

/// Resolved parameters for one gun-drilling job.
///
/// Build one directly with [`JobParameters::new`] and the `with_*` methods,
/// or from raw form input with the [`resolver`](crate::resolver).
///
/// ## JSON Example
///
/// ```json
/// {
///   "material_grade": "25CR",
///   "drill_size_in": 0.375,
///   "length_to_drill_in": 10.0,
///   "feed_rate_ipm": 0.35,
///   "number_of_features": 2,
///   "include_fmj_port": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParameters {
    /// Material grade code as entered (e.g., "13CR")
    pub material_grade: String,

    /// Drill diameter (in)
    pub drill_size_in: f64,

    /// Length drilled per feature (in)
    pub length_to_drill_in: f64,

    /// Feed rate (in/min)
    pub feed_rate_ipm: f64,

    /// Number of drilled features, at least 1
    #[serde(default = "default_features")]
    pub number_of_features: u32,

    /// Re-grind interval replacing the material default (in).
    ///
    /// Zero, negative or non-finite values are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grinding_interval_override_in: Option<f64>,

    /// Add the FMJ port surcharge
    #[serde(default)]
    pub include_fmj_port: bool,

    /// Spindle speed (rev/min). Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<f64>,

    /// Job-specific setup time per operation (min), see [`CustomTimePolicy`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_setup_time: Option<f64>,

    /// Job-specific grinding time per operation (min), see [`CustomTimePolicy`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_grinding_time: Option<f64>,
}

fn default_features() -> u32 {
    1
}

impl JobParameters {
    /// Create a single-feature job without FMJ port or overrides.
    pub fn new(
        material_grade: impl Into<String>,
        drill_size_in: f64,
        length_to_drill_in: f64,
        feed_rate_ipm: f64,
    ) -> Self {
        JobParameters {
            material_grade: material_grade.into(),
            drill_size_in,
            length_to_drill_in,
            feed_rate_ipm,
            number_of_features: 1,
            grinding_interval_override_in: None,
            include_fmj_port: false,
            rpm: None,
            custom_setup_time: None,
            custom_grinding_time: None,
        }
    }

    pub fn with_features(mut self, number_of_features: u32) -> Self {
        self.number_of_features = number_of_features;
        self
    }

    pub fn with_grinding_interval_override(mut self, interval_in: f64) -> Self {
        self.grinding_interval_override_in = Some(interval_in);
        self
    }

    pub fn with_fmj_port(mut self, include: bool) -> Self {
        self.include_fmj_port = include;
        self
    }

    pub fn with_rpm(mut self, rpm: f64) -> Self {
        self.rpm = Some(rpm);
        self
    }

    pub fn with_custom_times(mut self, setup: Option<f64>, grinding: Option<f64>) -> Self {
        self.custom_setup_time = setup;
        self.custom_grinding_time = grinding;
        self
    }

    /// Group of the material grade, if it is a known grade
    pub fn material_group(&self) -> Option<MaterialGroup> {
        MaterialGroup::from_grade(&self.material_grade)
    }

    /// Re-grind interval in effect: a valid override, else the material default
    pub fn grinding_interval_in(&self) -> f64 {
        match self.grinding_interval_override_in {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => default_grinding_interval(self.material_group()),
        }
    }

    /// Check the positivity invariant.
    ///
    /// The resolver never produces values that fail this; it guards jobs built
    /// by hand or deserialized from elsewhere.
    pub fn validate(&self) -> CalcResult<()> {
        let required = [
            ("drill_size_in", self.drill_size_in),
            ("length_to_drill_in", self.length_to_drill_in),
            ("feed_rate_ipm", self.feed_rate_ipm),
        ];
        for (field, value) in required {
            require_positive(field, value)?;
        }
        if self.number_of_features == 0 {
            return Err(CalcError::invalid_parameter(
                "number_of_features",
                "0",
                "At least one feature is required",
            ));
        }
        let custom = [
            ("custom_setup_time", self.custom_setup_time),
            ("custom_grinding_time", self.custom_grinding_time),
        ];
        for (field, value) in custom {
            if let Some(v) = value {
                require_positive(field, v)?;
            }
        }
        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            "Must be a finite number greater than zero",
        ))
    }
}

/// Standard time breakdown. All times are minutes rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub cutting_time_per_feature: f64,
    pub total_cutting_time: f64,

    pub setup_time_per_operation: f64,
    pub total_setup_time: f64,

    pub grinding_time_per_operation: f64,
    pub total_grinding_time: f64,

    pub inspection_time_per_operation: f64,
    pub total_inspection_time: f64,

    /// FMJ port surcharge; absent unless requested for a grouped material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fmj_port_time: Option<f64>,

    pub total_standard_time: f64,

    /// Group the grade resolved to
    pub material_group: Option<MaterialGroup>,

    /// Re-grind interval used for the decomposition (in)
    pub grinding_interval_in: f64,

    pub operations_per_feature: u64,
    pub total_operations: u64,
    pub number_of_features: u32,
}

/// Breakdown rendered with exactly two decimals per time field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedBreakdown {
    pub cutting_time_per_feature: String,
    pub total_cutting_time: String,
    pub setup_time_per_operation: String,
    pub total_setup_time: String,
    pub grinding_time_per_operation: String,
    pub total_grinding_time: String,
    pub inspection_time_per_operation: String,
    pub total_inspection_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fmj_port_time: Option<String>,
    pub total_standard_time: String,
}

fn two_decimals(minutes: f64) -> String {
    format!("{:.2}", minutes)
}

impl TimeBreakdown {
    /// Total standard time in hours, for display
    pub fn total_standard_hours(&self) -> Hours {
        Minutes(self.total_standard_time).into()
    }

    /// Time fields as fixed two-decimal strings
    pub fn formatted(&self) -> FormattedBreakdown {
        FormattedBreakdown {
            cutting_time_per_feature: two_decimals(self.cutting_time_per_feature),
            total_cutting_time: two_decimals(self.total_cutting_time),
            setup_time_per_operation: two_decimals(self.setup_time_per_operation),
            total_setup_time: two_decimals(self.total_setup_time),
            grinding_time_per_operation: two_decimals(self.grinding_time_per_operation),
            total_grinding_time: two_decimals(self.total_grinding_time),
            inspection_time_per_operation: two_decimals(self.inspection_time_per_operation),
            total_inspection_time: two_decimals(self.total_inspection_time),
            fmj_port_time: self.fmj_port_time.map(two_decimals),
            total_standard_time: two_decimals(self.total_standard_time),
        }
    }
}

/// Cutting time for one feature: length over feed, unrounded
pub fn cutting_time_per_feature(length_to_drill_in: f64, feed_rate_ipm: f64) -> Minutes {
    Inches(length_to_drill_in) / InchesPerMinute(feed_rate_ipm)
}

/// Number of re-grind operations needed to drill one feature.
///
/// A partial final interval counts as a full operation.
pub fn operations_per_feature(length_to_drill_in: f64, grinding_interval_in: f64) -> CalcResult<u64> {
    require_positive("length_to_drill_in", length_to_drill_in)?;
    require_positive("grinding_interval_in", grinding_interval_in)?;

    let ops = (length_to_drill_in / grinding_interval_in).ceil();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if !ops.is_finite() || ops >= u64::MAX as f64 {
        return Err(CalcError::invalid_parameter(
            "grinding_interval_in",
            grinding_interval_in.to_string(),
            "Interval is too small for the drilled length",
        ));
    }
    Ok((ops as u64).max(1))
}

/// Per-operation times after applying the custom time policy
fn effective_constants(params: &JobParameters, settings: &EngineSettings) -> TimeConstants {
    let base = settings.time_constants;
    match settings.custom_time_policy {
        CustomTimePolicy::Ignore => base,
        CustomTimePolicy::Apply => TimeConstants {
            setup_time_per_operation: params
                .custom_setup_time
                .unwrap_or(base.setup_time_per_operation),
            grinding_time_per_operation: params
                .custom_grinding_time
                .unwrap_or(base.grinding_time_per_operation),
            ..base
        },
    }
}

/// Compute the standard time breakdown with default settings.
///
/// # Errors
///
/// `CalcError::InvalidParameter` when a length, feed or drill size is not
/// finite and positive, or `number_of_features` is zero.
pub fn compute_standard_time(params: &JobParameters) -> CalcResult<TimeBreakdown> {
    compute_standard_time_with(params, &EngineSettings::default())
}

/// Compute the standard time breakdown with explicit settings.
pub fn compute_standard_time_with(
    params: &JobParameters,
    settings: &EngineSettings,
) -> CalcResult<TimeBreakdown> {
    params.validate()?;
    settings.time_constants.validate()?;

    let group = params.material_group();
    let grinding_interval_in = params.grinding_interval_in();
    let ops_per_feature = operations_per_feature(params.length_to_drill_in, grinding_interval_in)?;
    let total_operations = ops_per_feature
        .checked_mul(u64::from(params.number_of_features))
        .ok_or_else(|| {
            CalcError::invalid_parameter(
                "number_of_features",
                params.number_of_features.to_string(),
                "Too many operations for the drilled length and feature count",
            )
        })?;
    let ops = total_operations as f64;
    let features = f64::from(params.number_of_features);

    let constants = effective_constants(params, settings);
    let setup = Minutes(constants.setup_time_per_operation);
    let grinding = Minutes(constants.grinding_time_per_operation);
    let inspection = Minutes(constants.inspection_time_per_operation);

    let total_setup = setup * ops;
    let total_grinding = grinding * ops;
    let total_inspection = inspection * ops;

    let cutting = cutting_time_per_feature(params.length_to_drill_in, params.feed_rate_ipm);
    let total_cutting = cutting * features;

    let fmj = if params.include_fmj_port {
        Minutes(fmj_surcharge(group))
    } else {
        Minutes(0.0)
    };

    let total = total_cutting + total_setup + total_grinding + total_inspection + fmj;

    debug!(
        grade = %params.material_grade,
        group = ?group,
        grinding_interval_in,
        operations_per_feature = ops_per_feature,
        total_operations,
        total_min = total.0,
        "standard time computed"
    );

    Ok(TimeBreakdown {
        cutting_time_per_feature: cutting.rounded().0,
        total_cutting_time: total_cutting.rounded().0,
        setup_time_per_operation: setup.rounded().0,
        total_setup_time: total_setup.rounded().0,
        grinding_time_per_operation: grinding.rounded().0,
        total_grinding_time: total_grinding.rounded().0,
        inspection_time_per_operation: inspection.rounded().0,
        total_inspection_time: total_inspection.rounded().0,
        fmj_port_time: (fmj.0 > 0.0).then(|| fmj.rounded().0),
        total_standard_time: total.rounded().0,
        material_group: group,
        grinding_interval_in,
        operations_per_feature: ops_per_feature,
        total_operations,
        number_of_features: params.number_of_features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> JobParameters {
        JobParameters::new("13CR", 0.299, 10.0, 0.8)
    }

    #[test]
    fn test_scenario_a_baseline() {
        let r = compute_standard_time(&scenario_a()).unwrap();
        assert_eq!(r.grinding_interval_in, 10.0);
        assert_eq!(r.operations_per_feature, 1);
        assert_eq!(r.cutting_time_per_feature, 12.5);
        assert_eq!(r.total_cutting_time, 12.5);
        assert_eq!(r.total_setup_time, 5.0);
        assert_eq!(r.total_grinding_time, 7.0);
        assert_eq!(r.total_inspection_time, 2.0);
        assert_eq!(r.fmj_port_time, None);
        assert_eq!(r.total_standard_time, 26.5);
    }

    #[test]
    fn test_scenario_b_partial_interval_counts() {
        let mut job = scenario_a();
        job.length_to_drill_in = 25.0;
        let r = compute_standard_time(&job).unwrap();
        assert_eq!(r.operations_per_feature, 3);
        assert_eq!(r.total_setup_time, 15.0);
        assert_eq!(r.total_grinding_time, 21.0);
        assert_eq!(r.total_inspection_time, 6.0);
        assert_eq!(r.cutting_time_per_feature, 31.25);
        assert_eq!(r.total_standard_time, 73.25);
    }

    #[test]
    fn test_scenario_c_high_chrome_with_fmj() {
        let mut job = scenario_a().with_fmj_port(true);
        job.material_grade = "25CR".to_string();
        let r = compute_standard_time(&job).unwrap();
        assert_eq!(r.material_group, Some(MaterialGroup::HighChrome));
        assert_eq!(r.grinding_interval_in, 5.0);
        assert_eq!(r.operations_per_feature, 2);
        assert_eq!(r.fmj_port_time, Some(45.0));
        // 12.5 cut + 2 × (5 + 7 + 2) + 45
        assert_eq!(r.total_standard_time, 85.5);
    }

    #[test]
    fn test_scenario_d_override_supersedes_default() {
        let job = scenario_a().with_grinding_interval_override(3.0);
        let r = compute_standard_time(&job).unwrap();
        assert_eq!(r.grinding_interval_in, 3.0);
        assert_eq!(r.operations_per_feature, 4);
        assert_eq!(r.total_standard_time, 68.5);
    }

    #[test]
    fn test_non_positive_override_is_ignored() {
        for bad in [0.0, -2.0, f64::NAN] {
            let job = scenario_a().with_grinding_interval_override(bad);
            let r = compute_standard_time(&job).unwrap();
            assert_eq!(r.grinding_interval_in, 10.0);
            assert_eq!(r.operations_per_feature, 1);
        }
    }

    #[test]
    fn test_low_chrome_fmj_surcharge() {
        let r = compute_standard_time(&scenario_a().with_fmj_port(true)).unwrap();
        assert_eq!(r.fmj_port_time, Some(30.0));
        assert_eq!(r.total_standard_time, 56.5);
    }

    #[test]
    fn test_fmj_omitted_for_ungrouped_material() {
        let mut job = scenario_a().with_fmj_port(true);
        job.material_grade = "Titanium".to_string();
        let r = compute_standard_time(&job).unwrap();
        assert_eq!(r.material_group, None);
        assert_eq!(r.fmj_port_time, None);
        assert_eq!(r.total_standard_time, 26.5);

        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("fmj_port_time"));
    }

    #[test]
    fn test_multiple_features_scale_operations() {
        let job = JobParameters::new("25CR", 0.375, 12.0, 0.35).with_features(3);
        let r = compute_standard_time(&job).unwrap();
        // ceil(12 / 5) = 3 per feature
        assert_eq!(r.operations_per_feature, 3);
        assert_eq!(r.total_operations, 9);
        assert_eq!(r.total_setup_time, 45.0);
        assert_eq!(r.total_grinding_time, 63.0);
        assert_eq!(r.total_inspection_time, 18.0);
        assert_eq!(r.cutting_time_per_feature, 34.29);
        assert_eq!(r.total_cutting_time, 102.86);
        assert_eq!(r.total_standard_time, 228.86);
    }

    #[test]
    fn test_invalid_feed_rate_rejected() {
        for bad in [0.0, -0.8, f64::INFINITY, f64::NAN] {
            let mut job = scenario_a();
            job.feed_rate_ipm = bad;
            let err = compute_standard_time(&job).unwrap_err();
            assert!(
                matches!(err, CalcError::InvalidParameter { ref field, .. } if field == "feed_rate_ipm"),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn test_zero_features_rejected() {
        let err = compute_standard_time(&scenario_a().with_features(0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn test_operations_per_feature_guard() {
        assert_eq!(operations_per_feature(10.0, 10.0).unwrap(), 1);
        assert_eq!(operations_per_feature(10.1, 10.0).unwrap(), 2);
        assert_eq!(operations_per_feature(0.5, 10.0).unwrap(), 1);
        assert!(operations_per_feature(10.0, 0.0).is_err());
        assert!(operations_per_feature(10.0, f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_operations_beyond_u64_rejected() {
        let err = operations_per_feature(1e21, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(operations_per_feature(2f64.powi(64), 1.0).is_err());
        assert_eq!(operations_per_feature(2f64.powi(53), 1.0).unwrap(), 1u64 << 53);
    }

    #[test]
    fn test_total_operations_overflow_rejected() {
        // 2^40 operations per feature, 2^30 features
        let mut job = scenario_a().with_grinding_interval_override(1.0).with_features(1 << 30);
        job.length_to_drill_in = 2f64.powi(40);
        let err = compute_standard_time(&job).unwrap_err();
        assert!(
            matches!(err, CalcError::InvalidParameter { ref field, .. } if field == "number_of_features"),
            "{:?}",
            err
        );
    }

    #[test]
    fn test_custom_times_ignored_by_default() {
        let job = scenario_a().with_custom_times(Some(15.0), Some(1.0));
        let r = compute_standard_time(&job).unwrap();
        assert_eq!(r.setup_time_per_operation, 5.0);
        assert_eq!(r.grinding_time_per_operation, 7.0);
        assert_eq!(r.total_standard_time, 26.5);
    }

    #[test]
    fn test_custom_times_applied_when_selected() {
        let settings = EngineSettings {
            custom_time_policy: CustomTimePolicy::Apply,
            ..EngineSettings::default()
        };
        let mut job = scenario_a().with_custom_times(Some(15.0), None);
        job.length_to_drill_in = 25.0;
        let r = compute_standard_time_with(&job, &settings).unwrap();
        assert_eq!(r.setup_time_per_operation, 15.0);
        assert_eq!(r.total_setup_time, 45.0);
        assert_eq!(r.grinding_time_per_operation, 7.0);
        assert_eq!(r.total_standard_time, 31.25 + 45.0 + 21.0 + 6.0);
    }

    #[test]
    fn test_configured_constants() {
        let settings = EngineSettings {
            time_constants: TimeConstants {
                setup_time_per_operation: 3.0,
                grinding_time_per_operation: 2.0,
                inspection_time_per_operation: 1.0,
            },
            ..EngineSettings::default()
        };
        let r = compute_standard_time_with(&scenario_a(), &settings).unwrap();
        assert_eq!(r.total_standard_time, 18.5);
    }

    #[test]
    fn test_formatted_two_decimals() {
        let job = scenario_a().with_fmj_port(true);
        let f = compute_standard_time(&job).unwrap().formatted();
        assert_eq!(f.cutting_time_per_feature, "12.50");
        assert_eq!(f.total_setup_time, "5.00");
        assert_eq!(f.fmj_port_time.as_deref(), Some("30.00"));
        assert_eq!(f.total_standard_time, "56.50");
    }

    #[test]
    fn test_hours() {
        let mut job = scenario_a().with_fmj_port(true);
        job.material_grade = "25CR".to_string();
        let r = compute_standard_time(&job).unwrap();
        assert_eq!(r.total_standard_hours(), Hours(85.5 / 60.0));
    }

    #[test]
    fn test_job_json_defaults() {
        let json = r#"{
            "material_grade": "41XX",
            "drill_size_in": 0.21,
            "length_to_drill_in": 8.0,
            "feed_rate_ipm": 0.8
        }"#;
        let job: JobParameters = serde_json::from_str(json).unwrap();
        assert_eq!(job.number_of_features, 1);
        assert!(!job.include_fmj_port);
        assert_eq!(job.grinding_interval_override_in, None);
        assert_eq!(job.material_group(), Some(MaterialGroup::LowChrome));
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        fn grade_code() -> impl Strategy<Value = &'static str> {
            prop::sample::select(vec!["13CR", "S13CR", "41XX", "25CR", "INC-718", "INC-925", "4340"])
        }

        proptest! {
            #[test]
            fn cutting_time_is_length_over_feed(length in 0.01f64..500.0, feed in 0.01f64..20.0) {
                prop_assert_eq!(cutting_time_per_feature(length, feed).0, length / feed);
            }

            #[test]
            fn operations_match_ceiling(length in 0.01f64..500.0, interval in 0.1f64..50.0) {
                let ops = operations_per_feature(length, interval).unwrap();
                prop_assert_eq!(ops as f64, (length / interval).ceil());
                prop_assert!(ops >= 1);
            }

            #[test]
            fn total_non_decreasing_in_features(
                grade in grade_code(),
                length in 0.1f64..100.0,
                feed in 0.05f64..5.0,
                n in 1u32..50,
                fmj in any::<bool>(),
            ) {
                let job = JobParameters::new(grade, 0.299, length, feed).with_fmj_port(fmj);
                let fewer = compute_standard_time(&job.clone().with_features(n)).unwrap();
                let more = compute_standard_time(&job.with_features(n + 1)).unwrap();
                prop_assert!(more.total_standard_time >= fewer.total_standard_time);
            }

            #[test]
            fn computation_is_idempotent(
                grade in grade_code(),
                length in 0.1f64..100.0,
                feed in 0.05f64..5.0,
                n in 1u32..20,
                override_in in proptest::option::of(-5.0f64..20.0),
            ) {
                let mut job = JobParameters::new(grade, 0.375, length, feed).with_features(n);
                job.grinding_interval_override_in = override_in;
                let first = compute_standard_time(&job).unwrap();
                let second = compute_standard_time(&job).unwrap();
                prop_assert_eq!(
                    first.total_standard_time.to_bits(),
                    second.total_standard_time.to_bits()
                );
                prop_assert_eq!(first, second);
            }

            #[test]
            fn fmj_present_iff_requested_and_grouped(grade in grade_code(), fmj in any::<bool>()) {
                let job = JobParameters::new(grade, 0.299, 10.0, 0.8).with_fmj_port(fmj);
                let r = compute_standard_time(&job).unwrap();
                let expected = match (fmj, MaterialGroup::from_grade(grade)) {
                    (true, Some(MaterialGroup::LowChrome)) => Some(30.0),
                    (true, Some(MaterialGroup::HighChrome)) => Some(45.0),
                    _ => None,
                };
                prop_assert_eq!(r.fmj_port_time, expected);
            }

            #[test]
            fn valid_override_always_wins(grade in grade_code(), length in 0.5f64..100.0, interval in 0.5f64..30.0) {
                let job = JobParameters::new(grade, 0.299, length, 0.8)
                    .with_grinding_interval_override(interval);
                let r = compute_standard_time(&job).unwrap();
                prop_assert_eq!(r.grinding_interval_in, interval);
                prop_assert_eq!(r.operations_per_feature as f64, (length / interval).ceil());
            }
        }
    }
}
