//! FMJ port operations.
//!
//! Porting is costed as a flat surcharge per material group. The plan lists
//! the machining steps the surcharge covers so an operator can see what it
//! stands for; the engine only reads `total_time_min`.

use serde::Serialize;

use super::MaterialGroup;

/// One machining step of the FMJ port
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FmjOperation {
    pub name: &'static str,
    pub length_in: f64,
    pub rpm: f64,
    pub feed_rate_ipm: f64,
    pub time_min: f64,
}

/// FMJ port steps and flat surcharge for a material group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FmjPortPlan {
    pub group: MaterialGroup,
    pub rough: FmjOperation,
    pub finish: FmjOperation,
    pub thread_mill: FmjOperation,
    /// Flat surcharge added to the standard time (min)
    pub total_time_min: f64,
}

impl FmjPortPlan {
    /// The steps in machining order
    pub fn operations(&self) -> [&FmjOperation; 3] {
        [&self.rough, &self.finish, &self.thread_mill]
    }
}

const LOW_CHROME_PLAN: FmjPortPlan = FmjPortPlan {
    group: MaterialGroup::LowChrome,
    rough: FmjOperation { name: "Rough FMJ", length_in: 1.4, rpm: 100.0, feed_rate_ipm: 0.2, time_min: 8.0 },
    finish: FmjOperation { name: "Finish FMJ", length_in: 1.402, rpm: 100.0, feed_rate_ipm: 0.15, time_min: 10.0 },
    thread_mill: FmjOperation { name: "Thread Mill", length_in: 0.65, rpm: 2100.0, feed_rate_ipm: 0.6, time_min: 6.0 },
    total_time_min: 30.0,
};

const HIGH_CHROME_PLAN: FmjPortPlan = FmjPortPlan {
    group: MaterialGroup::HighChrome,
    rough: FmjOperation { name: "Rough FMJ", length_in: 1.4, rpm: 100.0, feed_rate_ipm: 0.15, time_min: 10.0 },
    finish: FmjOperation { name: "Finish FMJ", length_in: 1.402, rpm: 100.0, feed_rate_ipm: 0.12, time_min: 15.0 },
    thread_mill: FmjOperation { name: "Thread Mill", length_in: 0.65, rpm: 1100.0, feed_rate_ipm: 0.35, time_min: 10.0 },
    total_time_min: 45.0,
};

/// FMJ port plan for a group
pub fn fmj_port_plan(group: MaterialGroup) -> &'static FmjPortPlan {
    match group {
        MaterialGroup::LowChrome => &LOW_CHROME_PLAN,
        MaterialGroup::HighChrome => &HIGH_CHROME_PLAN,
    }
}

/// Flat FMJ surcharge in minutes; zero for ungrouped grades
pub fn fmj_surcharge(group: Option<MaterialGroup>) -> f64 {
    group.map_or(0.0, |g| fmj_port_plan(g).total_time_min)
}
