//! # Unit Types
//!
//! Newtype wrappers for the handful of units a gun-drilling estimate deals
//! with. They keep length, feed and time from being mixed up while still
//! serializing as plain numbers.
//!
//! - Length: inches (in)
//! - Feed: inches per minute (in/min)
//! - Time: minutes (min), hours (hr)
//!
//! ## Example
//!
//! ```rust
//! use gundrill_core::units::{Hours, Inches, InchesPerMinute, Minutes};
//!
//! let cut: Minutes = Inches(10.0) / InchesPerMinute(0.8);
//! assert_eq!(cut.0, 12.5);
//!
//! let hours: Hours = Minutes(90.0).into();
//! assert_eq!(hours.0, 1.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Feed
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Feed rate in inches per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InchesPerMinute(pub f64);

/// Drilling a length at a feed rate takes time
impl Div<InchesPerMinute> for Inches {
    type Output = Minutes;
    fn div(self, rhs: InchesPerMinute) -> Self::Output {
        Minutes(self.0 / rhs.0)
    }
}

impl Inches {
    /// Drill size in thousandths of an inch, rounded to the nearest mil
    pub fn thousandths(self) -> i64 {
        (self.0 * 1000.0).round() as i64
    }
}

// ============================================================================
// Time
// ============================================================================

/// Time in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

/// Time in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

impl From<Minutes> for Hours {
    fn from(min: Minutes) -> Self {
        Hours(min.0 / 60.0)
    }
}

impl From<Hours> for Minutes {
    fn from(hr: Hours) -> Self {
        Minutes(hr.0 * 60.0)
    }
}

impl Minutes {
    /// Round to two decimal places, the precision every reported time uses
    pub fn rounded(self) -> Self {
        Minutes((self.0 * 100.0).round() / 100.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(InchesPerMinute);
impl_arithmetic!(Minutes);
impl_arithmetic!(Hours);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_over_feed_is_minutes() {
        let t = Inches(25.0) / InchesPerMinute(0.8);
        assert_eq!(t, Minutes(31.25));
    }

    #[test]
    fn test_minutes_to_hours() {
        let hr: Hours = Minutes(85.5).into();
        assert_eq!(hr.0, 1.425);
        let back: Minutes = Hours(2.0).into();
        assert_eq!(back.0, 120.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Minutes(12.345_678).rounded(), Minutes(12.35));
        assert_eq!(Minutes(26.5).rounded(), Minutes(26.5));
        assert_eq!(Minutes(1.0 / 3.0).rounded(), Minutes(0.33));
    }

    #[test]
    fn test_thousandths() {
        assert_eq!(Inches(0.375).thousandths(), 375);
        assert_eq!(Inches(0.21).thousandths(), 210);
        assert_eq!(Inches(0.2104).thousandths(), 210);
    }

    #[test]
    fn test_arithmetic() {
        let a = Minutes(10.0);
        let b = Minutes(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let len = Inches(12.5);
        let json = serde_json::to_string(&len).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Inches = serde_json::from_str(&json).unwrap();
        assert_eq!(len, roundtrip);
    }
}
