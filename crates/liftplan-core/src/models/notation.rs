// ABOUTME: Effort targets and the textual set notation used in prescriptions
// ABOUTME: Renders loads like "102.5×5 @ RPE 8" and effort ranges like "6-7"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target rating of perceived effort for a set
///
/// Serialized as a bare number for a single target or as `{low, high}` for a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpeTarget {
    /// One effort value, e.g. RPE 8.5
    Single(f64),
    /// Inclusive effort range, e.g. RPE 6-7
    Range {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
}

impl RpeTarget {
    /// Range constructor that orders its bounds
    #[must_use]
    pub fn range(a: f64, b: f64) -> Self {
        if a <= b {
            Self::Range { low: a, high: b }
        } else {
            Self::Range { low: b, high: a }
        }
    }

    /// Mean effort, used by the metrics engine
    #[must_use]
    pub fn mean(self) -> f64 {
        match self {
            Self::Single(value) => value,
            Self::Range { low, high } => (low + high) / 2.0,
        }
    }

    /// Every distinct value mentioned by the target
    #[must_use]
    pub fn values(self) -> Vec<f64> {
        match self {
            Self::Single(value) => vec![value],
            Self::Range { low, high } => vec![low, high],
        }
    }

    /// Target lowered by `points`, never below RPE 1
    #[must_use]
    pub fn eased(self, points: f64) -> Self {
        match self {
            Self::Single(value) => Self::Single((value - points).max(1.0)),
            Self::Range { low, high } => Self::range((low - points).max(1.0), (high - points).max(1.0)),
        }
    }
}

impl fmt::Display for RpeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => f.write_str(&format_number(*value)),
            Self::Range { low, high } => {
                write!(f, "{}-{}", format_number(*low), format_number(*high))
            }
        }
    }
}

/// Format a load or effort value without a trailing `.0`
///
/// Values are shown with at most two decimals: `100.0` prints as `100`,
/// `102.5` as `102.5` and `7.25` as `7.25`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_owned()
    }
}

/// Prescription line for a loaded set: `"<weight>×<reps> @ RPE <effort>"`
#[must_use]
pub fn set_line(weight: f64, reps: u32, rpe: RpeTarget) -> String {
    format!("{}×{reps} @ RPE {rpe}", format_number(weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims_zeroes() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(102.5), "102.5");
        assert_eq!(format_number(7.25), "7.25");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_rpe_target_display_and_mean() {
        assert_eq!(RpeTarget::Single(8.5).to_string(), "8.5");
        assert_eq!(RpeTarget::range(7.0, 6.0).to_string(), "6-7");
        assert_eq!(RpeTarget::range(6.0, 7.0).mean(), 6.5);
    }

    #[test]
    fn test_set_line() {
        assert_eq!(set_line(102.5, 5, RpeTarget::Single(8.0)), "102.5×5 @ RPE 8");
    }

    #[test]
    fn test_eased_never_below_one() {
        assert_eq!(RpeTarget::Single(1.5).eased(1.0), RpeTarget::Single(1.0));
        assert_eq!(RpeTarget::Single(9.0).eased(1.0), RpeTarget::Single(8.0));
    }
}
