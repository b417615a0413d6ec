// ABOUTME: Numeric sanitizers applied at every input boundary of the engine
// ABOUTME: Turn non-finite or negative values into zero or documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! Every helper in the engine funnels raw numbers through these functions
//! before doing arithmetic, so NaN and infinities never reach a prescription.

/// Finite, non-negative value or zero
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Finite, strictly positive value or the given fallback
#[must_use]
pub fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Value clamped into `[min, max]`, with non-finite input mapped to `min`
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

/// Round a non-negative real to a whole count, treating garbage as zero
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: bounded above and non-negative
pub fn whole_count(value: f64) -> u32 {
    let safe = non_negative(value).round();
    if safe >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        safe as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_rejects_garbage() {
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(f64::INFINITY), 0.0);
        assert_eq!(non_negative(-5.0), 0.0);
        assert_eq!(non_negative(42.5), 42.5);
    }

    #[test]
    fn test_positive_or_uses_fallback() {
        assert_eq!(positive_or(0.0, 100.0), 100.0);
        assert_eq!(positive_or(f64::NEG_INFINITY, 100.0), 100.0);
        assert_eq!(positive_or(80.0, 100.0), 80.0);
    }

    #[test]
    fn test_whole_count_rounds() {
        assert_eq!(whole_count(5.6), 6);
        assert_eq!(whole_count(-3.0), 0);
        assert_eq!(whole_count(f64::NAN), 0);
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(1.2, 0.5, 0.99), 0.99);
        assert_eq!(clamp_finite(f64::NAN, 0.5, 0.99), 0.5);
    }
}
