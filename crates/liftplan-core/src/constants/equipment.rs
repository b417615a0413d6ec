// ABOUTME: Achievable equipment weights and numeric rounding steps
// ABOUTME: Dumbbell ladder used for equipment rounding and accessory loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

/// Ascending list of achievable dumbbell weights (kg)
pub const DUMBBELL_STEPS: [f64; 16] = [
    5.0, 7.0, 9.0, 13.0, 15.0, 18.0, 20.0, 22.0, 25.0, 27.0, 29.0, 32.0, 34.0, 36.0, 38.0, 40.0,
];

/// Default rounding step for barbell loads (kg)
pub const DEFAULT_WEIGHT_STEP: f64 = 2.5;

/// Smallest weight jump on a loaded barbell (kg)
pub const PLATE_INCREMENT: f64 = 2.5;
