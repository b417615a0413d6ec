// ABOUTME: Closed set of periodization scheme identifiers
// ABOUTME: Stable ids, display names and descriptions for the eight training methodologies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

/// Periodization methodology used to generate a program
///
/// Each identifier maps to exactly one generator in the engine's dispatch
/// table; unknown ids fall back to [`SchemeId::TopSetBackoff`] when parsed
/// leniently, which is also how serialized ids are read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SchemeId {
    /// One heavy top set followed by lighter backoff sets
    #[default]
    TopSetBackoff,
    /// Linear 5x5 moving to 3x3 across labelled phases, ending in a test week
    #[serde(rename = "linear-5x5")]
    Linear5x5,
    /// Reps climb inside a range at fixed weight, then the weight steps up
    DoubleProgression,
    /// Volume, light and intensity days every week
    TexasMethod,
    /// Heavy, medium and light days at descending loads
    HeavyLightMedium,
    /// Daily undulating strength, hypertrophy and power sessions
    Dup,
    /// Multi-block sessions in the style of Boris Sheiko
    #[serde(rename = "sheiko-style")]
    Sheiko,
    /// Max-effort, dynamic-effort and repetition days
    Conjugate,
}

impl SchemeId {
    /// Every scheme in menu order
    pub const ALL: [Self; 8] = [
        Self::TopSetBackoff,
        Self::Linear5x5,
        Self::DoubleProgression,
        Self::TexasMethod,
        Self::HeavyLightMedium,
        Self::Dup,
        Self::Sheiko,
        Self::Conjugate,
    ];

    /// Stable identifier used for persistence and the CLI
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::TopSetBackoff => "top-set-backoff",
            Self::Linear5x5 => "linear-5x5",
            Self::DoubleProgression => "double-progression",
            Self::TexasMethod => "texas-method",
            Self::HeavyLightMedium => "heavy-light-medium",
            Self::Dup => "dup",
            Self::Sheiko => "sheiko-style",
            Self::Conjugate => "conjugate",
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TopSetBackoff => "Top Set + Backoff",
            Self::Linear5x5 => "Linear 5×5 → 3×3",
            Self::DoubleProgression => "Double Progression",
            Self::TexasMethod => "Texas Method",
            Self::HeavyLightMedium => "Heavy–Light–Medium",
            Self::Dup => "DUP (Daily Undulating)",
            Self::Sheiko => "Sheiko-style",
            Self::Conjugate => "Conjugate",
        }
    }

    /// One-line description for menus and help output
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TopSetBackoff => "One heavy top set, then backoff sets at ~90% for volume",
            Self::Linear5x5 => "Volume to strength to power phases, finishing with a test week",
            Self::DoubleProgression => {
                "Add reps at a fixed weight until the range ceiling, then add weight"
            }
            Self::TexasMethod => "Volume day, light recovery day, and a heavy intensity day",
            Self::HeavyLightMedium => "Three weekly days at 100/90/80% of the heavy load",
            Self::Dup => "Strength, hypertrophy and power stimuli within the same week",
            Self::Sheiko => "Each session blends several moderate load blocks",
            Self::Conjugate => "Max effort, two dynamic effort days and a repetition day",
        }
    }

    /// Parse an id, falling back to top set + backoff when unknown
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!(value, "Unknown scheme, using top-set-backoff");
            Self::TopSetBackoff
        })
    }
}

impl From<String> for SchemeId {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl FromStr for SchemeId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        match key.as_str() {
            "sheiko" => Ok(Self::Sheiko),
            "texas" => Ok(Self::TexasMethod),
            "hlm" => Ok(Self::HeavyLightMedium),
            other => Self::ALL
                .into_iter()
                .find(|scheme| scheme.id() == other)
                .ok_or_else(|| {
                    let valid: Vec<&str> = Self::ALL.iter().map(|scheme| scheme.id()).collect();
                    AppError::invalid_input(format!(
                        "Unknown scheme: '{s}'. Valid options: {}",
                        valid.join(", ")
                    ))
                }),
        }
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for scheme in SchemeId::ALL {
            assert_eq!(scheme.id().parse::<SchemeId>().ok(), Some(scheme));
        }
    }

    #[test]
    fn test_aliases_and_underscores() {
        assert_eq!("sheiko".parse::<SchemeId>().ok(), Some(SchemeId::Sheiko));
        assert_eq!(
            "TEXAS_METHOD".parse::<SchemeId>().ok(),
            Some(SchemeId::TexasMethod)
        );
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_top_set() {
        assert!("westside".parse::<SchemeId>().is_err());
        assert_eq!(SchemeId::parse_lenient("westside"), SchemeId::TopSetBackoff);
    }

    #[test]
    fn test_serde_uses_stable_ids() {
        let json = serde_json::to_string(&SchemeId::Linear5x5).unwrap_or_default();
        assert_eq!(json, "\"linear-5x5\"");
        let sheiko: Option<SchemeId> = serde_json::from_str("\"sheiko\"").ok();
        assert_eq!(sheiko, Some(SchemeId::Sheiko));
        let stale: Option<SchemeId> = serde_json::from_str("\"westside\"").ok();
        assert_eq!(stale, Some(SchemeId::TopSetBackoff));
    }
}
