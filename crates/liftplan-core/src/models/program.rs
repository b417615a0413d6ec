// ABOUTME: Generated program records: Program, ProgramWeek, ProgramSession and accessories
// ABOUTME: The structured result handed to renderers and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::input::UserInput;
use super::notation::format_number;
use super::scheme::SchemeId;
use super::summary::IntensitySummary;

/// Secondary lift prescription attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    /// Accessory slot name
    pub name: String,
    /// Load, sets, rep range and progression rule
    pub prescription: String,
}

/// One row of the percentage-based rep-max table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepMaxEntry {
    /// Rep count
    pub reps: u32,
    /// Percent of one-rep-max, 0-100
    pub percent: u32,
    /// Rounded load (kg)
    pub weight: f64,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSession {
    /// Human day identifier, e.g. "Mon"
    pub day_label: String,
    /// Heaviest set of the day
    pub top_set: String,
    /// Remaining sets, possibly with coaching annotations
    #[serde(default)]
    pub backoff_sets: Vec<String>,
    /// Numeric top-set load; absent on test days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_weight: Option<f64>,
    /// Derived metrics for the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_summary: Option<IntensitySummary>,
    /// Recommended rest between sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_interval: Option<String>,
    /// Effort translation for novices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe_guide: Option<String>,
    /// Free-text hints
    #[serde(default)]
    pub coaching_notes: Vec<String>,
    /// Secondary lifts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessories: Vec<Accessory>,
}

impl ProgramSession {
    /// Session with only a day label and top set line
    #[must_use]
    pub fn new(day_label: impl Into<String>, top_set: impl Into<String>) -> Self {
        Self {
            day_label: day_label.into(),
            top_set: top_set.into(),
            backoff_sets: Vec::new(),
            working_weight: None,
            intensity_summary: None,
            rest_interval: None,
            rpe_guide: None,
            coaching_notes: Vec::new(),
            accessories: Vec::new(),
        }
    }
}

/// One week of sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramWeek {
    /// 1-based week number, contiguous within a program
    pub week_number: u32,
    /// Phase label, e.g. "Volume 1" or "Deload"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether this is a planned deload week
    #[serde(default)]
    pub is_deload: bool,
    /// Sessions in training-day order
    #[serde(default)]
    pub sessions: Vec<ProgramSession>,
}

impl ProgramWeek {
    /// Heaviest working weight prescribed this week
    #[must_use]
    pub fn peak_working_weight(&self) -> Option<f64> {
        self.sessions
            .iter()
            .filter_map(|session| session.working_weight)
            .reduce(f64::max)
    }

    /// Sum of session tonnage
    #[must_use]
    pub fn tonnage(&self) -> f64 {
        self.sessions
            .iter()
            .filter_map(|session| session.intensity_summary.as_ref())
            .map(|summary| summary.tonnage)
            .sum()
    }
}

/// A complete generated training program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Identifier used as the persistence key
    pub id: String,
    /// Display name
    pub name: String,
    /// Scheme that produced the program
    pub scheme: SchemeId,
    /// Originating preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<UserInput>,
    /// Estimated capacity used for generation
    pub one_rm: f64,
    /// Estimates from every one-rep-max formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_rm_variants: Option<BTreeMap<String, f64>>,
    /// Percentage-based rep-max table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_maxes: Option<Vec<RepMaxEntry>>,
    /// Weeks in order
    #[serde(default)]
    pub weeks: Vec<ProgramWeek>,
}

impl Program {
    /// Assemble a program for a scheme with its default id and name
    #[must_use]
    pub fn new(scheme: SchemeId, user_input: &UserInput, one_rm: f64, weeks: Vec<ProgramWeek>) -> Self {
        Self {
            id: scheme.id().to_owned(),
            name: Self::default_name(scheme, user_input),
            scheme,
            user_input: Some(user_input.clone()),
            one_rm,
            one_rm_variants: None,
            rep_maxes: None,
            weeks,
        }
    }

    /// `"<scheme name> · <weight>×<reps>"`
    #[must_use]
    pub fn default_name(scheme: SchemeId, user_input: &UserInput) -> String {
        format!(
            "{} · {}×{}",
            scheme.display_name(),
            format_number(user_input.safe_weight()),
            user_input.reps
        )
    }

    /// Copy with a different identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Copy with a different display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of sessions across all weeks
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.weeks.iter().map(|week| week.sessions.len()).sum()
    }
}
