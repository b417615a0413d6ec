// ABOUTME: Output renderers for generated programs, saved lists, estimates and comparisons
// ABOUTME: Plain text for terminals and pretty JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! Output Format Abstraction Layer
//!
//! Text output is a read-only view of a [`Program`]; JSON output is the
//! record itself, serialized the same way the file store persists it.

use std::collections::BTreeMap;
use std::fmt;

use liftplan_core::errors::{AppError, AppResult};
use liftplan_core::models::{format_number, IntensitySummary, Program, ProgramSession, RepMaxEntry};
use liftplan_engine::duration::weeks_label;
use liftplan_engine::SchemeComparison;
use serde::Serialize;
use serde_json::json;

/// Placeholder for a session without backoff sets
const NO_BACKOFF: &str = "—";

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(AppError::from)
}

/// Render one program
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_program(program: &Program, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(program),
        OutputFormat::Text => Ok(program_text(program)),
    }
}

fn program_text(program: &Program) -> String {
    let mut lines = vec![format!(
        "{} ({})",
        program.name,
        weeks_label(u32::try_from(program.weeks.len()).unwrap_or(u32::MAX))
    )];
    if program.one_rm > 0.0 {
        lines.push(format!("Estimated 1RM: {} kg", format_number(program.one_rm)));
    }
    if program.weeks.is_empty() {
        lines.push("No weeks generated.".to_owned());
        return lines.join("\n");
    }

    for week in &program.weeks {
        lines.push(String::new());
        lines.push(week.label.as_ref().map_or_else(
            || format!("Week {}", week.week_number),
            |label| format!("Week {} · {label}", week.week_number),
        ));
        for session in &week.sessions {
            session_lines(session, &mut lines);
        }
    }
    lines.join("\n")
}

fn session_lines(session: &ProgramSession, lines: &mut Vec<String>) {
    lines.push(format!("  {}  {}", session.day_label, session.top_set));
    let backoff = if session.backoff_sets.is_empty() {
        NO_BACKOFF.to_owned()
    } else {
        session.backoff_sets.join(" | ")
    };
    lines.push(format!("    Backoff: {backoff}"));
    if let Some(rest) = &session.rest_interval {
        lines.push(format!("    Rest: {rest}"));
    }
    if let Some(guide) = &session.rpe_guide {
        lines.push(format!("    RPE guide: {guide}"));
    }
    for note in &session.coaching_notes {
        lines.push(format!("    Note: {note}"));
    }
    for accessory in &session.accessories {
        lines.push(format!("    + {}: {}", accessory.name, accessory.prescription));
    }
    if let Some(summary) = &session.intensity_summary {
        lines.push(format!("    Metrics: {}", metrics_text(summary)));
    }
}

fn metrics_text(summary: &IntensitySummary) -> String {
    format!(
        "{} kg tonnage · {}% avg · stress {} ({}) · recovery {} h (~{} d)",
        format_number(summary.tonnage),
        summary.avg_intensity,
        format_number(summary.stress_score),
        summary.stress_label,
        summary.recovery_hours,
        format_number(summary.recovery_days)
    )
}

/// Render saved programs as `id  name` lines
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_program_list(programs: &[Program], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = programs
                .iter()
                .map(|program| {
                    json!({
                        "id": program.id,
                        "name": program.name,
                        "scheme": program.scheme,
                        "weeks": program.weeks.len(),
                    })
                })
                .collect();
            to_json(&entries)
        }
        OutputFormat::Text if programs.is_empty() => Ok("No saved programs.".to_owned()),
        OutputFormat::Text => Ok(programs
            .iter()
            .map(|program| format!("{}  {}", program.id, program.name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render formula variants and the rep-max table
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_estimate(
    one_rm: f64,
    variants: &BTreeMap<String, f64>,
    rep_maxes: &[RepMaxEntry],
    format: OutputFormat,
) -> AppResult<String> {
    if format == OutputFormat::Json {
        return to_json(&json!({
            "one_rm": one_rm,
            "one_rm_variants": variants,
            "rep_maxes": rep_maxes,
        }));
    }
    if variants.is_empty() {
        return Ok("No estimate: weight and reps must both be positive.".to_owned());
    }

    let mut lines = vec![format!("Estimated 1RM: {} kg", format_number(one_rm))];
    lines.push(String::new());
    lines.extend(
        variants
            .iter()
            .map(|(formula, estimate)| format!("  {formula:<10} {} kg", format_number(*estimate))),
    );
    lines.push(String::new());
    lines.extend(rep_maxes.iter().map(|entry| {
        format!(
            "  {:>2} RM  {:>3}%  {} kg",
            entry.reps,
            entry.percent,
            format_number(entry.weight)
        )
    }));
    Ok(lines.join("\n"))
}

/// Render a scheme comparison table
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_comparison(rows: &[SchemeComparison], format: OutputFormat) -> AppResult<String> {
    if format == OutputFormat::Json {
        let entries: Vec<_> = rows
            .iter()
            .map(|row| {
                json!({
                    "scheme": row.scheme,
                    "weeks": row.weeks,
                    "sessions": row.sessions,
                    "deload_weeks": row.deload_weeks,
                    "peak_working_weight": row.peak_working_weight,
                    "total_tonnage": row.total_tonnage,
                })
            })
            .collect();
        return to_json(&entries);
    }
    Ok(rows
        .iter()
        .map(|row| {
            format!(
                "{:<20} {:>2} wk  {:>2} sessions  peak {:>6} kg  {:>8} kg total",
                row.scheme.id(),
                row.weeks,
                row.sessions,
                row.peak_working_weight.map_or_else(|| NO_BACKOFF.to_owned(), format_number),
                format_number(row.total_tonnage.round())
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use liftplan_core::models::{ProgramWeek, SchemeId, UserInput};

    use super::*;

    fn sample_program() -> Program {
        let mut session = ProgramSession::new("Mon", "100×5 @ RPE 8");
        session.rest_interval = Some("2-3 min".to_owned());
        let week = ProgramWeek {
            week_number: 1,
            label: None,
            is_deload: false,
            sessions: vec![session],
        };
        Program::new(SchemeId::TexasMethod, &UserInput::new(100.0, 5), 117.0, vec![week])
    }

    #[test]
    fn test_text_marks_missing_backoff() {
        let text = program_text(&sample_program());
        assert!(text.starts_with("Texas Method · 100×5 (1 week)"));
        assert!(text.contains("  Mon  100×5 @ RPE 8"));
        assert!(text.contains("Backoff: —"));
        assert!(text.contains("Rest: 2-3 min"));
    }

    #[test]
    fn test_format_param_defaults_to_text() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    }
}
