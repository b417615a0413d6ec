// ABOUTME: Tests for text and JSON renderers used by the CLI
// ABOUTME: Full program views, empty states, saved lists and estimate tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeMap;

use liftplan::engine::{build_plan, compare_schemes, EngineConfig};
use liftplan::formatters::{
    render_comparison, render_estimate, render_program, render_program_list, OutputFormat,
};
use liftplan::models::{Program, SchemeId};

#[test]
fn test_text_view_lists_weeks_sessions_and_metrics() {
    let program = build_plan(
        &common::reference_input(SchemeId::TexasMethod),
        &EngineConfig::default(),
    );
    let text = render_program(&program, OutputFormat::Text).unwrap();

    assert!(text.starts_with("Texas Method · 100×5 (9 weeks)"));
    assert!(text.contains("Estimated 1RM: 117 kg"));
    assert!(text.contains("Week 1\n"));
    assert!(text.contains("Week 4 · Deload"));
    assert!(text.contains("  Mon  "));
    assert!(text.contains("Metrics: "));
    assert!(text.contains("+ Strength accessory: "));
}

#[test]
fn test_json_view_is_the_stored_record() {
    let program = build_plan(
        &common::reference_input(SchemeId::Conjugate),
        &EngineConfig::default(),
    );
    let json = render_program(&program, OutputFormat::Json).unwrap();
    let parsed: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.id, "conjugate");
    assert_eq!(parsed.weeks.len(), program.weeks.len());
    assert_eq!(
        parsed.weeks[0].sessions[1].top_set,
        program.weeks[0].sessions[1].top_set
    );

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["one_rm_variants"]["epley"].is_number());
    assert!(value["weeks"][0]["sessions"][0]["intensity_summary"]["stress_label"].is_string());
}

#[test]
fn test_empty_states() {
    let empty = common::named_program("empty", SchemeId::Dup);
    let text = render_program(&empty, OutputFormat::Text).unwrap();
    assert!(text.ends_with("No weeks generated."));

    assert_eq!(
        render_program_list(&[], OutputFormat::Text).unwrap(),
        "No saved programs."
    );
    assert_eq!(render_program_list(&[], OutputFormat::Json).unwrap(), "[]");
}

#[test]
fn test_program_list_shows_id_and_name() {
    let programs = vec![
        common::named_program("abc", SchemeId::Dup),
        common::named_program("def", SchemeId::Sheiko),
    ];
    let text = render_program_list(&programs, OutputFormat::Text).unwrap();
    assert_eq!(
        text,
        "abc  DUP (Daily Undulating) · 100×5\ndef  Sheiko-style · 100×5"
    );
}

#[test]
fn test_estimate_table() {
    let variants = BTreeMap::from([("epley".to_owned(), 117.0), ("wendler".to_owned(), 117.0)]);
    let text = render_estimate(117.0, &variants, &[], OutputFormat::Text).unwrap();
    assert!(text.starts_with("Estimated 1RM: 117 kg"));
    assert!(text.contains("epley"));

    let unusable = render_estimate(0.0, &BTreeMap::new(), &[], OutputFormat::Text).unwrap();
    assert!(unusable.starts_with("No estimate"));
}

#[test]
fn test_comparison_has_one_line_per_scheme() {
    let rows = compare_schemes(
        &common::reference_input(SchemeId::TopSetBackoff),
        &EngineConfig::default(),
    );
    let text = render_comparison(&rows, OutputFormat::Text).unwrap();
    assert_eq!(text.lines().count(), SchemeId::ALL.len());
    assert!(text.lines().next().unwrap().starts_with("top-set-backoff"));
}
