// ABOUTME: Integration tests for intake validation and unit canonicalization
// ABOUTME: Covers imperial/metric conversion equivalence, range rejection, and field defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gymcoach_engine::config::EngineConfig;
use gymcoach_engine::errors::ErrorCode;
use gymcoach_engine::intake;
use gymcoach_engine::intelligence::nutrition::compute_metrics;
use gymcoach_engine::models::{ActivityLevel, Gender, Goal, UnitSystem};
use gymcoach_engine::state::IntakeRecord;

fn imperial_record() -> IntakeRecord {
    let mut record = IntakeRecord::new(Gender::Male, UnitSystem::Imperial, Goal::Lose);
    record.set_value("heightFt", "6");
    record.set_value("heightIn", "0");
    record.set_value("weightLb", "180");
    record.set_value("age", "30");
    record.set_value("activity", "moderate");
    record
}

fn metric_record() -> IntakeRecord {
    let mut record = IntakeRecord::new(Gender::Male, UnitSystem::Metric, Goal::Lose);
    record.set_value("heightCm", "182.88");
    record.set_value("weightKg", "81.6466");
    record.set_value("age", "30");
    record.set_value("activity", "moderate");
    record
}

#[test]
fn test_imperial_metric_equivalence() {
    let imperial = intake::validate(&imperial_record()).unwrap();
    let metric = intake::validate(&metric_record()).unwrap();

    assert!((imperial.height_cm - metric.height_cm).abs() < 0.01);
    assert!((imperial.weight_kg - metric.weight_kg).abs() < 0.01);

    let config = EngineConfig::default();
    let from_imperial = compute_metrics(&imperial, &config);
    let from_metric = compute_metrics(&metric, &config);
    assert!((from_imperial.bmr - from_metric.bmr).abs() <= 1);
    assert!((from_imperial.tdee - from_metric.tdee).abs() <= 1);
    assert!((from_imperial.target_calories - from_metric.target_calories).abs() <= 1);
    assert!((from_imperial.protein_grams - from_metric.protein_grams).abs() <= 1);
}

#[test]
fn test_imperial_conversion_factors() {
    let input = intake::validate(&imperial_record()).unwrap();
    // (6*12 + 0) * 2.54 and 180 * 0.45359237
    assert!((input.height_cm - 182.88).abs() < 1e-9);
    assert!((input.weight_kg - 81.646_626_6).abs() < 1e-6);
}

#[test]
fn test_imperial_out_of_range_rejected() {
    for (field, value) in [
        ("heightFt", "2"),
        ("heightFt", "9"),
        ("heightIn", "12"),
        ("heightIn", "-1"),
        ("weightLb", "59"),
        ("weightLb", "601"),
    ] {
        let mut record = imperial_record();
        record.set_value(field, value);
        let err = intake::validate(&record).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{field}={value}");
        assert_eq!(err.message, "Please check height/weight values.");
    }
}

#[test]
fn test_metric_out_of_range_rejected() {
    for (field, value) in [
        ("heightCm", "119"),
        ("heightCm", "231"),
        ("weightKg", "29"),
        ("weightKg", "301"),
    ] {
        let mut record = metric_record();
        record.set_value(field, value);
        let err = intake::validate(&record).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{field}={value}");
        assert_eq!(err.message, "Please check metric height/weight values.");
    }
}

#[test]
fn test_boundary_values_accepted() {
    let mut record = metric_record();
    record.set_value("heightCm", "120");
    record.set_value("weightKg", "30");
    assert!(intake::validate(&record).is_ok());

    record.set_value("heightCm", "230");
    record.set_value("weightKg", "300");
    assert!(intake::validate(&record).is_ok());
}

#[test]
fn test_non_numeric_biometric_fails_atomically() {
    let mut record = metric_record();
    record.set_value("weightKg", "eighty");
    assert!(intake::validate(&record).is_err());

    let mut record = imperial_record();
    record.values.remove("heightIn");
    assert!(intake::validate(&record).is_err());
}

#[test]
fn test_age_must_be_positive() {
    for bad in ["0", "-3", "abc", ""] {
        let mut record = metric_record();
        record.set_value("age", bad);
        let err = intake::validate(&record).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "age={bad}");
    }
}

#[test]
fn test_loss_rate_and_surplus_defaults() {
    // Absent fields take the defaults.
    let input = intake::validate(&metric_record()).unwrap();
    assert_eq!(input.loss_rate_lb_per_week, 1.0);
    assert_eq!(input.surplus_kcal_per_day, 250.0);

    // Non-numeric values also take the defaults.
    let mut record = metric_record();
    record.set_value("lossRate", "fast");
    record.set_value("surplus", "lots");
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.loss_rate_lb_per_week, 1.0);
    assert_eq!(input.surplus_kcal_per_day, 250.0);
}

#[test]
fn test_explicit_zero_surplus_survives() {
    let mut record = metric_record();
    record.goal = Goal::Gain;
    record.set_value("surplus", "0");
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.surplus_kcal_per_day, 0.0);
}

#[test]
fn test_loss_rate_clamped_into_band() {
    let mut record = metric_record();
    record.set_value("lossRate", "0.1");
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.loss_rate_lb_per_week, 0.25);

    record.set_value("lossRate", "3.5");
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.loss_rate_lb_per_week, 2.0);
}

#[test]
fn test_fields_read_regardless_of_goal() {
    // A gain-goal record still canonicalizes the loss-rate field and vice versa.
    let mut record = metric_record();
    record.goal = Goal::Gain;
    record.set_value("lossRate", "1.5");
    record.set_value("surplus", "300");
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.loss_rate_lb_per_week, 1.5);
    assert_eq!(input.surplus_kcal_per_day, 300.0);
}

#[test]
fn test_unknown_activity_falls_back_to_moderate() {
    let mut record = metric_record();
    record.set_value("activity", "cosmic");
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.activity_level, ActivityLevel::Moderate);
}

#[test]
fn test_selectors_carried_into_canonical_input() {
    let mut record = metric_record();
    record.gender = Gender::Other;
    record.goal = Goal::Both;
    let input = intake::validate(&record).unwrap();
    assert_eq!(input.gender, Gender::Other);
    assert_eq!(input.goal, Goal::Both);
}
