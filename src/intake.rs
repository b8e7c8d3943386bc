// ABOUTME: Intake form validation converting raw unit-specific fields to canonical input
// ABOUTME: Enforces biometric ranges atomically and applies imperial/metric conversions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Intake Validation
//!
//! Normalizes raw, unit-specific form fields into [`CanonicalInput`]
//! (centimeters, kilograms) before any computation runs. Validation is
//! atomic: either every numeric field parses and lies within range, or the
//! call fails with a single out-of-range error and nothing downstream runs.
//!
//! Range failures deliberately collapse into one user-facing message per unit
//! system with no field-level detail.

use crate::config::EngineConfig;
use crate::constants::persistence::{
    FIELD_ACTIVITY, FIELD_AGE, FIELD_HEIGHT_CM, FIELD_HEIGHT_FT, FIELD_HEIGHT_IN, FIELD_LOSS_RATE,
    FIELD_SURPLUS, FIELD_WEIGHT_KG, FIELD_WEIGHT_LB,
};
use crate::constants::units::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, CanonicalInput, UnitSystem};
use crate::state::IntakeRecord;

/// Accepted imperial height range (feet component)
const FEET_RANGE: (f64, f64) = (3.0, 8.0);
/// Accepted imperial height range (inches component)
const INCHES_RANGE: (f64, f64) = (0.0, 11.0);
/// Accepted imperial weight range (pounds)
const POUNDS_RANGE: (f64, f64) = (60.0, 600.0);
/// Accepted metric height range (centimeters)
const HEIGHT_CM_RANGE: (f64, f64) = (120.0, 230.0);
/// Accepted metric weight range (kilograms)
const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);

/// Single user-facing message for any imperial range failure
const IMPERIAL_RANGE_MESSAGE: &str = "Please check height/weight values.";
/// Single user-facing message for any metric range failure
const METRIC_RANGE_MESSAGE: &str = "Please check metric height/weight values.";

fn parse_field(record: &IntakeRecord, field: &str) -> Option<f64> {
    record
        .value(field)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}

/// Validate an intake record and produce canonical input.
///
/// Height and weight are read according to the record's unit system; the
/// remaining fields are unit-independent. The loss-rate and surplus fields
/// are read regardless of goal (only the matching goal consumes them):
/// absent or non-numeric values take their configured defaults, and the loss
/// rate is clamped into its accepted band as a canonical-input invariant.
///
/// # Errors
///
/// Returns a value-out-of-range error when any biometric field is missing,
/// non-numeric, or outside its accepted range. The failure is atomic: no
/// partial canonical input is ever produced.
pub fn validate(record: &IntakeRecord) -> AppResult<CanonicalInput> {
    let config = EngineConfig::global();
    let targets = &config.calorie_targets;

    let age_years = record
        .value(FIELD_AGE)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|age| *age > 0)
        .ok_or_else(|| AppError::value_out_of_range("Please check the age value."))?;

    let (height_cm, weight_kg) = match record.units {
        UnitSystem::Imperial => {
            let feet = parse_field(record, FIELD_HEIGHT_FT);
            let inches = parse_field(record, FIELD_HEIGHT_IN);
            let pounds = parse_field(record, FIELD_WEIGHT_LB);
            match (feet, inches, pounds) {
                (Some(ft), Some(inch), Some(lb))
                    if in_range(ft, FEET_RANGE)
                        && in_range(inch, INCHES_RANGE)
                        && in_range(lb, POUNDS_RANGE) =>
                {
                    let height_cm = ft.mul_add(INCHES_PER_FOOT, inch) * CM_PER_INCH;
                    let weight_kg = lb * KG_PER_LB;
                    (height_cm, weight_kg)
                }
                _ => return Err(AppError::value_out_of_range(IMPERIAL_RANGE_MESSAGE)),
            }
        }
        UnitSystem::Metric => {
            let height_cm = parse_field(record, FIELD_HEIGHT_CM);
            let weight_kg = parse_field(record, FIELD_WEIGHT_KG);
            match (height_cm, weight_kg) {
                (Some(cm), Some(kg))
                    if in_range(cm, HEIGHT_CM_RANGE) && in_range(kg, WEIGHT_KG_RANGE) =>
                {
                    (cm, kg)
                }
                _ => return Err(AppError::value_out_of_range(METRIC_RANGE_MESSAGE)),
            }
        }
    };

    let activity_level =
        ActivityLevel::from_form_value(record.value(FIELD_ACTIVITY).unwrap_or_default());

    let loss_rate_lb_per_week = parse_field(record, FIELD_LOSS_RATE)
        .unwrap_or(targets.default_loss_rate_lb_per_week)
        .clamp(
            targets.loss_rate_min_lb_per_week,
            targets.loss_rate_max_lb_per_week,
        );
    let surplus_kcal_per_day =
        parse_field(record, FIELD_SURPLUS).unwrap_or(targets.default_surplus_kcal_per_day);

    tracing::debug!(
        age_years,
        height_cm,
        weight_kg,
        units = %record.units,
        "intake validated"
    );

    Ok(CanonicalInput {
        gender: record.gender,
        age_years,
        height_cm,
        weight_kg,
        activity_level,
        goal: record.goal,
        loss_rate_lb_per_week,
        surplus_kcal_per_day,
    })
}
