// ABOUTME: Integration tests for the nutrition metrics engine
// ABOUTME: Covers BMR exactness, TDEE rounding, goal branches, the calorie floor, and protein rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gymcoach_engine::config::EngineConfig;
use gymcoach_engine::intelligence::nutrition::compute_metrics;
use gymcoach_engine::models::{ActivityLevel, CanonicalInput, Gender, Goal};

fn reference_input() -> CanonicalInput {
    CanonicalInput {
        gender: Gender::Male,
        age_years: 30,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Lose,
        loss_rate_lb_per_week: 1.0,
        surplus_kcal_per_day: 250.0,
    }
}

#[test]
fn test_compute_is_deterministic() {
    let config = EngineConfig::default();
    let input = reference_input();
    assert_eq!(
        compute_metrics(&input, &config),
        compute_metrics(&input, &config)
    );
}

#[test]
fn test_bmr_reference_value() {
    // 10*80 + 6.25*180 - 5*30 + 5 = 1780
    let config = EngineConfig::default();
    let result = compute_metrics(&reference_input(), &config);
    assert_eq!(result.bmr, 1780);
}

#[test]
fn test_tdee_moderate_multiplier() {
    // round(1780 * 1.55) = 2759
    let config = EngineConfig::default();
    let result = compute_metrics(&reference_input(), &config);
    assert_eq!(result.tdee, 2759);
}

#[test]
fn test_rounding_only_at_output_stage() {
    // Unrounded BMR 1780.625 * 1.55 = 2759.97 rounds to 2760; rounding the
    // BMR first would give 1781 * 1.55 = 2760.55 -> 2761.
    let config = EngineConfig::default();
    let input = CanonicalInput {
        height_cm: 180.1,
        ..reference_input()
    };
    let result = compute_metrics(&input, &config);
    assert_eq!(result.bmr, 1781);
    assert_eq!(result.tdee, 2760);
}

#[test]
fn test_lose_goal_deficit() {
    let config = EngineConfig::default();
    let result = compute_metrics(&reference_input(), &config);
    // 2759 - 500, computed before rounding: 2759.0 - 500 = 2259
    assert_eq!(result.target_calories, 2259);
    assert_eq!(result.notes, vec!["Deficit ≈ 500 kcal/day for 1 lb/week."]);
}

#[test]
fn test_lose_goal_floor_is_exactly_1200() {
    // Low-TDEE profile: bmr = 450 + 937.5 - 300 - 161 = 926.5, tdee = 1111.8.
    // A 2 lb/week request (1000 kcal/day) floors at 1200 instead of erroring.
    let config = EngineConfig::default();
    let input = CanonicalInput {
        gender: Gender::Female,
        age_years: 60,
        height_cm: 150.0,
        weight_kg: 45.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Lose,
        loss_rate_lb_per_week: 2.0,
        surplus_kcal_per_day: 250.0,
    };
    let result = compute_metrics(&input, &config);
    assert_eq!(result.target_calories, 1200);
}

#[test]
fn test_floor_silently_weakens_deficit() {
    // tdee ~1329: the floor leaves only a ~129 kcal deficit of the requested 1000.
    let config = EngineConfig::default();
    let input = CanonicalInput {
        gender: Gender::Female,
        age_years: 40,
        height_cm: 155.0,
        weight_kg: 50.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Lose,
        loss_rate_lb_per_week: 2.0,
        surplus_kcal_per_day: 250.0,
    };
    let result = compute_metrics(&input, &config);
    assert_eq!(result.target_calories, 1200);
    assert!(result.tdee > 1200);
}

#[test]
fn test_gain_goal_has_no_floor_or_ceiling() {
    let config = EngineConfig::default();

    let zero_surplus = CanonicalInput {
        goal: Goal::Gain,
        surplus_kcal_per_day: 0.0,
        ..reference_input()
    };
    let result = compute_metrics(&zero_surplus, &config);
    assert_eq!(result.target_calories, result.tdee);

    let huge_surplus = CanonicalInput {
        goal: Goal::Gain,
        surplus_kcal_per_day: 5000.0,
        ..reference_input()
    };
    let result = compute_metrics(&huge_surplus, &config);
    assert_eq!(result.target_calories, 2759 + 5000);
    assert_eq!(result.notes, vec!["Surplus ≈ +5000 kcal/day."]);
}

#[test]
fn test_recomp_goal_fixed_deficit() {
    let config = EngineConfig::default();
    let input = CanonicalInput {
        goal: Goal::Both,
        ..reference_input()
    };
    let result = compute_metrics(&input, &config);
    assert_eq!(result.target_calories, 2759 - 250);
    assert_eq!(
        result.notes,
        vec!["Recomp: small ~250 kcal/day deficit with high protein."]
    );
}

#[test]
fn test_protein_rules_per_goal() {
    // 80 kg = 176.3696 lb; lose: *0.8 = 141.1 -> 141; gain/both: *1.0 -> 176
    let config = EngineConfig::default();

    let lose = compute_metrics(&reference_input(), &config);
    assert_eq!(lose.protein_grams, 141);

    let gain = compute_metrics(
        &CanonicalInput {
            goal: Goal::Gain,
            ..reference_input()
        },
        &config,
    );
    assert_eq!(gain.protein_grams, 176);

    let both = compute_metrics(
        &CanonicalInput {
            goal: Goal::Both,
            ..reference_input()
        },
        &config,
    );
    assert_eq!(both.protein_grams, 176);
}

#[test]
fn test_neutral_gender_bmr_offset() {
    // 10*80 + 6.25*180 - 5*30 - 78 = 1697
    let config = EngineConfig::default();
    let input = CanonicalInput {
        gender: Gender::Other,
        ..reference_input()
    };
    let result = compute_metrics(&input, &config);
    assert_eq!(result.bmr, 1697);
}

#[test]
fn test_engine_clamps_out_of_band_loss_rate() {
    // Canonical input is normally clamped at intake; the engine clamps again
    // so a hand-built request cannot exceed the policy band.
    let config = EngineConfig::default();
    let input = CanonicalInput {
        loss_rate_lb_per_week: 10.0,
        ..reference_input()
    };
    let result = compute_metrics(&input, &config);
    assert_eq!(result.target_calories, 2759 - 1000);
    assert_eq!(result.notes, vec!["Deficit ≈ 1000 kcal/day for 2 lb/week."]);
}
