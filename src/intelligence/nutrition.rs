// ABOUTME: Nutrition metric calculations using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal-adjusted calorie target, and protein target derivation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Metrics Module
//!
//! Derives per-day nutrition targets from canonical biometric input.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
//!   (activity factor multipliers)
//!
//! The calorie-target policy rests on the 3500 kcal/lb approximation: one
//! pound per week of loss corresponds to a 500 kcal/day deficit.
//!
//! Every function here is total over canonical input; range enforcement
//! happens upstream in [`crate::intake`]. Rounding to whole kilocalories and
//! grams happens once, at the output stage.

use crate::config::{ActivityFactorsConfig, BmrConfig, EngineConfig};
use crate::constants::units::LB_PER_KG;
use crate::models::{ActivityLevel, CanonicalInput, Gender, Goal, MetricsResult};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Male: +5
/// - Female: -161
/// - Neutral: -78 (midpoint, not a clinical constant)
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Other => config.msj_neutral_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Look up the TDEE activity factor for an activity level
///
/// The set is closed; an unrecognized raw selector value has already been
/// mapped to moderate during intake.
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    }
}

/// Compute the complete metrics result for one submission.
///
/// Deterministic: the same canonical input always yields a bit-identical
/// result. The lose-goal branch enforces the configured daily floor after
/// subtracting the deficit, which silently weakens (or inverts) a large
/// requested deficit for low-TDEE individuals instead of erroring.
pub fn compute_metrics(input: &CanonicalInput, config: &EngineConfig) -> MetricsResult {
    let targets = &config.calorie_targets;

    let bmr = calculate_bmr(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.gender,
        &config.bmr,
    );
    let tdee = bmr * activity_multiplier(input.activity_level, &config.activity_factors);

    let mut notes = Vec::new();

    let target_calories = match input.goal {
        Goal::Lose => {
            let rate = input.loss_rate_lb_per_week.clamp(
                targets.loss_rate_min_lb_per_week,
                targets.loss_rate_max_lb_per_week,
            );
            let daily_deficit = rate * targets.deficit_kcal_per_lb_week;
            notes.push(format!(
                "Deficit ≈ {} kcal/day for {rate} lb/week.",
                daily_deficit.round()
            ));
            targets.min_daily_kcal.max(tdee - daily_deficit)
        }
        Goal::Gain => {
            notes.push(format!(
                "Surplus ≈ +{} kcal/day.",
                input.surplus_kcal_per_day
            ));
            tdee + input.surplus_kcal_per_day
        }
        Goal::Both => {
            notes.push(format!(
                "Recomp: small ~{} kcal/day deficit with high protein.",
                targets.recomp_deficit_kcal
            ));
            tdee - targets.recomp_deficit_kcal
        }
    };

    let weight_lb = input.weight_kg * LB_PER_KG;
    let base_multiplier = match input.goal {
        Goal::Lose => config.protein.cut_g_per_lb,
        Goal::Gain | Goal::Both => config.protein.base_g_per_lb,
    };
    let mut protein_grams = weight_lb * base_multiplier;
    if input.goal == Goal::Gain {
        // Floor can never win at the default multipliers; kept as a knob.
        protein_grams = protein_grams.max(weight_lb * config.protein.gain_floor_g_per_lb);
    }

    tracing::debug!(
        bmr,
        tdee,
        target_calories,
        protein_grams,
        goal = %input.goal,
        "metrics computed"
    );

    MetricsResult {
        bmr: bmr.round() as i32,
        tdee: tdee.round() as i32,
        target_calories: target_calories.round() as i32,
        protein_grams: protein_grams.round() as i32,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn canonical(goal: Goal) -> CanonicalInput {
        CanonicalInput {
            gender: Gender::Male,
            age_years: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            goal,
            loss_rate_lb_per_week: 1.0,
            surplus_kcal_per_day: 250.0,
        }
    }

    #[test]
    fn test_bmr_formula_exactness() {
        let config = EngineConfig::default();
        // 10*80 + 6.25*180 - 5*30 + 5 = 800 + 1125 - 150 + 5
        let bmr = calculate_bmr(80.0, 180.0, 30, Gender::Male, &config.bmr);
        assert_eq!(bmr, 1780.0);
    }

    #[test]
    fn test_bmr_gender_offsets() {
        let config = EngineConfig::default();
        let male = calculate_bmr(80.0, 180.0, 30, Gender::Male, &config.bmr);
        let female = calculate_bmr(80.0, 180.0, 30, Gender::Female, &config.bmr);
        let other = calculate_bmr(80.0, 180.0, 30, Gender::Other, &config.bmr);
        assert_eq!(male - female, 166.0);
        assert_eq!(male - other, 83.0);
    }

    #[test]
    fn test_tdee_rounding() {
        let config = EngineConfig::default();
        let result = compute_metrics(&canonical(Goal::Both), &config);
        // 1780 * 1.55 = 2759
        assert_eq!(result.tdee, 2759);
    }

    #[test]
    fn test_lose_goal_note_text() {
        let config = EngineConfig::default();
        let result = compute_metrics(&canonical(Goal::Lose), &config);
        assert_eq!(result.notes, vec!["Deficit ≈ 500 kcal/day for 1 lb/week."]);
    }

    #[test]
    fn test_gain_protein_floor_is_inert() {
        let config = EngineConfig::default();
        let result = compute_metrics(&canonical(Goal::Gain), &config);
        // 80 * 2.20462 * 1.0 = 176.37, rounds to 176
        assert_eq!(result.protein_grams, 176);
    }
}
