// ABOUTME: Core data models and types for the gymcoach rules engine
// ABOUTME: Defines Gender, ActivityLevel, Goal, CanonicalInput, MetricsResult and WorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Closed enums for the discrete selectors and the three transient value types
//! that flow through the pipeline. All of them are created per submission,
//! held for one render/persist cycle, and carry no identity beyond that.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculation and plan selection.
///
/// A three-valued closed enum, not a free string. The neutral category has its
/// own BMR offset (a deliberate midpoint between the male and female
/// constants) and reuses the female workout tables; it is never treated as a
/// fallback or error case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (BMR offset +5)
    Male,
    /// Female (BMR offset -161)
    Female,
    /// Neutral/unspecified (BMR offset -78)
    Other,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}' (expected male, female, or other)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise): 1.2
    Sedentary,
    /// Lightly active (1-3 days/week): 1.375
    Light,
    /// Moderately active (3-5 days/week): 1.55
    Moderate,
    /// Active (6-7 days/week): 1.725
    Active,
    /// Very active (daily hard exercise): 1.9
    VeryActive,
    /// Extra active (hard training 2x/day or physical job): 2.0
    ExtraActive,
}

impl ActivityLevel {
    /// Map a raw form value onto an activity level.
    ///
    /// Unrecognized strings silently fall back to [`ActivityLevel::Moderate`]
    /// rather than erroring; the selector is the only source of these values
    /// and a stale/corrupt one should not block the whole submission.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            "extra_active" => Self::ExtraActive,
            other => {
                tracing::debug!("unrecognized activity level '{other}', defaulting to moderate");
                Self::Moderate
            }
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        };
        f.write_str(s)
    }
}

/// Training goal driving calorie and protein targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Fat loss (caloric deficit, protein at 0.8 g/lb)
    Lose,
    /// Muscle gain (caloric surplus, protein at 1.0 g/lb, no cardio)
    Gain,
    /// Recomposition: simultaneous loss and gain via a modest fixed deficit
    /// plus high protein
    Both,
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lose" => Ok(Self::Lose),
            "gain" => Ok(Self::Gain),
            "both" => Ok(Self::Both),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal '{other}' (expected lose, gain, or both)"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lose => "lose",
            Self::Gain => "gain",
            Self::Both => "both",
        };
        f.write_str(s)
    }
}

/// Unit system the raw intake fields were entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet/inches and pounds
    Imperial,
    /// Centimeters and kilograms
    Metric,
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system '{other}' (expected imperial or metric)"
            ))),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        };
        f.write_str(s)
    }
}

/// Post-validation, unit-normalized input used by all downstream computation.
///
/// Invariants established by [`crate::intake::validate`]:
/// - `height_cm` in [120, 230] (or derived from a valid imperial range)
/// - `weight_kg` in [30, 300] (or derived from a valid pounds range)
/// - `age_years` > 0
/// - `loss_rate_lb_per_week` clamped to [0.25, 2]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalInput {
    /// Gender selector
    pub gender: Gender,
    /// Age in whole years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Activity level selector
    pub activity_level: ActivityLevel,
    /// Training goal selector
    pub goal: Goal,
    /// Requested weight-loss rate (lb/week); meaningful for the lose goal
    pub loss_rate_lb_per_week: f64,
    /// Requested caloric surplus (kcal/day); meaningful for the gain goal
    pub surplus_kcal_per_day: f64,
}

/// Derived nutrition metrics for one submission.
///
/// All four numbers are rounded to the nearest integer at the output stage
/// only; intermediate arithmetic stays in floating point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i32,
    /// Total Daily Energy Expenditure, i.e. maintenance calories (kcal/day)
    pub tdee: i32,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: i32,
    /// Daily protein target (grams)
    pub protein_grams: i32,
    /// Human-readable notes describing the deficit/surplus applied, in order
    pub notes: Vec<String>,
}

/// One day of the weekly workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    /// Day number within the plan (1-4)
    pub day: u8,
    /// Split name for the day (e.g. "Leg Day", "Push", "Back + Bi")
    pub label: String,
    /// Ordered exercise list, each entry formatted as "name — sets×reps"
    pub exercises: Vec<String>,
    /// Whether a cardio session is annotated onto this day
    pub includes_cardio: bool,
}

/// A 4-day weekly workout plan, fully determined by (gender, goal)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    /// Ordered day plans, Day 1 through Day 4
    pub days: Vec<DayPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for s in ["male", "female", "other"] {
            let g: Gender = s.parse().unwrap();
            assert_eq!(g.to_string(), s);
        }
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_activity_level_lenient_fallback() {
        assert_eq!(
            ActivityLevel::from_form_value("very_active"),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            ActivityLevel::from_form_value("couch_potato"),
            ActivityLevel::Moderate
        );
        assert_eq!(ActivityLevel::from_form_value(""), ActivityLevel::Moderate);
    }

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&ActivityLevel::ExtraActive).unwrap();
        assert_eq!(json, "\"extra_active\"");
        let json = serde_json::to_string(&Goal::Both).unwrap();
        assert_eq!(json, "\"both\"");
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
    }
}
