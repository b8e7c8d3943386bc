// ABOUTME: Weekly workout plan selection from fixed, gender-keyed exercise tables
// ABOUTME: Maps (gender, goal) to a 4-day split with optional cardio annotation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Workout Plan Module
//!
//! A pure lookup, not a recommendation engine: the plan is fully determined by
//! the gender and goal selectors. Each gender has a fixed 4-way split whose
//! exercise lists never vary with age, activity level, or any numeric metric.
//! The neutral gender category reuses the female tables verbatim; that mapping
//! is an explicit design choice, not a fallback.

use crate::models::{DayPlan, Gender, Goal, WorkoutPlan};

/// Number of days in every plan
pub const PLAN_DAYS: usize = 4;

/// Cardio session suggested on every day of non-gain plans
pub const CARDIO_SUGGESTION: &str =
    "30 minutes (Stairmaster 5 / 12–3–30 / Bike / Elliptical / Swim)";

/// Fixed exercise tables, one row per split day, five entries per row.
///
/// Row order is the day order: Day 1 = Leg Day, Day 2/3 = the gender-specific
/// pair, Day 4 = Abs. The "Leg Day" and "Abs" labels are shared across both
/// tables but their exercise lists differ per gender.
mod tables {
    /// Male 4-way split: Leg Day / Push / Pull / Abs
    pub const MALE_SPLIT: [(&str, [&str; 5]); 4] = [
        (
            "Leg Day",
            [
                "Bulgarian Split Squat — 3×10/leg",
                "Leg Press — 4×10",
                "Romanian Deadlift — 4×8",
                "Leg Extension — 3×12",
                "Calf Raises — 4×12",
            ],
        ),
        (
            "Push",
            [
                "Bench Press — 4×6–8",
                "Tricep Extensions — 3×12",
                "Lateral Raises — 3×15",
                "Chest Fly — 3×12",
                "Push-ups — 3×AMRAP",
            ],
        ),
        (
            "Pull",
            [
                "Lat Pulldown — 4×10",
                "Low Row — 4×10",
                "Face Pulls — 3×15",
                "Bicep Curls — 3×12",
                "Pull-ups — 3×AMRAP",
            ],
        ),
        (
            "Abs",
            [
                "Cable Crunch — 3×12",
                "Weighted Sit-ups — 3×12",
                "Hanging Leg Raises — 3×10",
                "Russian Twists — 3×20",
                "Leg Raises — 3×12",
            ],
        ),
    ];

    /// Female 4-way split: Leg Day / Back + Bi / Shoulder + Tri / Abs
    pub const FEMALE_SPLIT: [(&str, [&str; 5]); 4] = [
        (
            "Leg Day",
            [
                "Bulgarian Split Squats — 3×10/leg",
                "Leg Extensions — 3×12",
                "Hip Thrust — 4×10",
                "Abductors — 3×15",
                "Goblet Squat — 3×10",
            ],
        ),
        (
            "Back + Bi",
            [
                "Preacher Curls — 3×10",
                "Hammer Curls — 3×10",
                "Lat Pulldown — 4×10",
                "Low Row — 4×10",
                "Face Pulls — 3×15",
            ],
        ),
        (
            "Shoulder + Tri",
            [
                "Overhead Tricep Extension — 3×12",
                "Lateral Raises — 3×15",
                "Tricep Pushdown — 3×12",
                "Shoulder Press — 4×8–10",
                "Tricep Dip — 3×AMRAP",
            ],
        ),
        (
            "Abs",
            [
                "Weighted Sit-ups — 3×12",
                "Hanging Leg Raises — 3×10",
                "Weighted Suitcases — 3×12/side",
                "Leg Raises — 3×12",
                "Weighted Plank — 3×:45",
            ],
        ),
    ];
}

/// Select the weekly workout plan for a gender/goal pair.
///
/// Every day of a lose or recomposition plan carries the cardio annotation;
/// gain plans never do. No other input influences the result.
pub fn select_plan(gender: Gender, goal: Goal) -> WorkoutPlan {
    let split = match gender {
        Gender::Male => &tables::MALE_SPLIT,
        Gender::Female | Gender::Other => &tables::FEMALE_SPLIT,
    };
    let includes_cardio = goal != Goal::Gain;

    let days = split
        .iter()
        .enumerate()
        .map(|(index, (label, exercises))| DayPlan {
            day: index as u8 + 1,
            label: (*label).to_owned(),
            exercises: exercises.iter().map(|e| (*e).to_owned()).collect(),
            includes_cardio,
        })
        .collect();

    WorkoutPlan { days }
}
