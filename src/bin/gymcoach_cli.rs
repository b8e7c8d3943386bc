// ABOUTME: Gymcoach CLI - drives the full intake/metrics/plan pipeline from the terminal
// ABOUTME: Stands in for the UI collaborator: collects raw fields, renders results, persists state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Metric intake, weight-loss goal
//! gymcoach-cli --gender male --units metric --goal lose \
//!     --height-cm 180 --weight-kg 80 --age 30 --activity moderate --loss-rate 1
//!
//! # Imperial intake, muscle-gain goal
//! gymcoach-cli --gender female --units imperial --goal gain \
//!     --height-ft 5 --height-in 6 --weight-lb 140 --age 27 --activity active
//!
//! # Re-run with the previously saved fields
//! gymcoach-cli
//!
//! # Forget the saved fields
//! gymcoach-cli --reset
//! ```

use clap::Parser;
use gymcoach_engine::config::EngineConfig;
use gymcoach_engine::constants::persistence::{
    FIELD_ACTIVITY, FIELD_AGE, FIELD_HEIGHT_CM, FIELD_HEIGHT_FT, FIELD_HEIGHT_IN, FIELD_LOSS_RATE,
    FIELD_SURPLUS, FIELD_WEIGHT_KG, FIELD_WEIGHT_LB, STATE_STORAGE_KEY,
};
use gymcoach_engine::errors::{AppError, AppResult};
use gymcoach_engine::intake;
use gymcoach_engine::intelligence::{nutrition, workout_plan};
use gymcoach_engine::models::{MetricsResult, WorkoutPlan};
use gymcoach_engine::state::IntakeRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gymcoach-cli",
    about = "Personalized nutrition targets and a weekly workout plan",
    long_about = "Computes BMR, maintenance calories, a goal-adjusted calorie target, a protein \
                  target, and a 4-day workout plan from basic body metrics. Fields omitted on the \
                  command line are restored from the previously saved intake."
)]
struct Cli {
    /// Gender selector: male, female, or other
    #[arg(long)]
    gender: Option<String>,

    /// Unit system for height/weight fields: imperial or metric
    #[arg(long)]
    units: Option<String>,

    /// Training goal: lose, gain, or both
    #[arg(long)]
    goal: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Height, feet component (imperial)
    #[arg(long)]
    height_ft: Option<String>,

    /// Height, inches component (imperial)
    #[arg(long)]
    height_in: Option<String>,

    /// Body weight in pounds (imperial)
    #[arg(long)]
    weight_lb: Option<String>,

    /// Height in centimeters (metric)
    #[arg(long)]
    height_cm: Option<String>,

    /// Body weight in kilograms (metric)
    #[arg(long)]
    weight_kg: Option<String>,

    /// Activity level: sedentary, light, moderate, active, very_active, extra_active
    #[arg(long)]
    activity: Option<String>,

    /// Desired loss rate in lb/week (lose goal)
    #[arg(long)]
    loss_rate: Option<String>,

    /// Desired caloric surplus in kcal/day (gain goal)
    #[arg(long)]
    surplus: Option<String>,

    /// Path to the saved intake state file
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Do not overwrite the saved intake state
    #[arg(long)]
    no_save: bool,

    /// Clear the saved intake state and exit
    #[arg(long)]
    reset: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let state_path = state_path(cli.state_file.clone());

    if cli.reset {
        if state_path.exists() {
            std::fs::remove_file(&state_path)
                .map_err(|e| AppError::storage(format!("failed to clear saved state: {e}")))?;
        }
        println!("Saved intake state cleared.");
        return Ok(());
    }

    let record = build_record(&cli, load_record(&state_path))?;

    let input = intake::validate(&record)?;
    let metrics = nutrition::compute_metrics(&input, EngineConfig::global());
    let plan = workout_plan::select_plan(input.gender, input.goal);

    render_metrics(&metrics);
    render_plan(&plan);

    if !cli.no_save {
        save_record(&record, &state_path)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Default state location: `<data dir>/gymcoach/gymcoach_state.json`
fn state_path(overridden: Option<PathBuf>) -> PathBuf {
    overridden.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gymcoach")
            .join(format!("{STATE_STORAGE_KEY}.json"))
    })
}

fn load_record(path: &Path) -> Option<IntakeRecord> {
    let json = std::fs::read_to_string(path).ok()?;
    let record = IntakeRecord::from_json(&json);
    if record.is_some() {
        debug!("restored saved intake from {}", path.display());
    }
    record
}

/// Merge command-line fields over the restored record.
///
/// Selector flags replace the stored selectors; field flags replace the
/// stored field values; anything not given keeps its restored (or default)
/// state. This mirrors how the form restores saved values and lets the user
/// edit before resubmitting.
fn build_record(cli: &Cli, stored: Option<IntakeRecord>) -> AppResult<IntakeRecord> {
    let mut record = stored.unwrap_or_default();

    if let Some(raw) = cli.gender.as_deref() {
        record.gender = raw.parse()?;
    }
    if let Some(raw) = cli.units.as_deref() {
        record.units = raw.parse()?;
    }
    if let Some(raw) = cli.goal.as_deref() {
        record.goal = raw.parse()?;
    }

    let field_flags = [
        (FIELD_AGE, &cli.age),
        (FIELD_HEIGHT_FT, &cli.height_ft),
        (FIELD_HEIGHT_IN, &cli.height_in),
        (FIELD_WEIGHT_LB, &cli.weight_lb),
        (FIELD_HEIGHT_CM, &cli.height_cm),
        (FIELD_WEIGHT_KG, &cli.weight_kg),
        (FIELD_ACTIVITY, &cli.activity),
        (FIELD_LOSS_RATE, &cli.loss_rate),
        (FIELD_SURPLUS, &cli.surplus),
    ];
    for (field, flag) in field_flags {
        if let Some(value) = flag {
            record.set_value(field, value.clone());
        }
    }

    Ok(record)
}

fn save_record(record: &IntakeRecord, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::storage(format!("failed to create state directory: {e}")))?;
    }
    std::fs::write(path, record.to_json()?)
        .map_err(|e| AppError::storage(format!("failed to save state: {e}")))?;
    debug!("saved intake to {}", path.display());
    Ok(())
}

fn render_metrics(metrics: &MetricsResult) {
    println!("BMR      (Basal Metabolic Rate)  {} kcal", metrics.bmr);
    println!("TDEE     (Maintenance Calories)  {} kcal", metrics.tdee);
    println!(
        "Target   (Daily Target)          {} kcal",
        metrics.target_calories
    );
    println!(
        "Protein  (Daily Protein)         {} g",
        metrics.protein_grams
    );
    if !metrics.notes.is_empty() {
        println!("Notes: {}", metrics.notes.join(" "));
    }
    println!();
}

fn render_plan(plan: &WorkoutPlan) {
    for day in &plan.days {
        println!("Day {} • {}", day.day, day.label);
        if day.includes_cardio {
            println!("  + Cardio: {}", workout_plan::CARDIO_SUGGESTION);
        }
        for exercise in &day.exercises {
            println!("  - {exercise}");
        }
        println!();
    }
}
