// ABOUTME: Main library entry point for the gymcoach rules engine
// ABOUTME: Computes nutrition targets and selects weekly workout plans from validated intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Gymcoach Engine
//!
//! A deterministic rules engine that turns a small set of biometric inputs into
//! personalized nutrition targets and a fixed weekly workout plan.
//!
//! The pipeline has three cooperating, pure components:
//!
//! - **Intake validation** ([`intake`]): normalizes raw, unit-specific form
//!   fields (imperial or metric) into a single canonical form (centimeters,
//!   kilograms) and rejects out-of-range biometrics atomically.
//! - **Nutrition metrics** ([`intelligence::nutrition`]): Mifflin-St Jeor BMR,
//!   activity-scaled TDEE, goal-adjusted calorie target, and protein target.
//! - **Plan selection** ([`intelligence::workout_plan`]): maps (gender, goal)
//!   onto a 4-day split drawn from fixed exercise tables.
//!
//! All computation is synchronous and side-effect free; results are recomputed
//! from scratch on every request. The UI layer is an external collaborator that
//! hands in pre-extracted field strings and renders the plain result structures
//! it gets back.
//!
//! ## Example
//!
//! ```rust
//! use gymcoach_engine::config::EngineConfig;
//! use gymcoach_engine::intake;
//! use gymcoach_engine::intelligence::{nutrition, workout_plan};
//! use gymcoach_engine::models::{Gender, Goal, UnitSystem};
//! use gymcoach_engine::state::IntakeRecord;
//!
//! let mut record = IntakeRecord::new(Gender::Male, UnitSystem::Metric, Goal::Lose);
//! record.set_value("heightCm", "180");
//! record.set_value("weightKg", "80");
//! record.set_value("age", "30");
//! record.set_value("activity", "moderate");
//!
//! let input = intake::validate(&record).expect("valid intake");
//! let metrics = nutrition::compute_metrics(&input, EngineConfig::global());
//! let plan = workout_plan::select_plan(input.gender, input.goal);
//!
//! assert_eq!(metrics.bmr, 1780);
//! assert_eq!(plan.days.len(), 4);
//! ```

/// Configuration management for formula coefficients and goal policy
pub mod config;

/// Application constants: unit conversions, persisted field names, storage key
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Intake form validation and canonicalization
pub mod intake;

/// Nutrition metrics and workout plan selection
pub mod intelligence;

/// Common data models for intake, metrics, and plans
pub mod models;

/// Persisted intake form state (the single durable artifact)
pub mod state;
