// ABOUTME: Intelligence module grouping the nutrition metrics engine and plan selector
// ABOUTME: Pure, total functions over canonical input; no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Intelligence
//!
//! The two computational components of the pipeline. Both are pure functions:
//! the metrics engine derives nutrition numbers from canonical input, and the
//! plan selector maps (gender, goal) onto a fixed 4-day split. Neither can
//! fail once intake validation has passed.

/// Nutrition metrics: BMR, TDEE, calorie target, protein target
pub mod nutrition;

/// Weekly workout plan selection from fixed exercise tables
pub mod workout_plan;
