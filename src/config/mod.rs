// ABOUTME: Configuration management module for the gymcoach rules engine
// ABOUTME: Handles formula coefficients, goal policy, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the gymcoach engine
//!
//! Centralized, type-safe configuration for the metrics pipeline:
//!
//! - **BMR**: Mifflin-St Jeor coefficients and gender offsets
//! - **Activity factors**: TDEE multipliers per activity level
//! - **Calorie targets**: deficit/surplus policy and the daily floor
//! - **Protein**: per-pound multipliers per goal
//!
//! Defaults match the published formulas; individual values can be overridden
//! through `GYMCOACH_*` environment variables and are validated before use.

/// Engine configuration: coefficients, factors, and goal policy
pub mod engine_config;

pub use engine_config::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, ConfigError, EngineConfig,
    ProteinConfig,
};
