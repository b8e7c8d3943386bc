// ABOUTME: Engine configuration for nutrition metric calculations and goal policy
// ABOUTME: Configures BMR coefficients, activity factors, calorie targets, and protein multipliers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//! Engine Configuration Module
//!
//! Provides type-safe configuration for the metrics engine: Mifflin-St Jeor
//! coefficients, TDEE activity factors, the calorie-target policy (deficit
//! rate, daily floor, recomposition deficit), and protein multipliers.
//!
//! Configuration methods, in priority order:
//!
//! 1. Environment variables (`GYMCOACH_*`)
//! 2. Default values
//!
//! The global accessor never fails: a broken environment falls back to the
//! defaults with a warning so a submission is never blocked by configuration.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A pair of related values is ordered incorrectly
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value lies outside its acceptable bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *American Journal of Clinical Nutrition*,
/// 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
///
/// The neutral constant is a deliberate midpoint between the published male
/// and female constants, not a clinical value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Neutral-gender constant (-78)
    pub msj_neutral_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (daily hard exercise): 1.9
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 2.0
    pub extra_active: f64,
}

/// Calorie target policy per training goal
///
/// The deficit rate rests on the 3500 kcal/lb rule: 1 lb/week of loss maps to
/// a 500 kcal/day deficit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Daily deficit per requested lb/week of loss (500)
    pub deficit_kcal_per_lb_week: f64,
    /// Minimum accepted loss rate (lb/week): 0.25
    pub loss_rate_min_lb_per_week: f64,
    /// Maximum accepted loss rate (lb/week): 2
    pub loss_rate_max_lb_per_week: f64,
    /// Hard floor on the daily calorie target (1200). Applied regardless of
    /// the requested deficit; a large request is silently weakened instead of
    /// rejected.
    pub min_daily_kcal: f64,
    /// Fixed daily deficit for the recomposition goal (250)
    pub recomp_deficit_kcal: f64,
    /// Loss rate assumed when the field is absent or non-numeric (1)
    pub default_loss_rate_lb_per_week: f64,
    /// Surplus assumed when the field is absent or non-numeric (250)
    pub default_surplus_kcal_per_day: f64,
}

/// Protein target multipliers per training goal
///
/// Expressed per pound of body weight, matching the common coaching heuristic
/// of ~1 g protein per lb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Multiplier for the lose goal (0.8 g/lb)
    pub cut_g_per_lb: f64,
    /// Multiplier for the gain and recomposition goals (1.0 g/lb)
    pub base_g_per_lb: f64,
    /// Lower bound applied on the gain goal (0.9 g/lb). Inert at the default
    /// base of 1.0; kept as a tunable floor.
    pub gain_floor_g_per_lb: f64,
}

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE activity factors
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie target policy
    pub calorie_targets: CalorieTargetConfig,
    /// Protein multipliers
    pub protein: ProteinConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bmr: Self::default_bmr_config(),
            activity_factors: Self::default_activity_factors_config(),
            calorie_targets: Self::default_calorie_target_config(),
            protein: Self::default_protein_config(),
        }
    }
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient or policy value is inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary <= 0.0
            || factors.light <= 0.0
            || factors.moderate <= 0.0
            || factors.active <= 0.0
            || factors.very_active <= 0.0
            || factors.extra_active <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }

        let targets = &self.calorie_targets;
        if targets.loss_rate_min_lb_per_week >= targets.loss_rate_max_lb_per_week {
            return Err(ConfigError::InvalidRange(
                "loss_rate_min must be < loss_rate_max",
            ));
        }
        if targets.min_daily_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_daily_kcal must be positive",
            ));
        }
        if targets.deficit_kcal_per_lb_week <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "deficit_kcal_per_lb_week must be positive",
            ));
        }

        let protein = &self.protein;
        if protein.cut_g_per_lb <= 0.0
            || protein.base_g_per_lb <= 0.0
            || protein.gain_floor_g_per_lb <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "protein multipliers must be positive",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    #[allow(clippy::cognitive_complexity)]
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR gender constants
        if let Ok(val) = std::env::var("GYMCOACH_BMR_MALE_CONSTANT") {
            self.bmr.msj_male_constant = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_BMR_MALE_CONSTANT".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_BMR_FEMALE_CONSTANT") {
            self.bmr.msj_female_constant = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_BMR_FEMALE_CONSTANT".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_BMR_NEUTRAL_CONSTANT") {
            self.bmr.msj_neutral_constant = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_BMR_NEUTRAL_CONSTANT".into()))?;
        }

        // Activity factors
        if let Ok(val) = std::env::var("GYMCOACH_ACTIVITY_SEDENTARY") {
            self.activity_factors.sedentary = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_ACTIVITY_SEDENTARY".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_ACTIVITY_LIGHT") {
            self.activity_factors.light = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_ACTIVITY_LIGHT".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_ACTIVITY_MODERATE") {
            self.activity_factors.moderate = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_ACTIVITY_MODERATE".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_ACTIVITY_ACTIVE") {
            self.activity_factors.active = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_ACTIVITY_ACTIVE".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_ACTIVITY_VERY_ACTIVE") {
            self.activity_factors.very_active = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_ACTIVITY_VERY_ACTIVE".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_ACTIVITY_EXTRA_ACTIVE") {
            self.activity_factors.extra_active = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_ACTIVITY_EXTRA_ACTIVE".into()))?;
        }

        // Calorie target policy
        if let Ok(val) = std::env::var("GYMCOACH_TARGET_MIN_DAILY_KCAL") {
            self.calorie_targets.min_daily_kcal = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_TARGET_MIN_DAILY_KCAL".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_TARGET_RECOMP_DEFICIT") {
            self.calorie_targets.recomp_deficit_kcal = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_TARGET_RECOMP_DEFICIT".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_TARGET_DEFAULT_SURPLUS") {
            self.calorie_targets.default_surplus_kcal_per_day = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_TARGET_DEFAULT_SURPLUS".into()))?;
        }

        // Protein multipliers
        if let Ok(val) = std::env::var("GYMCOACH_PROTEIN_CUT_G_PER_LB") {
            self.protein.cut_g_per_lb = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_PROTEIN_CUT_G_PER_LB".into()))?;
        }
        if let Ok(val) = std::env::var("GYMCOACH_PROTEIN_BASE_G_PER_LB") {
            self.protein.base_g_per_lb = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid GYMCOACH_PROTEIN_BASE_G_PER_LB".into()))?;
        }

        Ok(self)
    }

    /// Create default BMR configuration
    /// Based on the Mifflin-St Jeor equation (Mifflin et al. 1990)
    const fn default_bmr_config() -> BmrConfig {
        BmrConfig {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_neutral_constant: -78.0,
        }
    }

    /// Create default activity factors configuration
    /// Based on `McArdle` et al. (2010) Exercise Physiology
    const fn default_activity_factors_config() -> ActivityFactorsConfig {
        ActivityFactorsConfig {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
            extra_active: 2.0,
        }
    }

    /// Create default calorie target configuration
    /// Deficit rate from the 3500 kcal/lb rule
    const fn default_calorie_target_config() -> CalorieTargetConfig {
        CalorieTargetConfig {
            deficit_kcal_per_lb_week: 500.0,
            loss_rate_min_lb_per_week: 0.25,
            loss_rate_max_lb_per_week: 2.0,
            min_daily_kcal: 1200.0,
            recomp_deficit_kcal: 250.0,
            default_loss_rate_lb_per_week: 1.0,
            default_surplus_kcal_per_day: 250.0,
        }
    }

    /// Create default protein configuration
    const fn default_protein_config() -> ProteinConfig {
        ProteinConfig {
            cut_g_per_lb: 0.8,
            base_g_per_lb: 1.0,
            gain_floor_g_per_lb: 0.9,
        }
    }
}
