// ABOUTME: System-wide constants for the gymcoach rules engine
// ABOUTME: Contains unit conversion factors, persisted field names, and the storage key
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared constants.
//!
//! Unit conversions are the exact factors the intake validator and metrics
//! engine apply; persisted-state constants define the versionless on-disk
//! record format accepted on reload.

/// Unit conversion factors
pub mod units {
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;

    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;

    /// Kilograms per pound (NIST conversion)
    pub const KG_PER_LB: f64 = 0.453_592_37;

    /// Pounds per kilogram
    pub const LB_PER_KG: f64 = 2.204_62;
}

/// Persisted intake state format
pub mod persistence {
    /// Storage key under which the intake record is saved
    pub const STATE_STORAGE_KEY: &str = "gymcoach_state";

    /// The nine raw field names carried in the persisted `values` mapping.
    /// Only one schema has ever existed; there is no versioning or migration.
    pub const PERSISTED_FIELDS: [&str; 9] = [
        "heightFt", "heightIn", "weightLb", "heightCm", "weightKg", "age", "activity", "lossRate",
        "surplus",
    ];

    /// Field name: height in feet (imperial)
    pub const FIELD_HEIGHT_FT: &str = "heightFt";
    /// Field name: remaining height in inches (imperial)
    pub const FIELD_HEIGHT_IN: &str = "heightIn";
    /// Field name: body weight in pounds (imperial)
    pub const FIELD_WEIGHT_LB: &str = "weightLb";
    /// Field name: height in centimeters (metric)
    pub const FIELD_HEIGHT_CM: &str = "heightCm";
    /// Field name: body weight in kilograms (metric)
    pub const FIELD_WEIGHT_KG: &str = "weightKg";
    /// Field name: age in years
    pub const FIELD_AGE: &str = "age";
    /// Field name: activity level selector
    pub const FIELD_ACTIVITY: &str = "activity";
    /// Field name: requested weight-loss rate in lb/week
    pub const FIELD_LOSS_RATE: &str = "lossRate";
    /// Field name: requested caloric surplus in kcal/day
    pub const FIELD_SURPLUS: &str = "surplus";
}
