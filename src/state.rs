// ABOUTME: Persisted intake form state, the single durable artifact of the engine
// ABOUTME: Versionless record of gender/units/goal selectors plus raw field strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Persisted Intake State
//!
//! The UI collaborator saves one record per successful submission and restores
//! it wholesale on reload (last-writer-wins, no versioning, no migration). The
//! record carries the three selectors plus a flat mapping of the nine raw
//! field names to their string values, exactly as entered. Only fields present
//! in the stored mapping are restored; absent fields keep their default state.

use crate::constants::persistence::PERSISTED_FIELDS;
use crate::errors::AppResult;
use crate::models::{Gender, Goal, UnitSystem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const fn default_gender() -> Gender {
    Gender::Female
}

const fn default_units() -> UnitSystem {
    UnitSystem::Imperial
}

const fn default_goal() -> Goal {
    Goal::Lose
}

/// One submission's worth of raw intake, as entered and as persisted.
///
/// This is both the input shape the validator consumes and the record the
/// external persistence collaborator serializes. Selector fields absent from a
/// stored record fall back to the default UI state (female, imperial, lose).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeRecord {
    /// Gender selector
    #[serde(default = "default_gender")]
    pub gender: Gender,
    /// Unit system selector
    #[serde(default = "default_units")]
    pub units: UnitSystem,
    /// Goal selector
    #[serde(default = "default_goal")]
    pub goal: Goal,
    /// Raw field values keyed by field name (see
    /// [`crate::constants::persistence::PERSISTED_FIELDS`])
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Default for IntakeRecord {
    fn default() -> Self {
        Self {
            gender: default_gender(),
            units: default_units(),
            goal: default_goal(),
            values: BTreeMap::new(),
        }
    }
}

impl IntakeRecord {
    /// Create an empty record for the given selectors
    pub fn new(gender: Gender, units: UnitSystem, goal: Goal) -> Self {
        Self {
            gender,
            units,
            goal,
            values: BTreeMap::new(),
        }
    }

    /// Set a raw field value.
    ///
    /// Writes are restricted to the nine persisted field names; anything else
    /// is dropped so stray keys never reach storage.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        if PERSISTED_FIELDS.contains(&field) {
            self.values.insert(field.to_owned(), value.into());
        } else {
            tracing::debug!("ignoring non-persisted intake field '{field}'");
        }
    }

    /// Look up a raw field value
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Deserialize a stored record.
    ///
    /// Corrupt or unreadable JSON yields `None` rather than an error: a bad
    /// stored record degrades to the default UI state, it never blocks a new
    /// submission.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("ignoring unreadable intake state: {e}");
                None
            }
        }
    }

    /// Serialize the record for storage
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
