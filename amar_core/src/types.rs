//! Core domain types for the Amar Health BMI tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Measurements (raw height/weight readings)
//! - BMI results and classification bands
//! - History entries and the bounded history log
//! - The persisted theme preference

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Measurement and Result Types
// ============================================================================

/// A single height/weight reading, prior to computation
///
/// Transient input only; measurements are never persisted directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    /// Parse raw text-field input into a measurement.
    ///
    /// Numeric parsing is the caller's job, not the engine's; anything that
    /// does not parse as a number yields `None`. Range checks (positive,
    /// finite) happen later, in [`crate::engine::compute_bmi`].
    pub fn parse(height: &str, weight: &str) -> Option<Self> {
        let height_cm = height.trim().parse().ok()?;
        let weight_kg = weight.trim().parse().ok()?;
        Some(Self {
            height_cm,
            weight_kg,
        })
    }

    /// Compute the BMI result for this measurement, if it is computable.
    pub fn bmi(&self) -> Option<BmiResult> {
        crate::engine::compute_bmi(self.height_cm, self.weight_kg)
    }
}

/// BMI classification band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Display label for the band
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Fixed descriptive health-risk string for the band
    pub fn risk_note(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Increased risk for various health issues including nutritional deficiencies"
            }
            BmiCategory::NormalWeight => "Lowest risk for health problems",
            BmiCategory::Overweight => {
                "Increased risk for heart disease, high blood pressure, and diabetes"
            }
            BmiCategory::Obese => {
                "High risk for heart disease, diabetes, and many other health issues"
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a BMI computation
///
/// `value` is rounded to one decimal place; `category` and `risk_note` are
/// derived from it. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    pub risk_note: &'static str,
}

// ============================================================================
// History and Theme Types
// ============================================================================

/// One recorded calculation
///
/// Field names are the persisted storage format; `date` is an opaque
/// calendar-date string in the user's locale and is never parsed back.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub bmi: f64,
    pub height: f64,
    pub weight: f64,
    pub date: String,
}

impl HistoryEntry {
    /// Stamp a computed result with the measurement it came from and
    /// today's date (M/D/YYYY from the local clock).
    pub fn record(result: &BmiResult, measurement: &Measurement) -> Self {
        let today = Local::now();
        Self {
            bmi: result.value,
            height: measurement.height_cm,
            weight: measurement.weight_kg,
            date: format!("{}/{}/{}", today.month(), today.day(), today.year()),
        }
    }
}

/// Newest-first log of past calculations, capped at
/// [`crate::history::MAX_ENTRIES`]
///
/// Serializes transparently as a plain array of entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HistoryLog(pub(crate) Vec<HistoryEntry>);

/// Dark-mode preference
///
/// Serializes transparently as a bare boolean; defaults to light mode.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ThemePreference {
    pub dark_mode: bool,
}

impl ThemePreference {
    /// The flipped preference
    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }
}
