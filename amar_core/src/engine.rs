//! BMI computation and classification.
//!
//! The classification cutoffs are 18.5 / 24.9 / 29.9 with a strict `<` on
//! every band, so 24.9 exactly is Overweight and 29.9 exactly is Obese.
//! These are the source cutoffs, not the conventional WHO 25/30, and are
//! kept as-is: moving them would reclassify the boundary values themselves.

use crate::types::{BmiCategory, BmiResult};

/// Centimeters per meter conversion factor
const CM_PER_METER: f64 = 100.0;

/// Exclusive upper bound of the Underweight band
const UNDERWEIGHT_BELOW: f64 = 18.5;

/// Exclusive upper bound of the Normal weight band
const NORMAL_BELOW: f64 = 24.9;

/// Exclusive upper bound of the Overweight band
const OVERWEIGHT_BELOW: f64 = 29.9;

/// Compute a BMI result from a height in centimeters and a weight in
/// kilograms.
///
/// Returns `None` when either input is zero, negative, or non-finite. An
/// absent result means "no calculation performed" - it is not an error and
/// nothing is raised.
///
/// BMI = weight / (height in meters)², rounded to one decimal place, half
/// away from zero. The category and risk note are derived from the rounded
/// value, which is the number the user actually sees.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<BmiResult> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        return None;
    }
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }

    let height_m = height_cm / CM_PER_METER;
    let value = round_to_tenth(weight_kg / (height_m * height_m));

    Some(BmiResult {
        value,
        category: category_of(value),
        risk_note: risk_note_of(value),
    })
}

/// Classify a BMI value.
///
/// Pure function of its input: same value, same band, regardless of call
/// order or prior calls.
pub fn category_of(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BELOW {
        BmiCategory::NormalWeight
    } else if bmi < OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Fixed descriptive risk string for a BMI value
pub fn risk_note_of(bmi: f64) -> &'static str {
    category_of(bmi).risk_note()
}

/// Round to one decimal place, half away from zero
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
