//! Built-in example profiles for the BMI examples listing.

use crate::engine::compute_bmi;
use crate::types::BmiResult;
use once_cell::sync::Lazy;

/// An illustrative height/weight pairing with its computed BMI
#[derive(Clone, Debug)]
pub struct ExampleProfile {
    pub description: &'static str,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub result: BmiResult,
}

/// Cached example profiles - computed once through the engine and reused
static EXAMPLE_PROFILES: Lazy<Vec<ExampleProfile>> = Lazy::new(build_example_profiles);

/// Get a reference to the cached example profiles
pub fn example_profiles() -> &'static [ExampleProfile] {
    &EXAMPLE_PROFILES
}

fn build_example_profiles() -> Vec<ExampleProfile> {
    [
        ("Average adult male", 170.0, 70.0),
        ("Average adult female", 165.0, 60.0),
        ("Athletic build", 180.0, 75.0),
    ]
    .into_iter()
    .map(|(description, height_cm, weight_kg)| ExampleProfile {
        description,
        height_cm,
        weight_kg,
        result: compute_bmi(height_cm, weight_kg)
            .expect("built-in profile dimensions are positive"),
    })
    .collect()
}
