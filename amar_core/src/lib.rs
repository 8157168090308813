#![forbid(unsafe_code)]

//! Core domain model and business logic for the Amar Health BMI tracker.
//!
//! This crate provides:
//! - Domain types (measurements, BMI results, history entries)
//! - The BMI engine (computation, categorization, risk notes)
//! - Bounded calculation history with durable storage
//! - Theme preference persistence
//! - Rotating health tips and built-in example profiles

pub mod types;
pub mod error;
pub mod engine;
pub mod config;
pub mod logging;
pub mod storage;
pub mod history;
pub mod theme;
pub mod tips;
pub mod profiles;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use engine::{category_of, compute_bmi, risk_note_of};
pub use config::Config;
pub use history::MAX_ENTRIES;
pub use tips::{TipRotator, TipTicker, HEALTH_TIPS};
pub use profiles::{example_profiles, ExampleProfile};
