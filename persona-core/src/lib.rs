//! Persona Core - Core library for the Persona training coach
//!
//! This crate turns AI-generated training plans into structured days and
//! exercises, and builds editable workout entries from them.

pub mod config;
pub mod error;
pub mod plan;
pub mod workout;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use plan::{
    display_plan_text, extract_plan_text, format_target_reps, parse_plan_days, parse_plan_text,
    parse_set_reps, PlanDay, PlanExercise, SetRepTarget, AMRAP,
};
pub use workout::{
    default_day, select_day, ExerciseEntry, SetEntry, WorkoutData, WorkoutDraft, WorkoutLog,
    MAX_PREFILLED_SETS,
};
