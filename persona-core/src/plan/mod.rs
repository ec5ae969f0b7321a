//! Plan parsing
//!
//! This module handles plans produced by the AI coach: normalizing the stored
//! payload to text and extracting training days, exercises and set/rep
//! targets from the Markdown-like convention the coach writes.

mod parser;
mod payload;

pub use parser::{
    format_target_reps, parse_plan_days, parse_plan_text, parse_set_reps, PlanDay, PlanExercise,
    SetRepTarget, AMRAP,
};
pub use payload::{display_plan_text, extract_plan_text};
