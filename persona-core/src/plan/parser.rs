//! Training plan text parser
//!
//! Plans follow the convention the coach prompt asks for:
//!
//! ```text
//! #### **Day 1: Push**
//! - **Bench Press**: 5x8-12
//! - **Overhead Press (strict)**: 3xAMRAP
//! ```
//!
//! Parsing is best-effort. Text without day headers yields no days, and an
//! exercise line whose set/rep notation is not recognized is skipped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use super::payload::extract_plan_text;

/// Marker stored in [`PlanExercise::notes`] for as-many-reps-as-possible sets
pub const AMRAP: &str = "AMRAP";

/// `#### **Day N: Title**`, tolerant of spacing and letter case
static DAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)####\s*\*\*Day\s+([0-9]+):\s*([^*]+)\*\*").expect("day header regex is valid")
});

/// `- **Name (aside)**: spec` up to the end of the line
static EXERCISE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-\s*\*\*([^*:]+?)(?:\s*\([^)]+\))?\*\*:\s*(.+?)(?:\n|$)")
        .expect("exercise line regex is valid")
});

static AMRAP_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)xAMRAP").expect("AMRAP regex is valid"));

static NUMERIC_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)x([0-9]+)(?:-([0-9]+))?").expect("numeric set/rep regex is valid")
});

/// A training day parsed from a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    /// Number from the header, taken verbatim (not checked for order or uniqueness)
    pub day_number: u32,
    /// Label following "Day N:"
    pub title: String,
    /// Exercises in the order they appear under the header
    pub exercises: Vec<PlanExercise>,
}

/// An exercise with its set/rep target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    /// Exercise name without any parenthetical aside
    pub name: String,
    pub target_sets: u32,
    /// Lower (or only) rep target; 0 for AMRAP
    pub target_reps_min: u32,
    /// Upper rep target, only set by the "min-max" notation
    pub target_reps_max: Option<u32>,
    /// [`AMRAP`] for as-many-reps-as-possible sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlanExercise {
    /// Build an exercise from a name and a parsed target
    pub fn new(name: impl Into<String>, target: SetRepTarget) -> Self {
        Self {
            name: name.into(),
            target_sets: target.sets,
            target_reps_min: target.reps_min,
            target_reps_max: target.reps_max,
            notes: target.amrap.then(|| AMRAP.to_string()),
        }
    }

    /// Whether this is an as-many-reps-as-possible exercise
    pub fn is_amrap(&self) -> bool {
        self.notes.as_deref() == Some(AMRAP)
    }

    /// Full target in set/rep notation, e.g. "5x8-12" or "3xAMRAP"
    pub fn target(&self) -> String {
        format!("{}x{}", self.target_sets, format_target_reps(self))
    }
}

/// Sets and reps read from set/rep notation such as "5x8-12" or "3xAMRAP"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRepTarget {
    pub sets: u32,
    pub reps_min: u32,
    pub reps_max: Option<u32>,
    pub amrap: bool,
}

/// Parse the training days out of a stored plan payload
///
/// The payload is first normalized to text with [`extract_plan_text`].
pub fn parse_plan_days(payload: &Value) -> Vec<PlanDay> {
    parse_plan_text(&extract_plan_text(payload))
}

/// Parse the training days out of plan text
///
/// Each day owns the text from the end of its header to the start of the
/// next header, or to the end of the text for the last day.
pub fn parse_plan_text(text: &str) -> Vec<PlanDay> {
    let headers: Vec<Captures<'_>> = DAY_HEADER.captures_iter(text).collect();

    let days: Vec<PlanDay> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let start = header.get(0).map_or(0, |m| m.end());
            let end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());

            PlanDay {
                // Overlong day numbers saturate rather than dropping the day
                day_number: header[1].parse().unwrap_or(u32::MAX),
                title: header[2].trim().to_string(),
                exercises: parse_exercises(&text[start..end]),
            }
        })
        .collect();

    debug!(
        days = days.len(),
        exercises = days.iter().map(|d| d.exercises.len()).sum::<usize>(),
        "Parsed plan days"
    );

    days
}

fn parse_exercises(day_content: &str) -> Vec<PlanExercise> {
    EXERCISE_LINE
        .captures_iter(day_content)
        .filter_map(|line| {
            let name = line[1].trim();
            let spec = line[2].trim();

            match parse_set_reps(spec) {
                Some(target) => Some(PlanExercise::new(name, target)),
                None => {
                    trace!(name, spec, "Skipping exercise with unrecognized set/rep notation");
                    None
                }
            }
        })
        .collect()
}

/// Parse set/rep notation
///
/// AMRAP notation ("3xAMRAP", any letter case) is tried before numeric
/// notation ("5x8-12", "3x12"). Returns `None` when neither is found.
pub fn parse_set_reps(spec: &str) -> Option<SetRepTarget> {
    if let Some(caps) = AMRAP_SPEC.captures(spec) {
        // Sets are the digits attached to "xAMRAP", not the first number in the text
        return Some(SetRepTarget {
            sets: caps[1].parse().ok()?,
            reps_min: 0,
            reps_max: None,
            amrap: true,
        });
    }

    let caps = NUMERIC_SPEC.captures(spec)?;
    let reps_max = match caps.get(3) {
        Some(max) => Some(max.as_str().parse().ok()?),
        None => None,
    };

    Some(SetRepTarget {
        sets: caps[1].parse().ok()?,
        reps_min: caps[2].parse().ok()?,
        reps_max,
        amrap: false,
    })
}

/// Format the rep part of an exercise's target for display
///
/// "AMRAP", "8-12" or "12". A present maximum always prints as a range,
/// including "0-0".
pub fn format_target_reps(exercise: &PlanExercise) -> String {
    if exercise.is_amrap() {
        return AMRAP.to_string();
    }

    match exercise.target_reps_max {
        Some(max) => format!("{}-{}", exercise.target_reps_min, max),
        None => exercise.target_reps_min.to_string(),
    }
}
