//! Workout entry built from a parsed plan day
//!
//! A [`WorkoutDraft`] is the editable form a user fills in when logging a
//! session. Choosing a plan day pre-populates one entry per planned exercise
//! with the planned number of sets, each pre-filled with the lower rep target.
//! Without a plan (or when the plan has no recognizable days) the draft starts
//! with a single blank exercise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::plan::{PlanDay, PlanExercise};
use crate::{Error, Result};

/// Upper bound on sets pre-filled for one planned exercise
///
/// Set counts come straight from model-written plan text and are not trusted.
pub const MAX_PREFILLED_SETS: u32 = 20;

/// One logged set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: u32,
    pub weight: f64,
    pub completed: bool,
}

impl SetEntry {
    /// An uncompleted set with the given reps and weight
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            reps,
            weight,
            completed: false,
        }
    }
}

impl Default for SetEntry {
    fn default() -> Self {
        Self::new(0, 0.0)
    }
}

/// One exercise in a workout draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    /// Planned target in set/rep notation, e.g. "5x8-12"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    /// An unnamed exercise with one empty set
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            target: None,
            sets: vec![SetEntry::default()],
        }
    }

    /// Pre-populate an entry from a planned exercise
    ///
    /// AMRAP exercises get sets pre-filled with 0 reps. At most
    /// [`MAX_PREFILLED_SETS`] sets are created; the target keeps the planned count.
    pub fn from_plan(exercise: &PlanExercise, default_weight: f64) -> Self {
        let set = SetEntry::new(exercise.target_reps_min, default_weight);
        let count = exercise.target_sets.min(MAX_PREFILLED_SETS) as usize;
        Self {
            name: exercise.name.clone(),
            target: Some(exercise.target()),
            sets: vec![set; count],
        }
    }
}

/// An editable workout being logged
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    /// Number of the plan day this workout follows, if any
    pub plan_day: Option<u32>,
    pub exercises: Vec<ExerciseEntry>,
    pub notes: Option<String>,
    pub workout_date: NaiveDate,
}

impl WorkoutDraft {
    /// A custom workout not tied to a plan day
    pub fn custom(workout_date: NaiveDate) -> Self {
        Self {
            plan_day: None,
            exercises: vec![ExerciseEntry::blank()],
            notes: None,
            workout_date,
        }
    }

    /// A workout pre-populated from a plan day
    pub fn from_day(day: &PlanDay, workout_date: NaiveDate, default_weight: f64) -> Self {
        let mut exercises: Vec<ExerciseEntry> = day
            .exercises
            .iter()
            .map(|e| ExerciseEntry::from_plan(e, default_weight))
            .collect();

        if exercises.is_empty() {
            exercises.push(ExerciseEntry::blank());
        }

        Self {
            plan_day: Some(day.day_number),
            exercises,
            notes: None,
            workout_date,
        }
    }

    /// Set free-form notes for the session
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Append a blank exercise
    pub fn add_exercise(&mut self) {
        self.exercises.push(ExerciseEntry::blank());
    }

    /// Remove an exercise; returns false if the index is out of range
    pub fn remove_exercise(&mut self, exercise: usize) -> bool {
        if exercise >= self.exercises.len() {
            return false;
        }
        self.exercises.remove(exercise);
        true
    }

    /// Rename an exercise; returns false if the index is out of range
    pub fn rename_exercise(&mut self, exercise: usize, name: impl Into<String>) -> bool {
        match self.exercises.get_mut(exercise) {
            Some(entry) => {
                entry.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Append a set copying the reps and weight of the exercise's last set
    pub fn add_set(&mut self, exercise: usize) -> bool {
        let Some(entry) = self.exercises.get_mut(exercise) else {
            return false;
        };
        let next = entry
            .sets
            .last()
            .map(|last| SetEntry::new(last.reps, last.weight))
            .unwrap_or_default();
        entry.sets.push(next);
        true
    }

    /// Remove a set; returns false if either index is out of range
    pub fn remove_set(&mut self, exercise: usize, set: usize) -> bool {
        match self.exercises.get_mut(exercise) {
            Some(entry) if set < entry.sets.len() => {
                entry.sets.remove(set);
                true
            }
            _ => false,
        }
    }

    /// Replace a set; returns false if either index is out of range
    pub fn update_set(&mut self, exercise: usize, set: usize, value: SetEntry) -> bool {
        match self
            .exercises
            .get_mut(exercise)
            .and_then(|entry| entry.sets.get_mut(set))
        {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Check the draft can be saved
    pub fn validate(&self) -> Result<()> {
        if self.exercises.iter().any(|e| e.name.trim().is_empty()) {
            return Err(Error::Validation(
                "Please enter a name for all exercises".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and convert into the record that gets persisted
    pub fn to_workout_log(&self) -> Result<WorkoutLog> {
        self.validate()?;

        Ok(WorkoutLog {
            workout_date: self.workout_date,
            workout_data: WorkoutData {
                plan_day: self.plan_day,
                exercises: self.exercises.clone(),
            },
            notes: self
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        })
    }
}

/// Exercise data stored with a workout log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutData {
    pub plan_day: Option<u32>,
    pub exercises: Vec<ExerciseEntry>,
}

/// A completed workout ready to be saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub workout_date: NaiveDate,
    pub workout_data: WorkoutData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Find the first day with the given number
pub fn select_day(days: &[PlanDay], day_number: u32) -> Result<&PlanDay> {
    days.iter()
        .find(|d| d.day_number == day_number)
        .ok_or(Error::DayNotFound(day_number))
}

/// The day a new workout defaults to
pub fn default_day(days: &[PlanDay]) -> Option<&PlanDay> {
    days.first()
}
