//! Form command - build a workout entry pre-filled from a plan day

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use persona_core::{
    default_day, parse_plan_days, select_day, Config, OutputFormat, PlanDay, WorkoutDraft,
};
use serde_json::Value;

use super::load_plan_payload;

/// Arguments for the form command
#[derive(Args, Debug)]
pub struct FormArgs {
    /// Path to the plan file (plain text or JSON)
    pub file: PathBuf,

    /// Day number to log (defaults to the first day in the plan)
    #[arg(short, long)]
    pub day: Option<u32>,

    /// Workout date (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Notes for the session
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl FormArgs {
    /// Execute the form command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let payload = load_plan_payload(&self.file).await?;
        let days = parse_plan_days(&payload);
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        if days.is_empty() {
            eprintln!("No training days found; starting a custom workout.");
        }

        let draft = build_draft(
            &days,
            self.day,
            date,
            self.notes.as_deref(),
            config.log.default_weight,
        )?;

        if verbose {
            tracing::info!(
                plan_day = ?draft.plan_day,
                exercises = draft.exercises.len(),
                date = %draft.workout_date,
                "Built workout draft"
            );
        }

        let (output, problem) = render_draft(&draft)?;
        if let Some(problem) = problem {
            if config.output.format == OutputFormat::Text {
                eprintln!("{}", problem);
            }
        }
        println!("{}", serde_json::to_string_pretty(&output)?);

        Ok(())
    }
}

/// Build the workout draft for the requested day
///
/// Without a requested day the first day is used, and a plan with no days
/// gives a custom draft. Requesting a day the plan lacks is an error.
pub fn build_draft(
    days: &[PlanDay],
    day: Option<u32>,
    date: NaiveDate,
    notes: Option<&str>,
    default_weight: f64,
) -> persona_core::Result<WorkoutDraft> {
    let day = match day {
        Some(number) => Some(select_day(days, number)?),
        None => default_day(days),
    };

    let draft = match day {
        Some(day) => WorkoutDraft::from_day(day, date, default_weight),
        None => WorkoutDraft::custom(date),
    };

    Ok(match notes {
        Some(notes) => draft.with_notes(notes),
        None => draft,
    })
}

/// The JSON to print for a draft
///
/// A valid draft prints as its workout log. A draft that cannot be saved yet
/// (blank exercise names) prints as the unsaved form, along with the
/// validation message.
pub fn render_draft(draft: &WorkoutDraft) -> serde_json::Result<(Value, Option<String>)> {
    match draft.to_workout_log() {
        Ok(log) => Ok((serde_json::to_value(&log)?, None)),
        Err(e) => {
            let form = serde_json::json!({
                "workoutDate": draft.workout_date,
                "planDay": draft.plan_day,
                "exercises": draft.exercises,
            });
            Ok((form, Some(e.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::{parse_plan_text, Error};

    const PLAN: &str = "#### **Day 1: Push**\n- **Bench Press**: 3x8-12\n#### **Day 2: Pull**\n- **Row**: 2x10";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    #[test]
    fn test_defaults_to_first_day() {
        let days = parse_plan_text(PLAN);
        let draft = build_draft(&days, None, date(), None, 0.0).unwrap();
        assert_eq!(draft.plan_day, Some(1));
        assert_eq!(draft.exercises[0].name, "Bench Press");
        assert_eq!(draft.exercises[0].sets.len(), 3);
    }

    #[test]
    fn test_selects_requested_day() {
        let days = parse_plan_text(PLAN);
        let draft = build_draft(&days, Some(2), date(), Some("easy"), 10.0).unwrap();
        assert_eq!(draft.plan_day, Some(2));
        assert_eq!(draft.exercises[0].name, "Row");
        assert_eq!(draft.exercises[0].sets[0].weight, 10.0);
        assert_eq!(draft.notes.as_deref(), Some("easy"));
    }

    #[test]
    fn test_missing_day_is_an_error() {
        let days = parse_plan_text(PLAN);
        let err = build_draft(&days, Some(5), date(), None, 0.0).unwrap_err();
        assert!(matches!(err, Error::DayNotFound(5)));
    }

    #[test]
    fn test_requested_day_on_plan_without_days() {
        let err = build_draft(&[], Some(1), date(), None, 0.0).unwrap_err();
        assert!(matches!(err, Error::DayNotFound(1)));
    }

    #[test]
    fn test_plan_without_days_gives_custom_draft() {
        let days = parse_plan_text("Just lift something heavy.");
        let draft = build_draft(&days, None, date(), None, 0.0).unwrap();
        assert_eq!(draft, WorkoutDraft::custom(date()));
    }

    #[test]
    fn test_render_valid_draft_as_log() {
        let days = parse_plan_text(PLAN);
        let draft = build_draft(&days, Some(2), date(), None, 0.0).unwrap();
        let (output, problem) = render_draft(&draft).unwrap();

        assert!(problem.is_none());
        assert_eq!(output["workoutDate"], "2024-03-18");
        assert_eq!(output["workoutData"]["planDay"], 2);
        assert_eq!(output["workoutData"]["exercises"][0]["target"], "2x10");
    }

    #[test]
    fn test_render_custom_draft_as_unsaved_form() {
        let draft = WorkoutDraft::custom(date());
        let (output, problem) = render_draft(&draft).unwrap();

        assert_eq!(
            problem.as_deref(),
            Some("Invalid workout: Please enter a name for all exercises")
        );
        assert_eq!(output["planDay"], Value::Null);
        assert_eq!(output["exercises"][0]["name"], "");
        assert_eq!(output["exercises"][0]["sets"].as_array().map(Vec::len), Some(1));
    }
}
