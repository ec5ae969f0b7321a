//! Days command - list the training days found in a plan

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use persona_core::{format_target_reps, parse_plan_days, Config, OutputFormat, PlanDay};

use super::load_plan_payload;

/// Arguments for the days command
#[derive(Args, Debug)]
pub struct DaysArgs {
    /// Path to the plan file (plain text or JSON)
    pub file: PathBuf,
}

impl DaysArgs {
    /// Execute the days command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let payload = load_plan_payload(&self.file).await?;
        let days = parse_plan_days(&payload);

        if verbose {
            tracing::info!(file = %self.file.display(), days = days.len(), "Parsed plan");
        }

        match config.output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&days)?),
            OutputFormat::Text => print!("{}", render_days(&days)),
        }

        Ok(())
    }
}

/// Render parsed days as human-readable text
pub fn render_days(days: &[PlanDay]) -> String {
    let mut out = String::new();

    if days.is_empty() {
        out.push_str("No training days found in this plan.\n");
        out.push_str("Log a custom workout instead: persona form <FILE>\n");
        return out;
    }

    for day in days {
        let _ = writeln!(out, "Day {}: {}", day.day_number, day.title);

        if day.exercises.is_empty() {
            out.push_str("  (no exercises recognized)\n");
        }

        for exercise in &day.exercises {
            let _ = writeln!(
                out,
                "  {} - Target: {}x{}",
                exercise.name,
                exercise.target_sets,
                format_target_reps(exercise)
            );
        }
        out.push('\n');
    }

    out
}
