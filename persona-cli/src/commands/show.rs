//! Show command - print a stored plan for reading

use std::path::PathBuf;

use clap::Args;
use persona_core::display_plan_text;

use super::load_plan_payload;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to the plan file (plain text or JSON)
    pub file: PathBuf,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self) -> anyhow::Result<()> {
        let payload = load_plan_payload(&self.file).await?;
        println!("{}", display_plan_text(&payload));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_show_reads_plan_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::json!({"format": "text", "content": "Day 1"})).unwrap();

        let args = ShowArgs {
            file: file.path().to_path_buf(),
        };
        assert!(args.execute().await.is_ok());
    }

    #[tokio::test]
    async fn test_show_missing_file_fails() {
        let args = ShowArgs {
            file: PathBuf::from("/nonexistent/plan.json"),
        };
        assert!(args.execute().await.is_err());
    }
}
