//! CLI command implementations

pub mod days;
pub mod form;
pub mod show;

pub use days::DaysArgs;
pub use form::FormArgs;
pub use show::ShowArgs;

use std::path::Path;

use serde_json::Value;

/// Read a stored plan from disk
///
/// Files holding valid JSON (such as a `{"format": "text", "content": ...}`
/// wrapper) are loaded as JSON; anything else is treated as plan text.
pub async fn load_plan_payload(file: &Path) -> anyhow::Result<Value> {
    let content = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => {
            tracing::debug!(file = %file.display(), "Loaded plan as JSON");
            Ok(value)
        }
        Err(_) => {
            tracing::debug!(file = %file.display(), "Loaded plan as text");
            Ok(Value::String(content))
        }
    }
}
