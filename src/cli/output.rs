use anyhow::Result;
use serde_json::Value;

/// Renders the response payload for stdout. Plain-text bodies are printed as
/// they arrived, JSON bodies pretty-printed.
pub fn render_payload(data: &Value) -> Result<String> {
    match data {
        Value::String(text) => Ok(text.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
