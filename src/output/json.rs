use crate::ccache::{CacheTool, StatEntry};
use crate::error::Result;

/// Format parsed statistics as JSON
pub fn format_stats(entries: &[StatEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Format the locate result as JSON
pub fn format_tool(tool: &CacheTool) -> Result<String> {
    let value = serde_json::json!({
        "installed": tool.installed(),
        "path": tool.path().map(|p| p.display().to_string()),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format a maintenance-operation acknowledgement as JSON
pub fn format_ack(operation: &'static str) -> Result<String> {
    let value = serde_json::json!({
        "success": true,
        "operation": operation,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
