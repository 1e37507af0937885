pub mod json;
pub mod pretty;

use crate::ccache::{CacheTool, StatEntry};
use crate::cli::OutputFormat;
use crate::error::Result;

/// Format parsed statistics based on output format
pub fn format_stats(entries: &[StatEntry], describe: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_stats(entries, describe)),
        OutputFormat::Json => json::format_stats(entries),
    }
}

/// Format the tool locate result based on output format
pub fn format_tool(tool: &CacheTool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_tool(tool)),
        OutputFormat::Json => json::format_tool(tool),
    }
}

/// Format a maintenance-operation acknowledgement based on output format
pub fn format_ack(operation: &'static str, message: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_ack(message)),
        OutputFormat::Json => json::format_ack(operation),
    }
}
