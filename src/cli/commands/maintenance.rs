//! The three maintenance operations: cleanup, clear, and zero.

use crate::ccache::{CacheTool, Operation};
use crate::cli::args::{ClearArgs, OutputFormat};
use crate::config::Config;
use crate::error::{CcstatError, Result};
use crate::output;

use super::common;

/// Handle the cleanup command (`ccache -c`)
pub fn cleanup(tool: &CacheTool, config: &Config, format: OutputFormat) -> Result<String> {
    common::run_and_wait(tool, config, Operation::Cleanup)?;
    output::format_ack("cleanup", "Cleanup complete.", format)
}

/// Handle the clear command (`ccache -C`).
///
/// Destructive: wipes every cached object, so it asks first unless --yes
/// was passed. JSON mode has no prompt and requires --yes.
pub fn clear(
    tool: &CacheTool,
    config: &Config,
    args: &ClearArgs,
    format: OutputFormat,
) -> Result<String> {
    if !args.yes {
        if format == OutputFormat::Json {
            return Err(CcstatError::InvalidArgument(
                "clear requires --yes with JSON output".to_string(),
            ));
        }
        if !common::confirm("This will remove every cached object. Continue?")? {
            return Ok("Aborted.".to_string());
        }
    }

    common::run_and_wait(tool, config, Operation::ClearCache)?;
    output::format_ack("clear", "Cache cleared.", format)
}

/// Handle the zero command (`ccache -z`)
pub fn zero(tool: &CacheTool, config: &Config, format: OutputFormat) -> Result<String> {
    common::run_and_wait(tool, config, Operation::ZeroStats)?;
    output::format_ack("zero", "Statistics zeroed.", format)
}
