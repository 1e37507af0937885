use crate::ccache::{self, CacheTool, Operation};
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output;

/// Handle the stats command
pub fn stats(
    tool: &CacheTool,
    config: &Config,
    args: &StatsArgs,
    format: OutputFormat,
) -> Result<String> {
    let result = super::common::run_and_wait(tool, config, Operation::ShowStats)?;

    let mode = args.mode.unwrap_or_else(|| config.parse_mode());
    let entries = ccache::parse(&result.stdout, mode);

    output::format_stats(&entries, args.describe, format)
}
