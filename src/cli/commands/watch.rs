use std::thread;
use std::time::Duration;

use chrono::Local;
use colored::Colorize;

use crate::ccache::{self, CacheTool, Operation};
use crate::cli::args::{OutputFormat, WatchArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output;

use super::common;

/// Handle the watch command: re-fetch statistics at a fixed interval until
/// the user interrupts.
///
/// Prints directly instead of returning output, since each tick produces a
/// fresh report.
pub fn watch(
    tool: &CacheTool,
    config: &Config,
    args: &WatchArgs,
    format: OutputFormat,
) -> Result<String> {
    let interval = args.interval.max(1);
    let mode = args.mode.unwrap_or_else(|| config.parse_mode());
    let interrupted = common::setup_interrupt_handler();

    'ticks: loop {
        let result = common::run_and_wait(tool, config, Operation::ShowStats)?;
        let entries = ccache::parse(&result.stdout, mode);
        let rendered = output::format_stats(&entries, args.describe, format)?;

        if format == OutputFormat::Pretty {
            println!("{}", Local::now().format("%H:%M:%S").to_string().dimmed());
        }
        println!("{rendered}\n");

        // Sleep in short slices so Ctrl+C is picked up promptly
        for _ in 0..interval * 10 {
            if common::is_interrupted(&interrupted) {
                break 'ticks;
            }
            thread::sleep(Duration::from_millis(100));
        }
    }

    Ok(String::new())
}
