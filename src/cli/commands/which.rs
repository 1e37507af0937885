use crate::ccache::CacheTool;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::output;

/// Handle the which command: report the locate result without invoking
/// anything. Not finding ccache is a report here, not an error.
pub fn which(tool: &CacheTool, format: OutputFormat) -> Result<String> {
    output::format_tool(tool, format)
}
