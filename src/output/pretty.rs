use colored::Colorize;
use terminal_size::{terminal_size, Width};

use crate::ccache::{CacheTool, StatEntry};

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_chars {
        let truncated: String = chars.iter().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Width of the label column: the longest label, capped so the value column
/// still fits in the terminal.
fn label_width(entries: &[StatEntry]) -> usize {
    let longest = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);

    let cap = terminal_size()
        .map(|(Width(w), _)| (w as usize).saturating_sub(24))
        .unwrap_or(40)
        .max(16);

    longest.min(cap)
}

/// Format parsed statistics as an aligned two-column table
pub fn format_stats(entries: &[StatEntry], describe: bool) -> String {
    if entries.is_empty() {
        return "No statistics available.".to_string();
    }

    let width = label_width(entries);

    let mut output = String::new();
    output.push_str(&format!("{}\n", "ccache statistics".bold()));
    output.push_str(&"─".repeat(width + 24));
    output.push('\n');

    for entry in entries {
        if entry.is_header() {
            // Section header from the key-value format: label only
            output.push_str(&format!("{}\n", entry.label.bold()));
            continue;
        }

        // Pad before coloring so escape codes don't break the alignment
        let label = format!("{:<w$}", truncate_str(&entry.label, width), w = width);
        output.push_str(&format!("{}  {}\n", label.cyan(), entry.value));

        if describe && !entry.tooltip.is_empty() {
            output.push_str(&format!("  {}\n", entry.tooltip.dimmed()));
        }
    }

    output.trim_end().to_string()
}

/// Format the locate result for the `which` command
pub fn format_tool(tool: &CacheTool) -> String {
    match tool.path() {
        Some(path) => format!("{} {}", "ccache:".cyan(), path.display()),
        None => format!(
            "{}\nInstall it with Homebrew ({}) or MacPorts.",
            "ccache is not installed.".yellow(),
            "https://brew.sh".underline()
        ),
    }
}

/// Format a maintenance-operation acknowledgement
pub fn format_ack(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}
