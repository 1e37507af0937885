use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::ccache::ParseMode;

/// A fast CLI for inspecting and managing the ccache compiler cache
#[derive(Parser)]
#[command(name = "ccstat")]
#[command(version, propagate_version = true)]
#[command(about = "A fast CLI for inspecting and managing the ccache compiler cache")]
pub struct Cli {
    /// Output format for command results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Print shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        clap_complete::generate(shell, &mut cmd, "ccstat", &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show ccache statistics
    #[command(alias = "s")]
    Stats(StatsArgs),

    /// Show statistics continuously, refreshing at an interval
    #[command(alias = "w")]
    Watch(WatchArgs),

    /// Clean up old cached files, trimming the cache to its size limit
    #[command(alias = "c")]
    Cleanup,

    /// Clear the entire cache
    Clear(ClearArgs),

    /// Zero the statistics counters
    #[command(alias = "z")]
    Zero,

    /// Show where the ccache executable was found
    Which,

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Parse mode for the statistics report (overrides the configured mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<ParseMode>,

    /// Show a description under each known statistic
    #[arg(long)]
    pub describe: bool,
}

/// Arguments for the watch command
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds
    #[arg(short = 'n', long, default_value = "5")]
    pub interval: u64,

    /// Parse mode for the statistics report (overrides the configured mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<ParseMode>,

    /// Show a description under each known statistic
    #[arg(long)]
    pub describe: bool,
}

/// Arguments for the clear command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., tool.path)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
