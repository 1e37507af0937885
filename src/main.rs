use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;

use ccstat::ccache::CacheTool;
use ccstat::cli::args::{Cli, Commands, CompletionsArgs};
use ccstat::cli::commands;
use ccstat::config::Config;
use ccstat::error::CcstatError;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), CcstatError> {
    let cli = Cli::parse();

    // Handle completions command early (no config or tool needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load()?;
    let format = cli.output.unwrap_or_else(|| config.output_format());

    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Config(args) => commands::config(&mut config, args, format)?,

        // All other commands need the located tool
        _ => {
            let tool = match &config.tool.path {
                Some(path) => CacheTool::at(path),
                None => CacheTool::locate(),
            };

            match &cli.command {
                Commands::Stats(args) => commands::stats(&tool, &config, args, format)?,
                Commands::Watch(args) => commands::watch(&tool, &config, args, format)?,
                Commands::Cleanup => commands::cleanup(&tool, &config, format)?,
                Commands::Clear(args) => commands::clear(&tool, &config, args, format)?,
                Commands::Zero => commands::zero(&tool, &config, format)?,
                Commands::Which => commands::which(&tool, format)?,
                Commands::Config(_) | Commands::Completions(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
