use colored::Colorize;

use crate::cli::args::{ConfigArgs, ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::{CcstatError, Result};

/// Handle the config command
pub fn config(config: &mut Config, args: &ConfigArgs, format: OutputFormat) -> Result<String> {
    match &args.command {
        ConfigCommands::Show => config_show(config, format),
        ConfigCommands::Set { key, value } => config_set(config, key, value, format),
        ConfigCommands::Path => config_path(format),
    }
}

/// Show current configuration
fn config_show(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Configuration".bold()));
            output.push_str(&"─".repeat(40));
            output.push('\n');

            output.push_str(&format!("\n{}\n", "[tool]".cyan()));
            output.push_str(&format!(
                "  path = {}\n",
                config.tool.path.as_deref().unwrap_or("(auto-discover)")
            ));
            output.push_str(&format!(
                "  timeout_secs = {}\n",
                config
                    .tool
                    .timeout_secs
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            ));

            output.push_str(&format!("\n{}\n", "[output]".cyan()));
            output.push_str(&format!("  format = {}\n", config.output.format));
            output.push_str(&format!("  mode = {}\n", config.output.mode));

            Ok(output)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

/// Set a configuration value
fn config_set(config: &mut Config, key: &str, value: &str, format: OutputFormat) -> Result<String> {
    match key {
        "tool.path" => {
            config.tool.path = Some(value.to_string());
            config.save()?;
        }
        "tool.timeout_secs" => {
            let secs: u64 = value.parse().map_err(|_| {
                CcstatError::InvalidArgument(
                    "tool.timeout_secs must be a number of seconds".to_string(),
                )
            })?;
            config.tool.timeout_secs = Some(secs);
            config.save()?;
        }
        "output.format" => {
            if value != "pretty" && value != "json" {
                return Err(CcstatError::InvalidArgument(
                    "output.format must be 'pretty' or 'json'".to_string(),
                ));
            }
            config.output.format = value.to_string();
            config.save()?;
        }
        "output.mode" => {
            if value != "columns" && value != "key-value" {
                return Err(CcstatError::InvalidArgument(
                    "output.mode must be 'columns' or 'key-value'".to_string(),
                ));
            }
            config.output.mode = value.to_string();
            config.save()?;
        }
        _ => {
            return Err(CcstatError::InvalidArgument(format!(
                "Unknown config key: {}. Valid keys: tool.path, tool.timeout_secs, output.format, output.mode",
                key
            )));
        }
    }

    match format {
        OutputFormat::Pretty => Ok(format!("{} Set {} = {}", "✓".green(), key, value)),
        OutputFormat::Json => {
            let result = serde_json::json!({
                "success": true,
                "key": key,
                "value": value
            });
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

/// Show configuration file path
fn config_path(format: OutputFormat) -> Result<String> {
    let paths = Paths::new()?;

    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("Config file: {}\n", paths.config_file.display()));
            output.push_str(&format!(
                "Exists: {}\n",
                if paths.config_exists() {
                    "yes".green()
                } else {
                    "no".yellow()
                }
            ));
            Ok(output)
        }
        OutputFormat::Json => {
            let result = serde_json::json!({
                "path": paths.config_file.display().to_string(),
                "exists": paths.config_exists()
            });
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}
