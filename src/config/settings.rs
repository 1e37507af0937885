use serde::{Deserialize, Serialize};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::time::Duration;

use super::paths::Paths;
use crate::ccache::ParseMode;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// ccache tool settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the ccache executable itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Explicit path to the ccache executable, overriding discovery
    pub path: Option<String>,
    /// Give up waiting for an invocation after this many seconds.
    /// Absent means wait forever.
    pub timeout_secs: Option<u64>,
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format ("pretty" or "json")
    #[serde(default = "default_format")]
    pub format: String,

    /// Default statistics parse mode ("columns" or "key-value")
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_mode() -> String {
    "key-value".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            mode: default_mode(),
        }
    }
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let paths = Paths::new()?;
        self.save_to(&paths)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, &contents)?;

        // Keep the config private (600 = owner read/write only)
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&paths.config_file, perms)?;
        }

        Ok(())
    }

    /// The configured invocation timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.tool.timeout_secs.map(Duration::from_secs)
    }

    /// The configured default parse mode
    pub fn parse_mode(&self) -> ParseMode {
        match self.output.mode.as_str() {
            "columns" => ParseMode::Columns,
            _ => ParseMode::KeyValue,
        }
    }

    /// The configured default output format
    pub fn output_format(&self) -> OutputFormat {
        match self.output.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Pretty,
        }
    }
}
