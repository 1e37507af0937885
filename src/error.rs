use thiserror::Error;

/// Result type alias for ccstat operations
pub type Result<T> = std::result::Result<T, CcstatError>;

/// Errors that can occur during ccstat operations
#[derive(Error, Debug)]
pub enum CcstatError {
    /// ccache executable could not be located
    #[error("ccache is not installed (or could not be found). Install it with Homebrew (https://brew.sh) or MacPorts, or set an explicit path with 'ccstat config set tool.path /path/to/ccache'.")]
    NotInstalled,

    /// ccache exited with a non-zero status
    #[error("ccache {operation} failed{}", format_detail(.detail))]
    CommandFailed {
        operation: &'static str,
        detail: String,
    },

    /// ccache did not exit within the configured timeout
    #[error("ccache {operation} timed out after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },

    /// JSON serialization error
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

fn format_detail(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

impl CcstatError {
    /// Create a command failure from an operation name and captured stderr
    pub fn command_failed(operation: &'static str, stderr: &str) -> Self {
        Self::CommandFailed {
            operation,
            detail: stderr.trim().to_string(),
        }
    }

    /// Exit code reported to the shell for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotInstalled => 127,
            Self::Timeout { .. } => 124,
            Self::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
