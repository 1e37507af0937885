use std::path::{Path, PathBuf};
use std::process::Command;

/// Fixed locations probed when `which` finds nothing: MacPorts, then
/// Homebrew on Apple Silicon.
const FALLBACK_PATHS: [&str; 2] = ["/opt/local/bin/ccache", "/opt/homebrew/bin/ccache"];

/// Descriptor of the located ccache executable.
///
/// Constructed once per process and passed explicitly to every command;
/// a tool that could not be located stays permanently "not installed" and
/// every operation on it fails fast without spawning a process.
#[derive(Debug, Clone)]
pub struct CacheTool {
    path: Option<PathBuf>,
}

impl CacheTool {
    /// Locate the ccache executable.
    ///
    /// Asks the user's login shell first (`$SHELL -l -c "which ccache"`),
    /// so PATH customizations from shell profiles are honored, then probes
    /// the fixed package-manager locations.
    pub fn locate() -> Self {
        let path = std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .and_then(|shell| which_via_shell(&shell))
            .or_else(probe_fallbacks);

        Self { path }
    }

    /// Use an explicit executable path (config override, tests).
    ///
    /// A path that does not exist on disk yields a not-installed tool.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            path: path.is_file().then_some(path),
        }
    }

    /// A tool in the terminal not-installed state.
    pub fn missing() -> Self {
        Self { path: None }
    }

    /// Whether a ccache executable was found
    pub fn installed(&self) -> bool {
        self.path.is_some()
    }

    /// Absolute path of the located executable, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Run `which ccache` through the given shell in login mode and return the
/// reported path if the lookup succeeded and the path exists.
fn which_via_shell(shell: &str) -> Option<PathBuf> {
    let output = Command::new(shell)
        .args(["-l", "-c", "which ccache"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if found.is_empty() {
        return None;
    }

    let found = PathBuf::from(found);
    found.is_file().then_some(found)
}

fn probe_fallbacks() -> Option<PathBuf> {
    FALLBACK_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}
