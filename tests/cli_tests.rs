//! CLI integration tests
//!
//! Help/usage tests run anywhere; end-to-end tests drive the binary against
//! a scripted fake ccache and are Unix-only.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the ccstat binary
fn ccstat() -> Command {
    Command::cargo_bin("ccstat").unwrap()
}

#[test]
fn test_help() {
    ccstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A fast CLI for inspecting and managing the ccache compiler cache",
        ));
}

#[test]
fn test_version() {
    ccstat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ccstat"));
}

#[test]
fn test_stats_help() {
    ccstat()
        .args(["stats", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show ccache statistics"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--describe"));
}

#[test]
fn test_watch_help() {
    ccstat()
        .args(["watch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("refreshing at an interval"))
        .stdout(predicate::str::contains("--interval"));
}

#[test]
fn test_clear_help() {
    ccstat()
        .args(["clear", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear the entire cache"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn test_config_help() {
    ccstat()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage configuration"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_invalid_command() {
    ccstat()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_output_format_options() {
    ccstat()
        .args(["--output", "pretty", "config", "path"])
        .assert()
        .success();

    ccstat()
        .args(["--output", "json", "config", "path"])
        .assert()
        .success();

    ccstat()
        .args(["--output", "invalid", "config", "path"])
        .assert()
        .failure();
}

#[test]
fn test_aliases() {
    ccstat()
        .args(["s", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show ccache statistics"));

    ccstat()
        .args(["z", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zero the statistics counters"));

    ccstat()
        .args(["w", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("refreshing at an interval"));
}

#[test]
fn test_completions() {
    ccstat()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ccstat"));
}

#[cfg(unix)]
mod end_to_end {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    const STATS_REPORT: &str = "\
Cacheable calls:   8 / 10 (80.00%)
  Hits:            6 / 8 (75.00%)
  Misses:          2 / 8 (25.00%)
Local storage:
  Files:           42
";

    /// Set up an isolated HOME with a config pointing at a scripted ccache
    fn fake_home(script_body: &str) -> TempDir {
        let home = TempDir::new().unwrap();

        let ccache = home.path().join("ccache");
        fs::write(&ccache, format!("#!/bin/sh\n{script_body}\n")).unwrap();
        fs::set_permissions(&ccache, fs::Permissions::from_mode(0o755)).unwrap();

        write_config(home.path(), &ccache);
        home
    }

    fn write_config(home: &Path, ccache: &Path) {
        let root = home.join(".ccstat");
        fs::create_dir_all(&root).unwrap();
        fs::write(
            root.join("config.toml"),
            format!("[tool]\npath = \"{}\"\n", ccache.display()),
        )
        .unwrap();
    }

    /// A ccstat command running against the isolated HOME
    fn ccstat_in(home: &TempDir) -> Command {
        let mut cmd = ccstat();
        cmd.env("HOME", home.path());
        cmd
    }

    #[test]
    fn test_stats_renders_parsed_rows() {
        let home = fake_home(&format!(
            "case \"$1\" in -s) printf '%s' '{STATS_REPORT}' ;; esac"
        ));

        ccstat_in(&home)
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cacheable calls"))
            .stdout(predicate::str::contains("8 / 10 (80.00%)"))
            .stdout(predicate::str::contains("42"));
    }

    #[test]
    fn test_stats_json_matches_report_exactly() {
        let home = fake_home(&format!(
            "case \"$1\" in -s) printf '%s' '{STATS_REPORT}' ;; esac"
        ));

        let output = ccstat_in(&home)
            .args(["--output", "json", "stats"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["label"], "Cacheable calls");
        assert_eq!(rows[0]["value"], "8 / 10 (80.00%)");
        assert_eq!(rows[3]["label"], "Local storage");
        assert_eq!(rows[3]["value"], "");
        assert_eq!(rows[4]["value"], "42");
    }

    #[test]
    fn test_zero_then_stats() {
        // -z succeeds silently; -s always returns the fixed report
        let home = fake_home(&format!(
            "case \"$1\" in -s) printf '%s' '{STATS_REPORT}' ;; -z) : ;; esac"
        ));

        ccstat_in(&home)
            .arg("zero")
            .assert()
            .success()
            .stdout(predicate::str::contains("Statistics zeroed."));

        ccstat_in(&home)
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Hits"))
            .stdout(predicate::str::contains("6 / 8 (75.00%)"));
    }

    #[test]
    fn test_cleanup_reports_completion() {
        let home = fake_home("exit 0");

        ccstat_in(&home)
            .arg("cleanup")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cleanup complete."));
    }

    #[test]
    fn test_clear_requires_yes_in_json_mode() {
        let home = fake_home("exit 0");

        ccstat_in(&home)
            .args(["--output", "json", "clear"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--yes"));
    }

    #[test]
    fn test_clear_with_yes() {
        let home = fake_home("exit 0");

        ccstat_in(&home)
            .args(["clear", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache cleared."));
    }

    #[test]
    fn test_failed_invocation_surfaces_stderr() {
        let home = fake_home("echo 'ccache: error: bad cache dir' >&2; exit 1");

        ccstat_in(&home)
            .arg("cleanup")
            .assert()
            .failure()
            .stderr(predicate::str::contains("bad cache dir"));
    }

    #[test]
    fn test_missing_tool_exits_127() {
        let home = TempDir::new().unwrap();
        write_config(home.path(), Path::new("/nonexistent/ccache"));

        ccstat_in(&home)
            .arg("stats")
            .assert()
            .failure()
            .code(127)
            .stderr(predicate::str::contains("not installed"));
    }

    #[test]
    fn test_which_reports_configured_path() {
        let home = fake_home("exit 0");

        ccstat_in(&home)
            .arg("which")
            .assert()
            .success()
            .stdout(predicate::str::contains("ccache"));
    }

    #[test]
    fn test_which_with_missing_tool_suggests_install() {
        let home = TempDir::new().unwrap();
        write_config(home.path(), Path::new("/nonexistent/ccache"));

        ccstat_in(&home)
            .arg("which")
            .assert()
            .success()
            .stdout(predicate::str::contains("https://brew.sh"));
    }

    #[test]
    fn test_config_set_and_show_roundtrip() {
        let home = TempDir::new().unwrap();

        ccstat_in(&home)
            .args(["config", "set", "output.mode", "columns"])
            .assert()
            .success();

        ccstat_in(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("mode = columns"));
    }

    #[test]
    fn test_config_set_rejects_unknown_key() {
        let home = TempDir::new().unwrap();

        ccstat_in(&home)
            .args(["config", "set", "bogus.key", "1"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn test_stats_columns_mode() {
        let home = fake_home(
            "case \"$1\" in -s) printf 'cache hit (direct)                   120\\ncache size                           7.1 MB\\n' ;; esac",
        );

        ccstat_in(&home)
            .args(["stats", "--mode", "columns"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache Hit (Direct)"))
            .stdout(predicate::str::contains("7.1 MB"));
    }
}
