use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One parsed statistics row.
///
/// Equality is structural; a fresh set is produced on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    /// Empty in key-value mode when the line is a bare section header
    pub value: String,
    /// Static description for known labels, empty otherwise
    pub tooltip: String,
}

impl StatEntry {
    /// Whether this entry is a section header rather than a counter
    pub fn is_header(&self) -> bool {
        self.value.is_empty()
    }
}

/// Parsing strategy for the `-s` report.
///
/// ccache changed its statistics format in 4.0: older releases print
/// double-space-aligned columns, newer ones print `key: value` lines.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Double-space-separated columns (ccache < 4.0)
    Columns,
    /// Colon-separated key/value lines (ccache >= 4.0)
    #[default]
    KeyValue,
}

/// Parse the raw `-s` report into ordered statistics rows.
///
/// Order-preserving and idempotent; lines that don't match the selected
/// convention are dropped, never reported as errors.
pub fn parse(raw: &str, mode: ParseMode) -> Vec<StatEntry> {
    match mode {
        ParseMode::Columns => parse_columns(raw),
        ParseMode::KeyValue => parse_key_value(raw),
    }
}

fn parse_columns(raw: &str) -> Vec<StatEntry> {
    let mut entries = Vec::new();

    for line in raw.lines() {
        let parts: Vec<&str> = line.split("  ").collect();
        if parts.len() < 2 {
            continue;
        }

        let label = title_case(parts.first().unwrap_or(&"").trim());
        let value = parts.last().unwrap_or(&"").trim().to_string();
        if label.is_empty() || value.is_empty() {
            continue;
        }

        let tooltip = tooltip_for(&label).to_string();
        entries.push(StatEntry {
            label,
            value,
            tooltip,
        });
    }

    entries
}

fn parse_key_value(raw: &str) -> Vec<StatEntry> {
    let mut entries = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() || !line.contains(':') {
            continue;
        }

        let label = line.split(':').next().unwrap_or("").to_string();
        let value = line.rsplit(':').next().unwrap_or("").trim().to_string();

        entries.push(StatEntry {
            label,
            value,
            tooltip: String::new(),
        });
    }

    entries
}

/// Capitalize the first letter of each word, lowercasing the rest,
/// matching how the labels are displayed.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Look up the static description for a known column-mode label,
/// case-insensitively. Unknown labels get an empty tooltip.
fn tooltip_for(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    TOOLTIPS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, text)| *text)
        .unwrap_or("")
}

/// Descriptions of the counters printed by ccache's column-format report,
/// taken from the ccache manual.
const TOOLTIPS: &[(&str, &str)] = &[
    (
        "autoconf compile/link",
        "Uncachable compilation or linking by an autoconf test.",
    ),
    (
        "bad compiler arguments",
        "Malformed compiler argument, e.g. missing a value for an option that requires an argument or failure to read a file specified by an option argument.",
    ),
    (
        "cache file missing",
        "A file was unexpectedly missing from the cache. This only happens in rare situations, e.g. if one ccache instance is about to get a file from the cache while another instance removed the file as part of cache cleanup.",
    ),
    (
        "cache hit (direct)",
        "A result was successfully found using the direct mode.",
    ),
    (
        "cache hit (preprocessed)",
        "A result was successfully found using the preprocessor mode.",
    ),
    ("cache miss", "No result was found."),
    ("cache size", "Current size of the cache."),
    (
        "called for link",
        "The compiler was called for linking, not compiling.",
    ),
    (
        "called for preprocessing",
        "The compiler was called for preprocessing, not compiling.",
    ),
    (
        "can’t use precompiled header",
        "Preconditions for using precompiled headers were not fulfilled.",
    ),
    (
        "ccache internal error",
        "Unexpected failure, e.g. due to problems reading/writing the cache.",
    ),
    (
        "cleanups performed",
        "Number of cleanups performed, either implicitly due to the cache size limit being reached or due to explicit ccache -c/--cleanup calls.",
    ),
    (
        "compile failed",
        "The compilation failed. No result stored in the cache.",
    ),
    (
        "compiler check failed",
        "A compiler check program specified by compiler_check (CCACHE_COMPILERCHECK) failed.",
    ),
    (
        "compiler produced empty output",
        "The compiler’s output file (typically an object file) was empty after compilation.",
    ),
    (
        "compiler produced no output",
        "The compiler’s output file (typically an object file) was missing after compilation.",
    ),
    (
        "compiler produced stdout",
        "The compiler wrote data to standard output. This is something that compilers normally never do, so ccache is not designed to store such output in the cache.",
    ),
    (
        "couldn’t find the compiler",
        "The compiler to execute could not be found.",
    ),
    (
        "error hashing extra file",
        "Failure reading a file specified by extra_files_to_hash (CCACHE_EXTRAFILES).",
    ),
    (
        "files in cache",
        "Current number of files in the cache.",
    ),
    (
        "multiple source files",
        "The compiler was called to compile multiple source files in one go. This is not supported by ccache.",
    ),
    (
        "no input file",
        "No input file was specified to the compiler.",
    ),
    (
        "output to a non-regular file",
        "The output path specified with -o is not a file (e.g. a directory or a device node).",
    ),
    (
        "output to stdout",
        "The compiler was instructed to write its output to standard output using -o -. This is not supported by ccache.",
    ),
    (
        "preprocessor error",
        "Preprocessing the source code using the compiler’s -E option failed.",
    ),
    (
        "unsupported code directive",
        "Code like the assembler “.incbin” directive was found. This is not supported by ccache.",
    ),
    (
        "unsupported compiler option",
        "A compiler option not supported by ccache was found.",
    ),
    (
        "unsupported source language",
        "A source language e.g. specified with -x was unsupported by ccache.",
    ),
];
