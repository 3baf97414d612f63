//! Shared data models: severity levels, report structures, and run options.

pub mod level;
pub mod report;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single affected-file reference attached to a finding.
pub struct Failure {
    /// File or location identifier, e.g. a template path inside the theme.
    #[serde(rename = "ref")]
    pub file: String,
}

impl Failure {
    pub fn new(file: impl Into<String>) -> Self {
        Failure { file: file.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Compatibility target the scan is run against.
pub enum CheckVersion {
    V1,
    #[default]
    Latest,
}

impl CheckVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckVersion::V1 => "v1",
            CheckVersion::Latest => "latest",
        }
    }
}

impl std::fmt::Display for CheckVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Output mode selector. Only the cli text format exists today; the renderer
/// is the only component that would grow with this enum.
pub enum OutputFormat {
    #[default]
    Cli,
}

#[derive(Debug, Clone, Copy, Default)]
/// Configuration for a single run, built once from CLI flags and passed
/// read-only through the pipeline.
pub struct RunOptions {
    pub check_version: CheckVersion,
    /// Run only the cheap structural pre-checks.
    pub pre_check: bool,
    pub format: OutputFormat,
    /// Whether report text is colorized; resolved once at startup.
    pub color: bool,
}

#[derive(Debug)]
/// Outcome of a full run. The binary's `main` is the single place that turns
/// this into process termination, keeping the pipeline itself pure.
pub struct RunResult {
    pub exit_code: i32,
    pub output: String,
}
