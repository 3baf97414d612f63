//! Severity levels recognized in scan reports.
//!
//! The set is closed: the classifier rejects anything outside `Level::ALL`
//! instead of letting an unrecognized bucket vanish from the output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a single finding. `Feature` is a positive/informational
/// note, not a defect, and is never rendered in the cli report.
pub enum Level {
    Error,
    Warning,
    Recommendation,
    Feature,
}

impl Level {
    /// All recognized levels, in render priority order.
    pub const ALL: [Level; 4] = [
        Level::Error,
        Level::Warning,
        Level::Recommendation,
        Level::Feature,
    ];

    /// Wire name used by the scan engine and as bucket key.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Recommendation => "recommendation",
            Level::Feature => "feature",
        }
    }

    /// Capitalized plural label used as a section header.
    pub fn label(self) -> &'static str {
        match self {
            Level::Error => "Errors",
            Level::Warning => "Warnings",
            Level::Recommendation => "Recommendations",
            Level::Feature => "Features",
        }
    }

    /// Parse a wire name. `None` means the level is outside the fixed set;
    /// callers turn that into a hard configuration error.
    pub fn parse(s: &str) -> Option<Level> {
        match s {
            "error" => Some(Level::Error),
            "warning" => Some(Level::Warning),
            "recommendation" => Some(Level::Recommendation),
            "feature" => Some(Level::Feature),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
