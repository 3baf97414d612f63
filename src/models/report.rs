//! Report schema: raw engine output and the normalized, bucketed report.
//!
//! `RawReport` is the engine wire form: a partial map of level name to
//! findings, assembled incrementally while checks run. `Report` is what the
//! composer and renderer consume; all four buckets are guaranteed present
//! after classification and finding order within a bucket is preserved.

use crate::models::level::Level;
use crate::models::Failure;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
/// One reported issue as produced by the scan engine. The level is carried
/// as a string until classification validates it.
pub struct RawFinding {
    pub rule: String,
    pub level: String,
    pub failures: Vec<Failure>,
}

#[derive(Debug, Default, Serialize)]
/// Complete engine output for one theme, before bucket normalization.
/// Keys may be missing for levels no check reported against.
pub struct RawReport {
    pub checked_version: String,
    pub results: BTreeMap<String, Vec<RawFinding>>,
}

impl RawReport {
    pub fn new(checked_version: impl Into<String>) -> Self {
        RawReport {
            checked_version: checked_version.into(),
            results: BTreeMap::new(),
        }
    }

    /// Append a finding to its level bucket, creating the bucket on first use.
    pub fn push(&mut self, finding: RawFinding) {
        self.results
            .entry(finding.level.clone())
            .or_default()
            .push(finding);
    }
}

#[derive(Debug, Clone, Serialize)]
/// One reported issue with a validated severity level.
pub struct Finding {
    pub rule: String,
    pub level: Level,
    pub failures: Vec<Failure>,
}

#[derive(Debug, Default, Serialize)]
/// Findings grouped by severity. Every bucket exists, possibly empty.
pub struct Buckets {
    pub error: Vec<Finding>,
    pub warning: Vec<Finding>,
    pub recommendation: Vec<Finding>,
    pub feature: Vec<Finding>,
}

impl Buckets {
    pub fn get(&self, level: Level) -> &[Finding] {
        match level {
            Level::Error => &self.error,
            Level::Warning => &self.warning,
            Level::Recommendation => &self.recommendation,
            Level::Feature => &self.feature,
        }
    }

    pub fn get_mut(&mut self, level: Level) -> &mut Vec<Finding> {
        match level {
            Level::Error => &mut self.error,
            Level::Warning => &mut self.warning,
            Level::Recommendation => &mut self.recommendation,
            Level::Feature => &mut self.feature,
        }
    }
}

#[derive(Debug, Serialize)]
/// Normalized scan report; immutable once classification has produced it.
pub struct Report {
    pub checked_version: String,
    pub results: Buckets,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.results.error.len()
    }

    pub fn warn_count(&self) -> usize {
        self.results.warning.len()
    }

    /// Pass/fail signal: only errors and warnings count against the theme.
    pub fn has_issues(&self) -> bool {
        self.error_count() > 0 || self.warn_count() > 0
    }
}
