//! Severity classification: raw engine output to a normalized report.
//!
//! The engine assembles its results map incrementally, so buckets for levels
//! nothing reported against are simply absent. Classification guarantees all
//! four recognized buckets exist (default empty) before the composer and
//! renderer run, validates every level tag against the fixed set, and never
//! reorders or rewrites finding content. It is the single normalization step
//! between the engine and the renderer.

use crate::models::level::Level;
use crate::models::report::{Finding, RawReport, Report};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Integration fault: a finding or bucket carries a level outside the fixed
/// set. A correct scan engine never produces this; it is surfaced loudly
/// rather than silently dropping the bucket.
pub enum ConfigError {
    #[error("unrecognized severity level '{level}' reported for rule '{rule}'")]
    UnknownLevel { level: String, rule: String },
}

/// Normalize a raw report into one with all four severity buckets present.
pub fn classify(raw: RawReport) -> Result<Report, ConfigError> {
    let RawReport {
        checked_version,
        mut results,
    } = raw;

    let mut report = Report {
        checked_version,
        results: Default::default(),
    };

    for level in Level::ALL {
        let bucket = results.remove(level.as_str()).unwrap_or_default();
        let out = report.results.get_mut(level);
        for finding in bucket {
            // The finding's own tag must also resolve; a mismatch with its
            // bucket key means the engine mis-filed it.
            match Level::parse(&finding.level) {
                Some(tag) if tag == level => out.push(Finding {
                    rule: finding.rule,
                    level: tag,
                    failures: finding.failures,
                }),
                _ => {
                    return Err(ConfigError::UnknownLevel {
                        level: finding.level,
                        rule: finding.rule,
                    })
                }
            }
        }
    }

    // Any bucket left over was keyed by a level outside the fixed set.
    if let Some((level, bucket)) = results.into_iter().next() {
        let rule = bucket
            .into_iter()
            .next()
            .map(|f| f.rule)
            .unwrap_or_default();
        return Err(ConfigError::UnknownLevel { level, rule });
    }

    Ok(report)
}
