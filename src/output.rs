//! Text rendering of a normalized scan report.
//!
//! Sections walk the defect buckets in fixed order (errors, warnings,
//! recommendations); empty buckets emit nothing and the informational
//! `feature` bucket is intentionally never part of this output mode. The
//! whole report is composed into a String so the renderer can be swapped for
//! an alternate formatter without touching the composer or classifier.

use crate::models::level::Level;
use crate::models::report::{Finding, Report};
use crate::style;
use crate::summary;

/// Buckets surfaced in the cli report, in render order.
const RENDERED_LEVELS: [Level; 3] = [Level::Error, Level::Warning, Level::Recommendation];

const DOCS_URL: &str = "https://docs.ghost.org/api/handlebars-themes/";
const GSCAN_URL: &str = "https://gscan.ghost.org/";

/// Render the full report: summary, per-severity sections, help footer.
pub fn render(report: &Report, color: bool) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&summary::compose(report, color));
    out.push('\n');

    for level in RENDERED_LEVELS {
        let bucket = report.results.get(level);
        if bucket.is_empty() {
            continue;
        }
        out.push_str(&render_section(level, bucket, color));
    }

    out.push_str(&format!(
        "\nGet more help at {}\n",
        style::cyan_underline(DOCS_URL, color)
    ));
    out.push_str(&format!(
        "You can also check theme compatibility at {}",
        style::cyan_underline(GSCAN_URL, color)
    ));
    out
}

fn render_section(level: Level, bucket: &[Finding], color: bool) -> String {
    let label = level.label();
    let mut out = String::new();

    out.push('\n');
    out.push_str(&style::paint_header(level, label, color));
    out.push('\n');
    out.push_str(&style::paint_header(level, &"-".repeat(label.len()), color));
    out.push('\n');
    if level == Level::Error {
        out.push_str(&style::red(
            "Very recommended to fix, functionality can be restricted.",
            color,
        ));
        out.push('\n');
    }

    for finding in bucket {
        out.push_str(&render_finding(finding, color));
    }
    out
}

fn render_finding(finding: &Finding, color: bool) -> String {
    let mut out = format!(
        "- {} {}\n",
        style::paint_level(finding.level, finding.level.as_str(), color),
        finding.rule
    );
    if !finding.failures.is_empty() {
        let refs: Vec<&str> = finding.failures.iter().map(|f| f.file.as_str()).collect();
        out.push_str(&format!(
            "    {}: {}\n",
            style::bold("Files", color),
            refs.join(", ")
        ));
    }
    out
}
