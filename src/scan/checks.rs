//! Theme checks.
//!
//! Each check reads the extracted theme directory and reports findings
//! against the rule table. Content checks (asset layout, deprecated helper
//! scans, partials) are skipped in pre-check mode; the deprecation scans
//! only apply to the latest compatibility target since those helpers are
//! still valid in 1.x.

use crate::models::report::RawFinding;
use crate::models::{CheckVersion, Failure, RunOptions};
use crate::scan::rules::{self, Rule};
use glob::glob;
use regex::Regex;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

/// Run all checks enabled by `opts` against the theme at `root`.
pub fn run_checks(root: &Path, opts: &RunOptions) -> Vec<RawFinding> {
    let mut findings = Vec::new();
    check_package_json(root, opts, &mut findings);
    check_templates(root, opts, &mut findings);
    check_assets(root, opts, &mut findings);
    if opts.check_version == CheckVersion::Latest {
        check_deprecated_helpers(root, opts, &mut findings);
    }
    check_partials(root, opts, &mut findings);
    findings
}

/// Pre-check mode runs only rules flagged as pre in the table.
fn enabled(rule: &Rule, opts: &RunOptions) -> bool {
    !opts.pre_check || rule.pre
}

fn finding(rule: &Rule, failures: Vec<Failure>) -> RawFinding {
    RawFinding {
        rule: format!("{}: {}", rule.code, rule.rule),
        level: rule.level.to_string(),
        failures,
    }
}

fn check_package_json(root: &Path, opts: &RunOptions, findings: &mut Vec<RawFinding>) {
    // The package.json rules share one pre flag.
    if !enabled(&rules::PJ_REQ, opts) {
        return;
    }
    let path = root.join("package.json");
    let data = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(_) => {
            findings.push(finding(&rules::PJ_REQ, vec![]));
            return;
        }
    };
    let json: Json = match serde_json::from_str(&data) {
        Ok(v) => v,
        Err(_) => {
            findings.push(finding(&rules::PJ_PARSE, vec![Failure::new("package.json")]));
            return;
        }
    };
    if json.get("name").and_then(Json::as_str).is_none() {
        findings.push(finding(&rules::PJ_NAME, vec![Failure::new("package.json")]));
    }
    if json.get("version").and_then(Json::as_str).is_none() {
        findings.push(finding(&rules::PJ_VERSION, vec![Failure::new("package.json")]));
    }
}

fn check_templates(root: &Path, opts: &RunOptions, findings: &mut Vec<RawFinding>) {
    // The template rules share one pre flag.
    if !enabled(&rules::INDEX_REQ, opts) {
        return;
    }
    if !root.join("index.hbs").is_file() {
        findings.push(finding(&rules::INDEX_REQ, vec![]));
    }
    if !root.join("post.hbs").is_file() {
        findings.push(finding(&rules::POST_REQ, vec![]));
    }
    if !root.join("default.hbs").is_file() {
        findings.push(finding(&rules::DEF_REC, vec![]));
    }
}

fn check_assets(root: &Path, opts: &RunOptions, findings: &mut Vec<RawFinding>) {
    if !enabled(&rules::ASSET_REC, opts) {
        return;
    }
    if root.join("assets").is_dir() {
        return;
    }
    let mut stray: Vec<Failure> = Vec::new();
    for pattern in ["**/*.css", "**/*.js"] {
        for path in theme_files(root, pattern) {
            stray.push(Failure::new(relative(root, &path)));
        }
    }
    if !stray.is_empty() {
        stray.sort_by(|a, b| a.file.cmp(&b.file));
        findings.push(finding(&rules::ASSET_REC, stray));
    }
}

fn check_deprecated_helpers(root: &Path, opts: &RunOptions, findings: &mut Vec<RawFinding>) {
    let deprecated: Vec<(&Rule, Regex)> = [
        (&rules::DEPR_PURL, r"\{\{\s*pageUrl\b"),
        (&rules::DEPR_IMG, r"\{\{\s*image\b"),
    ]
    .into_iter()
    .filter(|(rule, _)| enabled(rule, opts))
    .map(|(rule, pattern)| (rule, Regex::new(pattern).expect("bad helper pattern")))
    .collect();
    if deprecated.is_empty() {
        return;
    }
    let templates: Vec<_> = theme_files(root, "**/*.hbs");
    for (rule, pattern) in deprecated {
        let mut hits: Vec<Failure> = Vec::new();
        for path in &templates {
            // Unreadable files are skipped; presence checks cover structure.
            let Ok(source) = fs::read_to_string(path) else {
                continue;
            };
            if pattern.is_match(&source) {
                hits.push(Failure::new(relative(root, path)));
            }
        }
        if !hits.is_empty() {
            findings.push(finding(rule, hits));
        }
    }
}

fn check_partials(root: &Path, opts: &RunOptions, findings: &mut Vec<RawFinding>) {
    if !enabled(&rules::PARTIALS, opts) {
        return;
    }
    let partials: Vec<Failure> = theme_files(root, "partials/*.hbs")
        .iter()
        .map(|p| Failure::new(relative(root, p)))
        .collect();
    if !partials.is_empty() {
        findings.push(finding(&rules::PARTIALS, partials));
    }
}

/// Glob-match files under the theme root, skipping node_modules.
fn theme_files(root: &Path, pattern: &str) -> Vec<std::path::PathBuf> {
    let full = root.join(pattern).to_string_lossy().to_string();
    let Ok(paths) = glob(&full) else {
        return Vec::new();
    };
    paths
        .flatten()
        .filter(|p| p.is_file())
        .filter(|p| !p.components().any(|c| c.as_os_str() == "node_modules"))
        .collect()
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
