//! Run controller: scan, classify, summarize, render, decide the exit code.
//!
//! Everything is folded into a `RunResult` so the pipeline can be exercised
//! in tests without touching process exit; `main` is the only caller that
//! terminates.

use crate::classify;
use crate::models::{OutputFormat, RunOptions, RunResult};
use crate::output;
use crate::scan::{self, ScanError};
use crate::style;
use std::path::Path;

/// Exit code when the scanned theme has errors or warnings.
pub const EXIT_ISSUES: i32 = 1;
/// Exit code when the scan could not be run at all.
pub const EXIT_INVOCATION: i32 = 2;

/// Run a full check of the theme at `theme_path` and report the outcome.
pub fn run(theme_path: &Path, zip: bool, opts: &RunOptions) -> RunResult {
    let scanned = if zip {
        scan::check_zip(theme_path, opts)
    } else {
        scan::check_directory(theme_path, opts)
    };

    let raw = match scanned {
        Ok(raw) => raw,
        Err(err) => return invocation_failure(err),
    };

    let report = match classify::classify(raw) {
        Ok(report) => report,
        Err(err) => {
            // Integration fault in the engine, not a user problem.
            return RunResult {
                exit_code: EXIT_INVOCATION,
                output: format!("{} internal error: {}", style::error_prefix(), err),
            };
        }
    };

    let exit_code = if report.has_issues() { EXIT_ISSUES } else { 0 };
    let output = match opts.format {
        OutputFormat::Cli => output::render(&report, opts.color),
    };
    RunResult { exit_code, output }
}

fn invocation_failure(err: ScanError) -> RunResult {
    let mut output = format!("{} {}", style::error_prefix(), err);
    if matches!(err, ScanError::NotADirectory(_)) {
        output.push_str(&format!(
            "\n{} Did you mean to add the -z flag to read a zip file?",
            style::hint_prefix()
        ));
    }
    RunResult {
        exit_code: EXIT_INVOCATION,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckVersion;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, contents: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn valid_theme() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", r#"{"name": "casper", "version": "1.0.0"}"#);
        write(&dir, "index.hbs", "{{#foreach posts}}{{title}}{{/foreach}}");
        write(&dir, "post.hbs", "{{content}}");
        write(&dir, "default.hbs", "{{{body}}}");
        dir
    }

    #[test]
    fn test_clean_theme_exits_zero_with_success_summary() {
        let dir = valid_theme();
        let result = run(dir.path(), false, &RunOptions::default());
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("compatible with Ghost latest"));
        assert!(!result.output.contains("Errors"));
    }

    #[test]
    fn test_v1_target_reported_in_summary() {
        let dir = valid_theme();
        let opts = RunOptions {
            check_version: CheckVersion::V1,
            ..Default::default()
        };
        let result = run(dir.path(), false, &opts);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("compatible with Ghost v1"));
    }

    #[test]
    fn test_errors_exit_one_and_render_section() {
        let dir = valid_theme();
        fs::remove_file(dir.path().join("post.hbs")).unwrap();

        let result = run(dir.path(), false, &RunOptions::default());
        assert_eq!(result.exit_code, EXIT_ISSUES);
        assert!(result.output.contains("Your theme has 1 error!"));
        assert!(result.output.contains("post.hbs template is missing"));
    }

    #[test]
    fn test_warnings_alone_also_fail_the_run() {
        let dir = valid_theme();
        write(&dir, "page.hbs", "{{pageUrl pagination.next}}");

        let result = run(dir.path(), false, &RunOptions::default());
        assert_eq!(result.exit_code, EXIT_ISSUES);
        assert!(result.output.contains("Your theme has 1 warning!"));
    }

    #[test]
    fn test_recommendations_alone_still_pass() {
        let dir = valid_theme();
        fs::remove_file(dir.path().join("default.hbs")).unwrap();

        let result = run(dir.path(), false, &RunOptions::default());
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("compatible with Ghost latest"));
        assert!(result.output.contains("Recommendations"));
    }

    #[test]
    fn test_plain_file_without_zip_flag_gets_hint() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("casper.zip");
        fs::write(&file, "zip bytes").unwrap();

        let result = run(&file, false, &RunOptions::default());
        assert_eq!(result.exit_code, EXIT_INVOCATION);
        assert!(result.output.contains("is not a directory"));
        assert!(result
            .output
            .contains("Did you mean to add the -z flag to read a zip file?"));
    }

    #[test]
    fn test_missing_path_fails_without_hint() {
        let dir = TempDir::new().unwrap();
        let result = run(&dir.path().join("nope"), false, &RunOptions::default());
        assert_eq!(result.exit_code, EXIT_INVOCATION);
        assert!(result.output.contains("theme path not found"));
        assert!(!result.output.contains("-z flag"));
    }

    #[test]
    fn test_corrupt_archive_surfaces_verbatim() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("casper.zip");
        fs::write(&file, "zip bytes").unwrap();

        let result = run(&file, true, &RunOptions::default());
        assert_eq!(result.exit_code, EXIT_INVOCATION);
        assert!(result.output.contains("could not read theme archive"));
    }
}
