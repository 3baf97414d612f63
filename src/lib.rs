//! themescan core library.
//!
//! Checks a Ghost theme (folder or zip archive) for compatibility issues and
//! renders the findings as a severity-grouped terminal report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `scan`: Scan engine — rule table, theme checks, directory/zip entry points.
//! - `classify`: Normalizes raw engine output into the four severity buckets.
//! - `summary`: One-line summary with exact-width divider.
//! - `output`: Severity-sectioned text rendering of a report.
//! - `run`: Orchestration from scan invocation to exit code.
//! - `models`: Data models for findings, reports, and run options.
//! - `style`: Terminal color helpers and visible-width accounting.

pub mod classify;
pub mod cli;
pub mod models;
pub mod output;
pub mod run;
pub mod scan;
pub mod style;
pub mod summary;
