//! themescan binary entry point.
//! Parses arguments, runs the scan pipeline, prints the report, and turns
//! the run result into a process exit code.

mod classify;
mod cli;
mod models;
mod output;
mod run;
mod scan;
mod style;
mod summary;

use clap::Parser;
use cli::Cli;
use models::{CheckVersion, OutputFormat, RunOptions};

fn main() {
    let cli = Cli::parse();

    let opts = RunOptions {
        check_version: if cli.v1 {
            CheckVersion::V1
        } else {
            CheckVersion::Latest
        },
        pre_check: cli.pre,
        format: OutputFormat::Cli,
        color: style::use_colors(),
    };

    println!("{}", style::bold("Checking theme compatibility..", opts.color));

    let result = run::run(&cli.theme_path, cli.zip, &opts);
    println!("{}", result.output);
    std::process::exit(result.exit_code);
}
