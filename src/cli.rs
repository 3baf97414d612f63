//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "themescan",
    version,
    about = "Check a Ghost theme for compatibility issues",
    long_about = "themescan — checks a Ghost theme folder or zip archive for compatibility issues and reports them by severity.\n\nExits 0 when the theme is clean, 1 when errors or warnings are found.",
    after_help = "Examples:\n  themescan ./casper\n  themescan ./casper.zip -z\n  themescan ./casper --v1\n  themescan ./casper --pre"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Theme folder or .zip file path
    pub theme_path: PathBuf,

    #[arg(short = 'p', long = "pre", help = "Run a pre-check only")]
    pub pre: bool,

    #[arg(short = 'z', long = "zip", help = "Theme path points to a zip file")]
    pub zip: bool,

    #[arg(
        short = '1',
        long = "v1",
        help = "Check theme for Ghost 1.0 compatibility, instead of the latest version"
    )]
    pub v1: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_and_defaults() {
        let cli = Cli::try_parse_from(["themescan", "./casper"]).unwrap();
        assert_eq!(cli.theme_path, PathBuf::from("./casper"));
        assert!(!cli.pre && !cli.zip && !cli.v1);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["themescan", "casper.zip", "-z", "-p", "-1"]).unwrap();
        assert!(cli.pre && cli.zip && cli.v1);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from(["themescan", "casper", "--v1", "--pre"]).unwrap();
        assert!(cli.v1 && cli.pre && !cli.zip);
    }

    #[test]
    fn test_theme_path_is_required() {
        assert!(Cli::try_parse_from(["themescan"]).is_err());
    }
}
