//! Summary line composition.
//!
//! A clean theme gets a single success line. Anything with errors or
//! warnings gets a count sentence underlined by a dash divider whose width
//! always equals the visible (unstyled) sentence length, so the underline
//! lines up whether or not the terminal renders colors.

use crate::models::report::Report;
use crate::style;

/// Compose the one-line summary (plus divider when issues exist).
///
/// Only error and warning counts decide between the "compatible" and "has
/// issues" branches; recommendations and features are rendered elsewhere and
/// never flip the wording.
pub fn compose(report: &Report, color: bool) -> String {
    let error_count = report.error_count();
    let warn_count = report.warn_count();

    if error_count == 0 && warn_count == 0 {
        return format!(
            "{} Your theme is compatible with Ghost {}",
            style::green("\u{2713}", color),
            report.checked_version
        );
    }

    let mut sentence = String::from("Your theme has");

    if error_count > 0 {
        let clause = format!(" {}", count_noun(error_count, "error"));
        sentence.push_str(&style::red_bold(&clause, color));
    }
    if error_count > 0 && warn_count > 0 {
        sentence.push_str(" and");
    }
    if warn_count > 0 {
        let clause = format!(" {}", count_noun(warn_count, "warning"));
        sentence.push_str(&style::yellow_bold(&clause, color));
    }
    sentence.push('!');

    let divider = "-".repeat(style::visible_width(&sentence));
    sentence.push('\n');
    sentence.push_str(&divider);
    sentence
}

/// Numeral plus singular/plural noun: `1 error`, `3 warnings`.
fn count_noun(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
