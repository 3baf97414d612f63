//! Terminal styling helpers.
//!
//! Colorization is centralized here so the composer and renderer never touch
//! `owo_colors` directly. `visible_width` exposes the unstyled length of a
//! styled string; divider and underline widths are always derived from it
//! rather than from a count of escape characters.

use crate::models::level::Level;
use owo_colors::OwoColorize;

/// Colors are on unless NO_COLOR is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Number of visibly rendered characters in `s`, skipping ANSI escape
/// sequences (`ESC [ ... m`).
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Paint a level word in its severity color.
pub fn paint_level(level: Level, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match level {
        Level::Error => text.red().to_string(),
        Level::Warning | Level::Recommendation => text.yellow().to_string(),
        Level::Feature => text.green().to_string(),
    }
}

/// Paint a section header (bold, severity color).
pub fn paint_header(level: Level, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match level {
        Level::Error => text.red().bold().to_string(),
        Level::Warning | Level::Recommendation => text.yellow().bold().to_string(),
        Level::Feature => text.green().bold().to_string(),
    }
}

pub fn bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn red(text: &str, color: bool) -> String {
    if color {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

pub fn red_bold(text: &str, color: bool) -> String {
    if color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn yellow_bold(text: &str, color: bool) -> String {
    if color {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn green(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

pub fn cyan_underline(text: &str, color: bool) -> String {
    if color {
        text.cyan().underline().to_string()
    } else {
        text.to_string()
    }
}

/// Prefix for fatal diagnostics.
pub fn error_prefix() -> String {
    red_bold("error:", use_colors())
}

/// Prefix for corrective hints.
pub fn hint_prefix() -> String {
    yellow_bold("hint:", use_colors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_width_plain_text() {
        assert_eq!(visible_width("Your theme has 1 error!"), 23);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_visible_width_skips_escape_sequences() {
        let styled = "plain ".to_string() + &"bold".bold().to_string() + " tail";
        assert_eq!(visible_width(&styled), "plain bold tail".len());
        // Nested styles emit nested escapes; only the text must count.
        let nested = "err".red().bold().to_string();
        assert_eq!(visible_width(&nested), 3);
    }

    #[test]
    fn test_visible_width_counts_chars_not_bytes() {
        assert_eq!(visible_width("\u{2713} ok"), 4);
    }

    #[test]
    fn test_paint_level_without_color_is_identity() {
        for lv in Level::ALL {
            assert_eq!(paint_level(lv, lv.as_str(), false), lv.as_str());
        }
    }
}
