//! Text helpers for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences, so padded widths can be computed on the
/// text the terminal actually shows.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Display width of a possibly colored cell.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// "8 hrs", "7.5 hrs"
pub fn format_hours(hours: rust_decimal::Decimal) -> String {
    format!("{} hrs", hours.normalize())
}
