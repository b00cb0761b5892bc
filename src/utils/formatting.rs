//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width (emoji and CJK count as two columns).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = match (want_sign, mins.signum()) {
        (true, 1) => "+",
        (true, -1) => "-",
        _ => "",
    };

    if short {
        // +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Two-decimal hours, as printed in reports and exports.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", h)
}
