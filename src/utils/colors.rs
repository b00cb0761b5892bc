/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholders ("", "--:--", zero durations).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "0.00" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Anomaly flags in yellow, nothing when the day is clean.
pub fn colorize_flags(flags: &str) -> String {
    if flags.is_empty() {
        String::new()
    } else {
        format!("{YELLOW}{flags}{RESET}")
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
