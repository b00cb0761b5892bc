use crate::db::pool::DbPool;
use crate::db::queries::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

const OP_MAX: usize = 60;

fn strip_ansi(re: Option<&Regex>, s: &str) -> String {
    match re {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" | "import" => Colour::Green,
        "clear" | "employee_del" => Colour::Red,
        "employee_passwd" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("employee_") => Colour::Cyan,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

/// One printable line: `id: date | op (target) => message`, op coloured.
fn render(entry: &LogEntry, re: Option<&Regex>, id_w: usize, date_w: usize, op_w: usize) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| entry.date.clone());

    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };
    let plain = truncate(&plain, OP_MAX);

    let color = color_for_operation(&entry.operation);
    let colored = match plain.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(plain.as_str()).to_string(),
    };

    let visible = UnicodeWidthStr::width(strip_ansi(re, &colored).as_str());
    let padding = " ".repeat(op_w.saturating_sub(visible));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        date,
        colored,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let re = Regex::new(r"\x1B\[[0-9;]*[mK]").ok();

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for entry in &entries {
            println!("{}", render(entry, re.as_ref(), id_w, date_w, op_w));
        }

        Ok(())
    }
}
