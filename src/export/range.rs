use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

/// Parse a `--range` expression into inclusive date bounds.
///
/// Accepted forms:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(AppError::InvalidDate(format!(
                    "start and end must have the same format: {r}"
                )));
            }
            (period(s)?.0, period(e)?.1)
        }
        None => period(r)?,
    };

    if start > end {
        return Err(AppError::InvalidDate(format!("range start after end: {r}")));
    }
    Ok((start, end))
}

/// First and last day of a single year, month or day.
fn period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, month_last_day(first).ok_or_else(invalid)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).map(|d| d - Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2025-03-03").unwrap(), (d("2025-03-03"), d("2025-03-03")));
    }

    #[test]
    fn intervals() {
        assert_eq!(
            parse_range("2024-11:2025-01").unwrap(),
            (d("2024-11-01"), d("2025-01-31"))
        );
        assert!(parse_range("2024:2024-05").is_err());
        assert!(parse_range("2025-03-05:2025-03-01").is_err());
        assert!(parse_range("March").is_err());
    }
}
