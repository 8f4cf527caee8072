//! Match date parsing

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};

use crate::error::{LeagueError, Result};

/// Format accepted for explicit match dates on the command line
pub const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-supplied `YYYY-MM-DD` date, resolved to that day's midnight.
///
/// Month and day may be written without zero padding (`2025-5-20`).
pub fn parse_match_date(text: &str) -> Result<NaiveDateTime> {
    if !has_match_date_shape(text) {
        return Err(LeagueError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, MATCH_DATE_FORMAT)
        .map(|day| day.and_time(NaiveTime::MIN))
        .map_err(|_| LeagueError::InvalidDate(text.to_string()))
}

/// Four-digit year, one or two digit month and day. chrono alone would also
/// take short or signed years and leading whitespace.
fn has_match_date_shape(text: &str) -> bool {
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            is_digits(year, 4, 4) && is_digits(month, 1, 2) && is_digits(day, 1, 2)
        }
        _ => false,
    }
}

fn is_digits(field: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

/// Current local wall-clock time, without offset, at microsecond precision
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod date_tests;
