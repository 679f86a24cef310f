//! Calendar dimension: one row per day, plus month-start helpers
//! used by the monthly auxiliary tables.

use crate::{types::DateId, vocab::month_name_ru};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEntry {
    pub date_id:    DateId,
    pub full_date:  NaiveDate,
    pub year:       i32,
    pub month_name: &'static str,
    pub quarter:    u32,
}

impl CalendarEntry {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date_id:    date_id(date),
            full_date:  date,
            year:       date.year(),
            month_name: month_name_ru(date.month()),
            quarter:    (date.month() - 1) / 3 + 1,
        }
    }
}

/// YYYYMMDD key for a date.
pub fn date_id(date: NaiveDate) -> DateId {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Every day from `start` to `end`, both inclusive. Empty if start > end.
pub fn generate_calendar(start: NaiveDate, end: NaiveDate) -> Vec<CalendarEntry> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(CalendarEntry::for_date)
        .collect()
}

/// First-of-month dates falling inside [start, end].
/// A range starting mid-month begins with the following month.
pub fn month_starts(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut cursor = if start.day() == 1 {
        Some(start)
    } else {
        start
            .with_day(1)
            .and_then(|d| d.checked_add_months(Months::new(1)))
    };

    let mut out = Vec::new();
    while let Some(month) = cursor {
        if month > end {
            break;
        }
        out.push(month);
        cursor = month.checked_add_months(Months::new(1));
    }
    out
}
