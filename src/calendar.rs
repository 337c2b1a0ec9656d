//! Timezone-safe calendar arithmetic for the roster.
//!
//! All dates exchanged with the outside world use the `YYYY-MM-DD` form
//! produced by [`format_date_string`]. Months passed in by callers are
//! 0-indexed (`0` = January), matching the web client.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month must be between 0 and 11, got {0}")]
    InvalidMonth(u32),

    #[error("year {year} month {month} is outside the supported calendar range")]
    OutOfRange { year: i32, month: u32 },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Server-local calendar date. Only the HTTP layer reads the clock; everything
/// below it takes an explicit as-of date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders the value's own year/month/day, never a UTC-normalised one.
pub fn format_date_string<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_date_string(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

/// Long form used in share messages, e.g. `Sunday, December 15, 2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    year: i32,
    month0: u32,
}

impl MonthRef {
    pub fn new(year: i32, month0: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .ok_or(CalendarError::OutOfRange {
                year,
                month: month0,
            })?;

        Ok(Self { year, month0 })
    }

    /// Missing parts default to `today`'s year and month.
    pub fn resolve(
        year: Option<i32>,
        month0: Option<u32>,
        today: NaiveDate,
    ) -> Result<Self, CalendarError> {
        Self::new(
            year.unwrap_or_else(|| today.year()),
            month0.unwrap_or_else(|| today.month0()),
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn first_day(&self) -> NaiveDate {
        // Range was checked in `new`.
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Every Sunday of the month in ascending order.
    pub fn sundays(&self) -> Vec<NaiveDate> {
        let first = self.first_day();
        let offset = (7 - first.weekday().num_days_from_sunday()) % 7;

        let mut sundays = Vec::with_capacity(5);
        let mut current = first.checked_add_days(Days::new(u64::from(offset)));
        while let Some(sunday) = current.filter(|date| self.contains(*date)) {
            sundays.push(sunday);
            current = sunday.checked_add_days(Days::new(7));
        }
        sundays
    }
}

pub fn all_sundays_in_month(
    year: Option<i32>,
    month0: Option<u32>,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>, CalendarError> {
    Ok(MonthRef::resolve(year, month0, today)?.sundays())
}

/// The next `count` Sundays strictly after `from`.
pub fn next_sundays(from: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut current = from.succ_opt();
    while let Some(date) = current {
        if date.weekday() == Weekday::Sun {
            break;
        }
        current = date.succ_opt();
    }

    let mut sundays = Vec::with_capacity(count);
    while let Some(sunday) = current {
        if sundays.len() == count {
            break;
        }
        sundays.push(sunday);
        current = sunday.checked_add_days(Days::new(7));
    }
    sundays
}

pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// The archival predicate: strictly before `today`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

pub fn is_upcoming(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    days_until(date, today) == 0
}

pub fn is_tomorrow(date: NaiveDate, today: NaiveDate) -> bool {
    days_until(date, today) == 1
}
