use crate::shared::core::errors::ServiceError;
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use thiserror::Error;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("year must be between 2000 and 2100, got {0}")]
    YearOutOfRange(i32),

    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),
}

impl From<PeriodError> for ServiceError {
    fn from(err: PeriodError) -> Self {
        ServiceError::InvalidRequest(err.to_string())
    }
}

/// A calendar month in UTC, the half-open range `[start, next_start)`.
/// `end` is the last millisecond, kept for display in report periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub next_start: DateTime<Utc>,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PeriodError::YearOutOfRange(year));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PeriodError::MonthOutOfRange(month))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(PeriodError::MonthOutOfRange(month))?;

        let start = first.and_time(chrono::NaiveTime::MIN).and_utc();
        let next_start = next.and_time(chrono::NaiveTime::MIN).and_utc();
        Ok(Self {
            year,
            month,
            start,
            end: next_start - TimeDelta::milliseconds(1),
            next_start,
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.next_start
    }

    /// Monday to Friday count. No holiday calendar applies.
    pub fn working_days(&self) -> u32 {
        self.start
            .date_naive()
            .iter_days()
            .take_while(|day| *day <= self.end.date_naive())
            .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u32
    }
}
