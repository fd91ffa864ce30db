//! Half-open date windows.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::utils::date::format_date_only;

/// The range `[start, end)` a calendar view displays and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting an end before the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window of `days` days beginning at `start`.
    pub(crate) fn spanning(start: NaiveDate, days: i64) -> Self {
        Self {
            start,
            end: start + Duration::days(days.max(0)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end date.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Last date shown, i.e. the day before the exclusive end.
    pub fn last_day(&self) -> NaiveDate {
        if self.end > self.start {
            self.end - Duration::days(1)
        } else {
            self.start
        }
    }

    /// Length in whole days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Move the whole window by a number of days.
    pub fn shifted(&self, days: i64) -> Self {
        Self {
            start: self.start + Duration::days(days),
            end: self.end + Duration::days(days),
        }
    }

    /// `start`/`end` query parameters for the bookings request.
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("start", format_date_only(self.start)),
            ("end", format_date_only(self.end)),
        ]
    }
}
