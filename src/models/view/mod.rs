//! Calendar view modes.
//!
//! The view arrives from URL query state, so parsing is strict and every
//! caller decides what to do with an unknown name.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarViewMode {
    /// Padded month grid of 4 to 6 full weeks.
    MonthGrid,
    /// Seven day time grid.
    #[default]
    WeekGrid,
    /// Single day time grid.
    DayGrid,
    /// Seven day agenda list.
    WeekList,
}

impl CalendarViewMode {
    pub const ALL: [CalendarViewMode; 4] = [
        CalendarViewMode::MonthGrid,
        CalendarViewMode::WeekGrid,
        CalendarViewMode::DayGrid,
        CalendarViewMode::WeekList,
    ];

    /// Canonical name used in URLs and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarViewMode::MonthGrid => "MonthGrid",
            CalendarViewMode::WeekGrid => "WeekGrid",
            CalendarViewMode::DayGrid => "DayGrid",
            CalendarViewMode::WeekList => "WeekList",
        }
    }

    /// Key understood by the calendar rendering component.
    pub fn component_key(&self) -> &'static str {
        match self {
            CalendarViewMode::MonthGrid => "dayGridMonth",
            CalendarViewMode::WeekGrid => "timeGridWeek",
            CalendarViewMode::DayGrid => "timeGridDay",
            CalendarViewMode::WeekList => "listWeek",
        }
    }

    /// Accepted window length in whole days.
    ///
    /// A month grid is 4, 5 or 6 weeks depending on which weekdays the first
    /// and last day of the month fall on.
    pub fn expected_span(&self) -> RangeInclusive<i64> {
        match self {
            CalendarViewMode::MonthGrid => 28..=42,
            CalendarViewMode::WeekGrid | CalendarViewMode::WeekList => 7..=7,
            CalendarViewMode::DayGrid => 1..=1,
        }
    }
}

impl fmt::Display for CalendarViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarViewMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let view = match trimmed.to_ascii_lowercase().as_str() {
            "monthgrid" | "daygridmonth" => CalendarViewMode::MonthGrid,
            "weekgrid" | "timegridweek" => CalendarViewMode::WeekGrid,
            "daygrid" | "timegridday" => CalendarViewMode::DayGrid,
            "weeklist" | "listweek" => CalendarViewMode::WeekList,
            _ => {
                return Err(CalendarError::UnknownView {
                    input: s.to_string(),
                })
            }
        };
        Ok(view)
    }
}
