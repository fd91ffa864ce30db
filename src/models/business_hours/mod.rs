//! Business hours model.
//!
//! Opening hours are configured per weekday as `HH:MM` strings. A weekday
//! without an entry is closed.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::utils::date::{format_time_value, parse_time_value};

/// Open and close time for a single day, with `open < close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOpeningHours", into = "RawOpeningHours")]
pub struct OpeningHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self, CalendarError> {
        if close <= open {
            return Err(CalendarError::InvalidOpeningHours { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Whether `time` falls in `[open, close)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open && time < self.close
    }
}

#[derive(Serialize, Deserialize)]
struct RawOpeningHours {
    open: String,
    close: String,
}

impl TryFrom<RawOpeningHours> for OpeningHours {
    type Error = CalendarError;

    fn try_from(raw: RawOpeningHours) -> Result<Self, Self::Error> {
        OpeningHours::new(parse_time_value(&raw.open)?, parse_time_value(&raw.close)?)
    }
}

impl From<OpeningHours> for RawOpeningHours {
    fn from(hours: OpeningHours) -> Self {
        Self {
            open: format_time_value(hours.open),
            close: format_time_value(hours.close),
        }
    }
}

/// Weekly opening hours of a merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessHours {
    pub monday: Option<OpeningHours>,
    pub tuesday: Option<OpeningHours>,
    pub wednesday: Option<OpeningHours>,
    pub thursday: Option<OpeningHours>,
    pub friday: Option<OpeningHours>,
    pub saturday: Option<OpeningHours>,
    pub sunday: Option<OpeningHours>,
}

impl BusinessHours {
    /// Same hours Monday to Friday, closed at the weekend.
    pub fn weekdays(hours: OpeningHours) -> Self {
        Self {
            monday: Some(hours),
            tuesday: Some(hours),
            wednesday: Some(hours),
            thursday: Some(hours),
            friday: Some(hours),
            saturday: None,
            sunday: None,
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<OpeningHours> {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn is_open(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.for_weekday(date.weekday())
            .is_some_and(|hours| hours.contains(time))
    }

    /// Earliest opening and latest closing time across the week.
    ///
    /// Used as the visible time range of the time grid views. `None` when
    /// the merchant is closed every day.
    pub fn visible_range(&self) -> Option<(NaiveTime, NaiveTime)> {
        let days = [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ];
        let open = days.iter().flatten().map(|h| h.open).min()?;
        let close = days.iter().flatten().map(|h| h.close).max()?;
        Some((open, close))
    }
}
