// Date utility functions
// Shared parsing and formatting for date-only and time-of-day values

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

use crate::error::CalendarError;
use crate::models::settings::{FirstDayOfWeek, TimeFormat};

/// Parse a `YYYY-MM-DD` string as a local calendar date.
///
/// The string is split into a year/month/day triple and the date is built
/// from those numbers directly. Nothing is interpreted as an instant, so
/// there is no timezone shift near midnight.
pub fn parse_date_only(input: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDate {
        input: input.to_string(),
    };

    let mut parts = input.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    if ![year, month, day]
        .iter()
        .all(|p| p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid());
    }

    match (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Format a date for transport as `YYYY-MM-DD`.
pub fn format_date_only(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Zero-padded 24-hour `HH:MM` key, sortable as a string.
pub fn format_time_value(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

pub fn parse_time_value(input: &str) -> Result<NaiveTime, CalendarError> {
    let invalid = || CalendarError::InvalidTime {
        input: input.to_string(),
    };

    let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }
    if ![hour, minute]
        .iter()
        .all(|p| p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid());
    }
    match (hour.parse::<u32>(), minute.parse::<u32>()) {
        (Ok(h), Ok(m)) => NaiveTime::from_hms_opt(h, m, 0).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Display label for a time of day.
///
/// 12-hour labels read `h:MM AM`/`h:MM PM` with midnight as `12:00 AM` and
/// noon as `12:00 PM`. 24-hour labels read `H:MM`; the hour is not padded
/// even though the matching value key is.
pub fn format_time_label(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => {
            let (is_pm, hour) = time.hour12();
            let suffix = if is_pm { "PM" } else { "AM" };
            format!("{}:{:02} {}", hour, time.minute(), suffix)
        }
        TimeFormat::TwentyFourHour => format!("{}:{:02}", time.hour(), time.minute()),
    }
}

/// Most recent `first_day` on or before `date`.
pub fn week_start(date: NaiveDate, first_day: FirstDayOfWeek) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let first = first_day.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first + 7) % 7;
    date - Duration::days(offset)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    // 32 days past any 1st always lands in the following month
    first_of_month(first + Duration::days(32))
}

pub fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(date) - Duration::days(1))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_next_month(date) - Duration::days(1)
}
