use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::CalendarError;
use crate::models::business_hours::{BusinessHours, OpeningHours};
use crate::models::settings::TimeFormat;
use crate::models::time_slot::TimeSlotOption;
use crate::utils::date::{format_time_label, format_time_value, parse_date_only};

const SLOTS_PER_DAY: u32 = 48;
const SLOT_MINUTES: u32 = 30;

fn slot_times() -> impl Iterator<Item = NaiveTime> {
    (0..SLOTS_PER_DAY).filter_map(|slot| {
        let minutes = slot * SLOT_MINUTES;
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
    })
}

fn option_for(time: NaiveTime, format: TimeFormat) -> TimeSlotOption {
    TimeSlotOption::new(format_time_label(time, format), format_time_value(time))
}

/// Every half hour from 00:00 to 23:30, in order.
pub fn generate_time_options(format: TimeFormat) -> Vec<TimeSlotOption> {
    slot_times().map(|time| option_for(time, format)).collect()
}

/// Half-hour options that start while the business is open.
pub fn time_options_within(format: TimeFormat, hours: OpeningHours) -> Vec<TimeSlotOption> {
    slot_times()
        .filter(|time| hours.contains(*time))
        .map(|time| option_for(time, format))
        .collect()
}

/// Options for a specific date; empty when the business is closed that day.
pub fn time_options_for_date(
    format: TimeFormat,
    business_hours: &BusinessHours,
    date: NaiveDate,
) -> Vec<TimeSlotOption> {
    business_hours
        .for_weekday(date.weekday())
        .map(|hours| time_options_within(format, hours))
        .unwrap_or_default()
}

/// All options, or only those inside business hours on a `YYYY-MM-DD` date.
pub fn time_options_on(
    format: TimeFormat,
    business_hours: &BusinessHours,
    date: Option<&str>,
) -> Result<Vec<TimeSlotOption>, CalendarError> {
    match date {
        Some(raw) => Ok(time_options_for_date(format, business_hours, parse_date_only(raw)?)),
        None => Ok(generate_time_options(format)),
    }
}
