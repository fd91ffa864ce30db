// Settings module
// Merchant display preferences for the calendar

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::view::CalendarViewMode;

/// Day a week or month grid starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstDayOfWeek {
    #[default]
    Monday,
    Sunday,
}

impl FirstDayOfWeek {
    pub fn weekday(&self) -> Weekday {
        match self {
            FirstDayOfWeek::Monday => Weekday::Mon,
            FirstDayOfWeek::Sunday => Weekday::Sun,
        }
    }

    /// Resolve a stored setting, falling back to Monday when the value is
    /// missing or not recognised.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Unrecognised first_day_of_week {:?}, using Monday", raw);
                Self::default()
            }),
        }
    }
}

impl FromStr for FirstDayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Numeric forms follow the 0 = Sunday, 1 = Monday convention
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" | "1" => Ok(FirstDayOfWeek::Monday),
            "sunday" | "sun" | "0" => Ok(FirstDayOfWeek::Sunday),
            other => Err(format!("unknown first day of week: {}", other)),
        }
    }
}

impl fmt::Display for FirstDayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstDayOfWeek::Monday => f.write_str("monday"),
            FirstDayOfWeek::Sunday => f.write_str("sunday"),
        }
    }
}

/// Clock style for time labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    /// Resolve a stored setting, falling back to 24-hour when the value is
    /// missing or not recognised.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Unrecognised time_format {:?}, using 24h", raw);
                Self::default()
            }),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12-hour" | "12" => Ok(TimeFormat::TwelveHour),
            "24h" | "24-hour" | "24" => Ok(TimeFormat::TwentyFourHour),
            other => Err(format!("unknown time format: {}", other)),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::TwelveHour => f.write_str("12h"),
            TimeFormat::TwentyFourHour => f.write_str("24h"),
        }
    }
}

/// Preferences passed explicitly into the calendar functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Preferences {
    pub first_day_of_week: FirstDayOfWeek,
    pub time_format: TimeFormat,
}

/// Settings as stored in the configuration file.
///
/// Preference values are kept as raw strings so that a bad entry degrades to
/// its default instead of rejecting the whole file. Integers are accepted in
/// their string form, e.g. `first_day_of_week = 0` for Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "lenient_setting")]
    pub first_day_of_week: Option<String>,
    #[serde(deserialize_with = "lenient_setting")]
    pub time_format: Option<String>,
    #[serde(deserialize_with = "lenient_setting")]
    pub default_view: Option<String>,
    /// IANA timezone name used to decide what "today" is
    pub timezone: Option<String>,
}

/// Read a preference as a string, dropping values of any other shape.
fn lenient_setting<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(toml::Value::String(s)) => Some(s),
        Some(toml::Value::Integer(i)) => Some(i.to_string()),
        Some(other) => {
            log::warn!("Ignoring {} preference value {}", other.type_str(), other);
            None
        }
    })
}

impl Settings {
    pub fn preferences(&self) -> Preferences {
        Preferences {
            first_day_of_week: FirstDayOfWeek::from_setting(self.first_day_of_week.as_deref()),
            time_format: TimeFormat::from_setting(self.time_format.as_deref()),
        }
    }

    pub fn default_view(&self) -> CalendarViewMode {
        match self.default_view.as_deref() {
            None => CalendarViewMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Unrecognised default_view {:?}, using WeekGrid", raw);
                CalendarViewMode::default()
            }),
        }
    }

    /// Parsed timezone, if one is configured.
    pub fn timezone(&self) -> Result<Option<chrono_tz::Tz>, String> {
        self.timezone
            .as_deref()
            .map(|tz| {
                tz.parse::<chrono_tz::Tz>()
                    .map_err(|_| format!("unknown timezone: {}", tz))
            })
            .transpose()
    }

    /// Check that every preference is recognised rather than defaulted.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref value) = self.first_day_of_week {
            value.parse::<FirstDayOfWeek>()?;
        }
        if let Some(ref value) = self.time_format {
            value.parse::<TimeFormat>()?;
        }
        if let Some(ref value) = self.default_view {
            value
                .parse::<CalendarViewMode>()
                .map_err(|e| e.to_string())?;
        }
        self.timezone()?;
        Ok(())
    }
}
