// Test fixtures - reusable test data
// Provides consistent dates and config files across test files

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday Jan 29, 2025 (mid-week)
    pub fn wednesday_jan_29_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 29).unwrap()
    }

    /// Sunday Feb 2, 2025, the last day of a Monday-start week
    pub fn sunday_feb_2_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 2).unwrap()
    }

    /// Friday Mar 14, 2025, inside a six-week month grid
    pub fn mid_march_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (week crosses into the next year)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample configuration files
pub mod configs {
    /// A merchant with Sunday weeks, 12-hour times and weekday hours
    pub const SUNDAY_MERCHANT: &str = r#"
[preferences]
first_day_of_week = "sunday"
time_format = "12h"
default_view = "MonthGrid"

[business_hours.monday]
open = "09:00"
close = "17:00"

[business_hours.tuesday]
open = "09:00"
close = "17:00"

[business_hours.saturday]
open = "10:00"
close = "14:00"
"#;

    /// Numeric preferences, 0 = Sunday
    pub const NUMERIC_PREFERENCES: &str = r#"
[preferences]
first_day_of_week = 0
time_format = 12
"#;

    /// A config with values the app does not recognise
    pub const UNRECOGNISED_VALUES: &str = r#"
[preferences]
first_day_of_week = "thursday"
time_format = "decimal"
default_view = "Quarter"
"#;
}
