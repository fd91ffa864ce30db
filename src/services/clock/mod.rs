// Clock service
// Source of "today" for window calculations

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Supplies the current calendar date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Today in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Today in a fixed IANA timezone, e.g. the merchant's.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Pick a clock for an optional timezone setting.
///
/// Unknown timezone names fall back to local time.
pub fn clock_for_timezone(timezone: Option<&str>) -> Box<dyn Clock> {
    match timezone {
        Some(name) => match name.parse::<Tz>() {
            Ok(tz) => Box::new(ZonedClock::new(tz)),
            Err(_) => {
                log::warn!("Unknown timezone {:?}, using local time", name);
                Box::new(SystemClock)
            }
        },
        None => Box::new(SystemClock),
    }
}
