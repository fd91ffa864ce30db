use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::settings::FirstDayOfWeek;
use crate::models::view::CalendarViewMode;
use crate::models::window::DateWindow;
use crate::services::clock::Clock;
use crate::utils::date::{
    first_of_next_month, first_of_previous_month, parse_date_only, week_start,
};

use super::anchor::resolve_anchor_month;
use super::validation::is_span_valid;
use super::window::{compute_window, month_grid};

/// Toolbar navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    Previous,
    Today,
    Next,
}

/// Window shown after a toolbar action on the `current` window.
pub fn navigate(
    view: CalendarViewMode,
    current: &DateWindow,
    direction: Navigation,
    first_day: Option<FirstDayOfWeek>,
    clock: &dyn Clock,
) -> DateWindow {
    let step: i64 = match direction {
        Navigation::Today => return compute_window(view, first_day, clock),
        Navigation::Previous => -1,
        Navigation::Next => 1,
    };
    let first_day = first_day.unwrap_or_default();

    match view {
        CalendarViewMode::DayGrid => DateWindow::spanning(current.start(), 1).shifted(step),
        CalendarViewMode::WeekGrid | CalendarViewMode::WeekList => {
            // Realign first in case the week start preference changed
            DateWindow::spanning(week_start(current.start(), first_day), 7).shifted(step * 7)
        }
        CalendarViewMode::MonthGrid => {
            let anchor = resolve_anchor_month(current.start());
            let target = if step < 0 {
                first_of_previous_month(anchor)
            } else {
                first_of_next_month(anchor)
            };
            month_grid(target, first_day)
        }
    }
}

/// [`navigate`] from an untrusted `view`/`start`/`end` triple.
///
/// The triple must be a valid window for its view; nothing is recomputed.
pub fn navigate_from(
    view: &str,
    start: &str,
    end: &str,
    direction: Navigation,
    first_day: Option<FirstDayOfWeek>,
    clock: &dyn Clock,
) -> Result<(CalendarViewMode, DateWindow), CalendarError> {
    let view = view.parse::<CalendarViewMode>()?;
    let current = DateWindow::new(parse_date_only(start)?, parse_date_only(end)?)?;
    if !is_span_valid(view, current.start(), current.end()) {
        return Err(CalendarError::WindowLengthMismatch {
            view,
            days: current.days(),
        });
    }
    Ok((view, navigate(view, &current, direction, first_day, clock)))
}

/// Toolbar title for a window.
pub fn window_title(view: CalendarViewMode, window: &DateWindow) -> String {
    match view {
        CalendarViewMode::MonthGrid => resolve_anchor_month(window.start())
            .format("%B %Y")
            .to_string(),
        CalendarViewMode::DayGrid => window.start().format("%a %-d %b %Y").to_string(),
        CalendarViewMode::WeekGrid | CalendarViewMode::WeekList => {
            let first = window.start();
            let last = window.last_day();
            if first.year() != last.year() {
                format!(
                    "{} - {}",
                    first.format("%-d %b %Y"),
                    last.format("%-d %b %Y")
                )
            } else if first.month() != last.month() {
                format!("{} - {}", first.format("%-d %b"), last.format("%-d %b %Y"))
            } else {
                format!("{} - {}", first.format("%-d"), last.format("%-d %b %Y"))
            }
        }
    }
}
