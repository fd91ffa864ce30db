use chrono::{Duration, NaiveDate};

use crate::models::settings::FirstDayOfWeek;
use crate::models::view::CalendarViewMode;
use crate::models::window::DateWindow;
use crate::services::clock::Clock;
use crate::utils::date::{first_of_month, last_of_month, week_start};

/// Window the given view shows for today.
///
/// A missing `first_day` means Monday.
pub fn compute_window(
    view: CalendarViewMode,
    first_day: Option<FirstDayOfWeek>,
    clock: &dyn Clock,
) -> DateWindow {
    let today = clock.today();
    let window = window_for_date(view, first_day, today);
    log::debug!(
        "Computed {} window {} .. {} for {}",
        view,
        window.start(),
        window.end(),
        today
    );
    window
}

/// Window the given view shows for an arbitrary anchor date.
pub fn window_for_date(
    view: CalendarViewMode,
    first_day: Option<FirstDayOfWeek>,
    anchor: NaiveDate,
) -> DateWindow {
    let first_day = first_day.unwrap_or_default();
    match view {
        CalendarViewMode::DayGrid => DateWindow::spanning(anchor, 1),
        // With a Monday start, a Sunday is the last day of the week that
        // began the previous Monday
        CalendarViewMode::WeekGrid | CalendarViewMode::WeekList => {
            DateWindow::spanning(week_start(anchor, first_day), 7)
        }
        CalendarViewMode::MonthGrid => month_grid(anchor, first_day),
    }
}

/// Padded grid of whole weeks covering the month that contains `date`.
///
/// Starts on the last `first_day` on or before the 1st and ends (exclusive)
/// on the first `first_day` after the last day of the month.
pub fn month_grid(date: NaiveDate, first_day: FirstDayOfWeek) -> DateWindow {
    let start = week_start(first_of_month(date), first_day);
    let end = week_start(last_of_month(date), first_day) + Duration::days(7);
    DateWindow::spanning(start, (end - start).num_days())
}
