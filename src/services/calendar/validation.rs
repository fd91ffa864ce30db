use chrono::NaiveDate;

use crate::models::view::CalendarViewMode;
use crate::utils::date::parse_date_only;

/// Check an untrusted `view`/`start`/`end` triple from URL state.
///
/// Fails closed: an unknown view, an unparseable date or an end before the
/// start all give `false`, the same as a span of the wrong length.
pub fn is_window_valid(view: &str, start: &str, end: &str) -> bool {
    let Ok(view) = view.parse::<CalendarViewMode>() else {
        return false;
    };
    match (parse_date_only(start), parse_date_only(end)) {
        (Ok(start), Ok(end)) => is_span_valid(view, start, end),
        _ => false,
    }
}

/// Whether `[start, end)` has the length `view` expects.
pub fn is_span_valid(view: CalendarViewMode, start: NaiveDate, end: NaiveDate) -> bool {
    if end < start {
        return false;
    }
    view.expected_span().contains(&(end - start).num_days())
}
