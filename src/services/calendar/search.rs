use serde::{Deserialize, Serialize};

use crate::models::settings::Preferences;
use crate::models::view::CalendarViewMode;
use crate::models::window::DateWindow;
use crate::services::clock::Clock;
use crate::utils::date::parse_date_only;

use super::validation::is_span_valid;
use super::window::compute_window;

/// Raw calendar search state as it appears in the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarQuery {
    pub view: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Search state that is safe to query the bookings backend with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedCalendar {
    pub view: CalendarViewMode,
    pub window: DateWindow,
    /// The URL state was discarded and the window computed afresh
    pub recomputed: bool,
}

impl ResolvedCalendar {
    /// `start`/`end` parameters for the bookings-in-window request.
    pub fn bookings_query(&self) -> [(&'static str, String); 2] {
        self.window.query_params()
    }
}

/// Decide whether URL search state can be trusted.
///
/// A recognised view with a start/end pair of the right length is kept
/// verbatim. Anything else is replaced by a freshly computed window for the
/// requested view, or for `default_view` when the view is missing or unknown.
pub fn resolve_search_state(
    query: &CalendarQuery,
    preferences: &Preferences,
    default_view: CalendarViewMode,
    clock: &dyn Clock,
) -> ResolvedCalendar {
    let view = query
        .view
        .as_deref()
        .and_then(|raw| raw.parse::<CalendarViewMode>().ok());

    if let Some(view) = view {
        if let Some(window) = trusted_window(view, query) {
            return ResolvedCalendar {
                view,
                window,
                recomputed: false,
            };
        }
    }

    let view = view.unwrap_or(default_view);
    log::debug!(
        "Discarding calendar search state {:?}, recomputing {} window",
        query,
        view
    );
    ResolvedCalendar {
        view,
        window: compute_window(view, Some(preferences.first_day_of_week), clock),
        recomputed: true,
    }
}

fn trusted_window(view: CalendarViewMode, query: &CalendarQuery) -> Option<DateWindow> {
    let start = parse_date_only(query.start.as_deref()?).ok()?;
    let end = parse_date_only(query.end.as_deref()?).ok()?;
    if !is_span_valid(view, start, end) {
        return None;
    }
    DateWindow::new(start, end).ok()
}
