//! Calendar date-window computations.
//!
//! Everything here is a pure function of its arguments, apart from
//! [`compute_window`] and [`navigate`] which read "today" from a [`Clock`].
//!
//! [`Clock`]: crate::services::clock::Clock

mod anchor;
mod navigation;
mod search;
mod time_slots;
mod validation;
mod window;

pub use anchor::{resolve_anchor_month, resolve_anchor_month_str};
pub use navigation::{navigate, navigate_from, window_title, Navigation};
pub use search::{resolve_search_state, CalendarQuery, ResolvedCalendar};
pub use time_slots::{
    generate_time_options, time_options_for_date, time_options_on, time_options_within,
};
pub use validation::{is_span_valid, is_window_valid};
pub use window::{compute_window, month_grid, window_for_date};
