//! Error types for the booking-calendar crate.

/// Error type for the fallible parsing and construction helpers.
///
/// The validators in [`crate::services::calendar`] never surface these to
/// callers; they collapse any error into `false` and let the caller recompute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A date string was not a `YYYY-MM-DD` calendar date.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A time string was not a `HH:MM` 24-hour time.
    #[error("invalid time: {input:?} (expected HH:MM)")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },

    /// A view name did not match any known calendar view.
    #[error("unknown calendar view: {input:?}")]
    UnknownView {
        /// The rejected input.
        input: String,
    },

    /// A window was built with its end before its start.
    #[error("window end {end} is before start {start}")]
    InvertedWindow {
        /// Requested start date.
        start: chrono::NaiveDate,
        /// Requested end date.
        end: chrono::NaiveDate,
    },

    /// A window whose length does not match its view.
    #[error("{days}-day window is not a valid {view} window")]
    WindowLengthMismatch {
        /// View the window was supplied for.
        view: crate::models::view::CalendarViewMode,
        /// Length of the supplied window.
        days: i64,
    },

    /// Opening hours where the close time is not after the open time.
    #[error("closing time {close} must be after opening time {open}")]
    InvalidOpeningHours {
        /// Opening time.
        open: chrono::NaiveTime,
        /// Closing time.
        close: chrono::NaiveTime,
    },
}
